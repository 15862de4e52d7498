// src/application/queries/views/admin.rs
use super::ViewQueryService;
use crate::{
    application::{
        dto::{AdminViewDto, ArticleDto, ViewContent, ViewDto},
        seo::{PageMeta, breadcrumb},
    },
    domain::{article::Article, navigation::Route},
};

const ADMIN_TITLE: &str = "Atelier de Rédaction";

impl ViewQueryService {
    /// Console listing every article. Callers check the administrator role first.
    pub(super) fn admin_view(&self, catalogue: Vec<Article>) -> ViewDto {
        let route = Route::Admin;
        let articles: Vec<ArticleDto> = catalogue.into_iter().map(ArticleDto::from).collect();

        ViewDto {
            view: route.view_name().to_string(),
            route: route.to_query(),
            meta: PageMeta::new(ADMIN_TITLE, ADMIN_TITLE, route.clone()).render(&self.site),
            breadcrumb: breadcrumb::page_trail(ADMIN_TITLE),
            structured_data: None,
            content: ViewContent::Admin(AdminViewDto {
                article_count: articles.len(),
                articles,
                analytics_url: self.site.analytics_embed_url(),
            }),
        }
    }
}
