// src/application/queries/views/article.rs
use super::ViewQueryService;
use crate::{
    application::{
        dto::{AffiliateCtaDto, ArticleCardDto, ArticleDto, ArticleViewDto, ViewContent, ViewDto},
        seo::{PageMeta, breadcrumb, structured_data},
    },
    domain::{
        article::{Article, related_articles},
        navigation::Route,
    },
};

impl ViewQueryService {
    pub(super) fn article_view(&self, catalogue: &[Article], article: &Article) -> ViewDto {
        let route = Route::Article(article.id.clone());
        let related: Vec<ArticleCardDto> = related_articles(catalogue, article)
            .into_iter()
            .map(ArticleCardDto::from)
            .collect();

        ViewDto {
            view: route.view_name().to_string(),
            route: route.to_query(),
            meta: PageMeta::for_article(article).render(&self.site),
            breadcrumb: breadcrumb::article_trail(article),
            structured_data: Some(structured_data::article_review(&self.site, article)),
            content: ViewContent::Article(self.article_content(article, related)),
        }
    }

    /// Article body for display: content is sanitized again on the way out.
    pub(super) fn article_content(&self, article: &Article, related: Vec<ArticleCardDto>) -> ArticleViewDto {
        let kind = article.fields.affiliate_type;
        let affiliate = AffiliateCtaDto {
            href: article
                .fields
                .affiliate_link
                .as_ref()
                .map(|link| link.as_str().to_string()),
            label: kind.call_to_action().to_string(),
            partner: kind.partner_name().to_string(),
        };

        let mut dto = ArticleDto::from(article.clone());
        dto.content = self.sanitizer.sanitize(&dto.content);

        let related_heading = (!related.is_empty()).then(|| {
            format!(
                "D'autres pépites {} ?",
                article.category().as_str().to_lowercase()
            )
        });

        let seo_path = self
            .slugger
            .article_path(article.category().as_str(), article.fields.title.as_str());

        ArticleViewDto {
            article: dto,
            seo_path,
            affiliate,
            related,
            related_heading,
        }
    }
}
