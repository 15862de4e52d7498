// src/application/queries/views/service.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::{AuthenticatedUser, ViewDto},
        error::ApplicationResult,
        ports::{sanitizer::HtmlSanitizer, time::Clock, util::SlugGenerator},
        seo::SiteProfile,
    },
    domain::{
        article::{ArticleReadRepository, Section, sort_catalogue},
        navigation::Route,
    },
};

pub struct ViewQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) sanitizer: Arc<dyn HtmlSanitizer>,
    pub(super) slugger: Arc<dyn SlugGenerator>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) site: SiteProfile,
}

impl ViewQueryService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        sanitizer: Arc<dyn HtmlSanitizer>,
        slugger: Arc<dyn SlugGenerator>,
        clock: Arc<dyn Clock>,
        site: SiteProfile,
    ) -> Self {
        Self {
            read_repo,
            sanitizer,
            slugger,
            clock,
            site,
        }
    }

    pub fn site(&self) -> &SiteProfile {
        &self.site
    }

    /// Build the view for `route`. Routes the caller may not see, and
    /// articles that no longer exist, fall back to the unfiltered home page.
    pub async fn resolve(&self, actor: &AuthenticatedUser, route: Route) -> ApplicationResult<ViewDto> {
        actor.ensure_capability("articles", "read")?;

        let mut catalogue = self.read_repo.list().await?;
        sort_catalogue(&mut catalogue);

        let view = match route {
            Route::Home(section) => self.catalogue_view(&catalogue, section, None),
            Route::CategoryGallery(section, sub) => {
                self.catalogue_view(&catalogue, section, Some(sub))
            }
            Route::Article(ref id) => match catalogue.iter().find(|a| &a.id == id) {
                Some(article) => self.article_view(&catalogue, article),
                None => {
                    tracing::debug!(article_id = %id, "unknown article, showing home");
                    self.catalogue_view(&catalogue, Section::All, None)
                }
            },
            Route::Page(page) => self.page_view(page),
            Route::Admin if actor.is_admin() => self.admin_view(catalogue),
            Route::Admin => {
                tracing::debug!(uid = %actor.id, "admin view requested without privileges");
                self.catalogue_view(&catalogue, Section::All, None)
            }
        };

        Ok(view)
    }
}
