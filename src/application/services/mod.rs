// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        ApplicationResult,
        commands::{
            articles::ArticleCommandService,
            auth::{AuthCommandService, TokenLifetimes},
        },
        ports::{
            feed::ArticleFeed,
            sanitizer::HtmlSanitizer,
            security::{PasswordHasher, TokenManager},
            time::Clock,
            util::SlugGenerator,
        },
        queries::{articles::ArticleQueryService, views::ViewQueryService},
        seo::{SiteProfile, render_sitemap, sitemap_entries},
    },
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository, sort_catalogue},
        user::{AccountRepository, UserId},
    },
};

pub struct ApplicationServices {
    pub auth_commands: Arc<AuthCommandService>,
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub views: Arc<ViewQueryService>,
    token_manager: Arc<dyn TokenManager>,
    article_read_repo: Arc<dyn ArticleReadRepository>,
    clock: Arc<dyn Clock>,
    site: SiteProfile,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        article_write_repo: Arc<dyn ArticleWriteRepository>,
        article_read_repo: Arc<dyn ArticleReadRepository>,
        account_repo: Arc<dyn AccountRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
        sanitizer: Arc<dyn HtmlSanitizer>,
        feed: Arc<dyn ArticleFeed>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
        site: SiteProfile,
        admin_uid: UserId,
        lifetimes: TokenLifetimes,
    ) -> Self {
        let auth_commands = Arc::new(AuthCommandService::new(
            Arc::clone(&account_repo),
            Arc::clone(&password_hasher),
            Arc::clone(&token_manager),
            admin_uid,
            lifetimes,
        ));

        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&article_write_repo),
            Arc::clone(&article_read_repo),
            Arc::clone(&slugger),
            Arc::clone(&sanitizer),
            Arc::clone(&feed),
            Arc::clone(&clock),
        ));

        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&article_read_repo),
            Arc::clone(&feed),
        ));

        let views = Arc::new(ViewQueryService::new(
            Arc::clone(&article_read_repo),
            Arc::clone(&sanitizer),
            Arc::clone(&slugger),
            Arc::clone(&clock),
            site.clone(),
        ));

        Self {
            auth_commands,
            article_commands,
            article_queries,
            views,
            token_manager,
            article_read_repo,
            clock,
            site,
        }
    }

    pub fn token_manager(&self) -> Arc<dyn TokenManager> {
        Arc::clone(&self.token_manager)
    }

    pub fn clock(&self) -> Arc<dyn Clock> {
        Arc::clone(&self.clock)
    }

    pub fn site(&self) -> &SiteProfile {
        &self.site
    }

    /// Sitemap of the public site, dated today.
    pub async fn sitemap_xml(&self) -> ApplicationResult<String> {
        let mut articles = self.article_read_repo.list().await?;
        sort_catalogue(&mut articles);
        let entries = sitemap_entries(&self.site, &articles, self.clock.today());
        render_sitemap(&entries)
    }
}
