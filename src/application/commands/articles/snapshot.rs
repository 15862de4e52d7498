// src/application/commands/articles/snapshot.rs
use super::ArticleCommandService;
use crate::{
    application::{
        ApplicationResult,
        dto::{ArticleDto, ArticleSnapshot},
    },
    domain::article::{
        ArticleContent, ArticleFields, ArticleSlug, ArticleTitle, sort_catalogue,
    },
};
use std::sync::Arc;

const FALLBACK_SLUG: &str = "article";

impl ArticleCommandService {
    /// Re-read the collection and push it to live subscribers.
    /// The write that triggered it has already succeeded, so failures are only logged.
    pub(super) async fn publish_snapshot(&self) {
        let mut revision = self.revision.lock().await;
        let mut articles = match self.read_repo.list().await {
            Ok(articles) => articles,
            Err(err) => {
                tracing::warn!(error = %err, "failed to reload articles for live feed");
                return;
            }
        };
        sort_catalogue(&mut articles);

        *revision += 1;
        let snapshot = ArticleSnapshot {
            revision: *revision,
            generated_at: self.clock.now(),
            articles: articles.into_iter().map(ArticleDto::from).collect(),
        };
        tracing::debug!(revision = *revision, count = snapshot.articles.len(), "publishing article snapshot");
        self.feed.publish(Arc::new(snapshot));
    }

    pub(super) fn slug_for(&self, title: &ArticleTitle) -> ApplicationResult<ArticleSlug> {
        let slug = self.slugger.slugify(title.as_str());
        let slug = if slug.is_empty() {
            FALLBACK_SLUG.to_string()
        } else {
            slug
        };
        Ok(ArticleSlug::new(slug)?)
    }

    /// Strip unsafe markup from the content before it is stored.
    pub(super) fn clean_fields(&self, mut fields: ArticleFields) -> ApplicationResult<ArticleFields> {
        let clean = self.sanitizer.sanitize(fields.content.as_str());
        fields.content = ArticleContent::sanitized(clean)?;
        Ok(fields)
    }
}
