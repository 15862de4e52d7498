// src/application/queries/views/preview.rs
use super::ViewQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, ViewDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{Article, ArticleDraft, ArticleId, ArticleSlug, sort_catalogue},
};

const PREVIEW_ID: &str = "preview";

impl ViewQueryService {
    /// Render an unsaved draft exactly as its article page would look,
    /// related articles included. Nothing is stored.
    pub async fn preview(&self, actor: &AuthenticatedUser, draft: ArticleDraft) -> ApplicationResult<ViewDto> {
        if !actor.has_capability("articles", "create") && !actor.has_capability("articles", "update") {
            return Err(ApplicationError::forbidden("missing capability articles:create"));
        }

        let fields = draft.into_fields()?;
        let slug = self.slugger.slugify(fields.title.as_str());
        let now = self.clock.now();

        let article = Article {
            id: ArticleId::new(PREVIEW_ID)?,
            slug: ArticleSlug::new(if slug.is_empty() { PREVIEW_ID.to_string() } else { slug })?,
            fields,
            created_at: now,
            updated_at: now,
        };

        let mut catalogue = self.read_repo.list().await?;
        sort_catalogue(&mut catalogue);

        Ok(self.article_view(&catalogue, &article))
    }
}
