// src/application/commands/articles/update.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleDraft, ArticleId, entity::ArticleUpdate},
};

/// Full replacement of an article's editable fields.
pub struct UpdateArticleCommand {
    pub id: String,
    pub draft: ArticleDraft,
}

impl ArticleCommandService {
    pub async fn update_article(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        actor.ensure_capability("articles", "update")?;

        let id = ArticleId::new(command.id)?;
        self.read_repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let fields = self.clean_fields(command.draft.into_fields()?)?;
        let slug = self.slug_for(&fields.title)?;

        let update = ArticleUpdate {
            id,
            fields,
            slug,
            updated_at: self.clock.now(),
        };

        let updated = self.write_repo.update(update).await?;
        tracing::info!(article_id = %updated.id, actor = %actor.id, "article updated");

        self.publish_snapshot().await;
        Ok(updated.into())
    }
}
