// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::ApplicationResult,
    },
    domain::article::{ArticleDraft, NewArticle},
};

pub struct CreateArticleCommand {
    pub draft: ArticleDraft,
}

impl CreateArticleCommand {
    pub fn builder() -> CreateArticleCommandBuilder {
        CreateArticleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateArticleCommandBuilder {
    draft: ArticleDraft,
}

impl CreateArticleCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.draft.title = title.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.draft.category = category.into();
        self
    }

    pub fn excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.draft.excerpt = excerpt.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.draft.content = content.into();
        self
    }

    pub fn image(mut self, url: impl Into<String>, alt: impl Into<String>) -> Self {
        self.draft.image_url = url.into();
        self.draft.image_alt = alt.into();
        self
    }

    pub fn affiliate(mut self, link: impl Into<String>, kind: impl Into<String>) -> Self {
        self.draft.affiliate_link = Some(link.into());
        self.draft.affiliate_type = Some(kind.into());
        self
    }

    pub fn build(self) -> CreateArticleCommand {
        CreateArticleCommand { draft: self.draft }
    }
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        actor: &AuthenticatedUser,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        actor.ensure_capability("articles", "create")?;

        let fields = self.clean_fields(command.draft.into_fields()?)?;
        let slug = self.slug_for(&fields.title)?;

        let new_article = NewArticle {
            fields,
            slug,
            created_at: self.clock.now(),
        };

        let created = self.write_repo.insert(new_article).await?;
        tracing::info!(article_id = %created.id, actor = %actor.id, "article created");

        self.publish_snapshot().await;
        Ok(created.into())
    }
}
