use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDto, ArticleSnapshot, AuthenticatedUser},
        error::ApplicationResult,
    },
    domain::article::{ArticleFilter, Section, SubCategory, sort_catalogue},
};
use std::sync::Arc;

/// Catalogue filter as received from the query string (`c` and `s`).
#[derive(Debug, Clone, Default)]
pub struct ListArticlesQuery {
    pub section: Option<String>,
    pub sub_category: Option<String>,
}

impl ListArticlesQuery {
    /// Unknown keys are rejected; a sub-category outside the section is ignored.
    pub(super) fn to_filter(&self) -> ApplicationResult<ArticleFilter> {
        let section = match self.section.as_deref().map(str::trim) {
            None | Some("") => Section::All,
            Some(value) => value.parse::<Section>()?,
        };
        let sub_category = match self.sub_category.as_deref().map(str::trim) {
            None | Some("") | Some("ALL") => None,
            Some(value) => Some(value.parse::<SubCategory>()?),
        };

        Ok(match sub_category {
            Some(sub) if section != Section::All && sub.section() == section => {
                ArticleFilter::gallery(section, sub)
            }
            _ => ArticleFilter::section(section),
        })
    }
}

impl ArticleQueryService {
    pub async fn list_articles(
        &self,
        actor: &AuthenticatedUser,
        query: ListArticlesQuery,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        actor.ensure_capability("articles", "read")?;
        let filter = query.to_filter()?;

        let mut articles = self.read_repo.list().await?;
        sort_catalogue(&mut articles);

        Ok(articles
            .into_iter()
            .filter(|article| filter.matches(article))
            .map(ArticleDto::from)
            .collect())
    }

    /// Latest published snapshot; when nothing was published yet, one built
    /// from the repository with revision 0.
    pub async fn current_snapshot(
        &self,
        actor: &AuthenticatedUser,
        generated_at: chrono::DateTime<chrono::Utc>,
    ) -> ApplicationResult<Arc<ArticleSnapshot>> {
        actor.ensure_capability("articles", "read")?;
        if let Some(snapshot) = self.feed.latest() {
            return Ok(snapshot);
        }

        let mut articles = self.read_repo.list().await?;
        sort_catalogue(&mut articles);
        Ok(Arc::new(ArticleSnapshot {
            revision: 0,
            generated_at,
            articles: articles.into_iter().map(ArticleDto::from).collect(),
        }))
    }

    pub fn subscribe(
        &self,
        actor: &AuthenticatedUser,
    ) -> ApplicationResult<tokio::sync::broadcast::Receiver<Arc<ArticleSnapshot>>> {
        actor.ensure_capability("articles", "read")?;
        Ok(self.feed.subscribe())
    }
}
