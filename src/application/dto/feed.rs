use super::ArticleDto;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Full copy of the article collection pushed to live subscribers.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleSnapshot {
    /// Increases by one with every published snapshot.
    pub revision: u64,
    pub generated_at: DateTime<Utc>,
    pub articles: Vec<ArticleDto>,
}
