// src/application/ports/feed.rs
use crate::application::dto::ArticleSnapshot;
use std::sync::Arc;
use tokio::sync::broadcast;

/// Push channel mirroring the article collection to live subscribers.
pub trait ArticleFeed: Send + Sync {
    /// Fire-and-forget: having no subscriber is not an error.
    fn publish(&self, snapshot: Arc<ArticleSnapshot>);
    fn subscribe(&self) -> broadcast::Receiver<Arc<ArticleSnapshot>>;
    fn latest(&self) -> Option<Arc<ArticleSnapshot>>;
}
