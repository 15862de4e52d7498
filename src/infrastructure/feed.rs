// src/infrastructure/feed.rs
use crate::application::{dto::ArticleSnapshot, ports::feed::ArticleFeed};
use std::sync::{Arc, RwLock};
use tokio::sync::broadcast;

/// In-process fan-out of article snapshots. Slow receivers lag and skip
/// to newer snapshots; the latest one is kept for late subscribers.
pub struct BroadcastArticleFeed {
    sender: broadcast::Sender<Arc<ArticleSnapshot>>,
    latest: RwLock<Option<Arc<ArticleSnapshot>>>,
}

impl BroadcastArticleFeed {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self {
            sender,
            latest: RwLock::new(None),
        }
    }
}

impl ArticleFeed for BroadcastArticleFeed {
    fn publish(&self, snapshot: Arc<ArticleSnapshot>) {
        match self.latest.write() {
            Ok(mut latest) => *latest = Some(Arc::clone(&snapshot)),
            Err(poisoned) => *poisoned.into_inner() = Some(Arc::clone(&snapshot)),
        }
        let receivers = self.sender.send(snapshot).unwrap_or(0);
        tracing::debug!(receivers, "article snapshot broadcast");
    }

    fn subscribe(&self) -> broadcast::Receiver<Arc<ArticleSnapshot>> {
        self.sender.subscribe()
    }

    fn latest(&self) -> Option<Arc<ArticleSnapshot>> {
        match self.latest.read() {
            Ok(latest) => latest.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}
