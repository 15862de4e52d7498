use std::sync::Arc;

use crate::application::ports::feed::ArticleFeed;
use crate::domain::article::ArticleReadRepository;

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) feed: Arc<dyn ArticleFeed>,
}

impl ArticleQueryService {
    pub fn new(read_repo: Arc<dyn ArticleReadRepository>, feed: Arc<dyn ArticleFeed>) -> Self {
        Self { read_repo, feed }
    }
}
