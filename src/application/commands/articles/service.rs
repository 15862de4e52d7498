// src/application/commands/articles/service.rs
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::{
    application::ports::{
        feed::ArticleFeed, sanitizer::HtmlSanitizer, time::Clock, util::SlugGenerator,
    },
    domain::article::{ArticleReadRepository, ArticleWriteRepository},
};

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) slugger: Arc<dyn SlugGenerator>,
    pub(super) sanitizer: Arc<dyn HtmlSanitizer>,
    pub(super) feed: Arc<dyn ArticleFeed>,
    pub(super) clock: Arc<dyn Clock>,
    /// Last published revision. Held for the whole reload and publish so
    /// revisions follow the order in which the store was read.
    pub(super) revision: Mutex<u64>,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
        slugger: Arc<dyn SlugGenerator>,
        sanitizer: Arc<dyn HtmlSanitizer>,
        feed: Arc<dyn ArticleFeed>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            slugger,
            sanitizer,
            feed,
            clock,
            revision: Mutex::new(0),
        }
    }
}
