// tests/support/mocks/article_repos.rs
use async_trait::async_trait;
use clara_blog::domain::article::entity::ArticleUpdate;
use clara_blog::domain::article::{
    Article, ArticleId, ArticleReadRepository, ArticleSlug, ArticleWriteRepository, NewArticle,
    sort_catalogue,
};
use clara_blog::domain::errors::{DomainError, DomainResult};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicBool, AtomicU64, Ordering},
};
use std::time::Duration;

/* -------------------------------- InMemoryArticleRepo -------------------------------- */

/// メモリ上の記事リポジトリ（読み書き両方を実装）
#[derive(Default)]
pub struct InMemoryArticleRepo {
    articles: Mutex<Vec<Article>>,
    next_id: AtomicU64,
}

impl InMemoryArticleRepo {
    pub fn with_articles(articles: Vec<Article>) -> Self {
        Self {
            articles: Mutex::new(articles),
            next_id: AtomicU64::new(0),
        }
    }

    pub fn snapshot(&self) -> Vec<Article> {
        self.articles.lock().expect("poisoned").clone()
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleRepo {
    async fn insert(&self, new: NewArticle) -> DomainResult<Article> {
        let n = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let article = Article {
            id: ArticleId::new(format!("mem-{n}"))?,
            fields: new.fields,
            slug: new.slug,
            created_at: new.created_at,
            updated_at: new.created_at,
        };
        self.articles
            .lock()
            .expect("poisoned")
            .push(article.clone());
        Ok(article)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let mut articles = self.articles.lock().expect("poisoned");
        let article = articles
            .iter_mut()
            .find(|a| a.id == update.id)
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        article.rewrite(update.fields, update.slug, update.updated_at);
        Ok(article.clone())
    }

    async fn delete(&self, id: &ArticleId) -> DomainResult<()> {
        let mut articles = self.articles.lock().expect("poisoned");
        let before = articles.len();
        articles.retain(|a| &a.id != id);
        if articles.len() == before {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleRepo {
    async fn find_by_id(&self, id: &ArticleId) -> DomainResult<Option<Article>> {
        Ok(self
            .articles
            .lock()
            .expect("poisoned")
            .iter()
            .find(|a| &a.id == id)
            .cloned())
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        let mut matching: Vec<Article> = self
            .articles
            .lock()
            .expect("poisoned")
            .iter()
            .filter(|a| &a.slug == slug)
            .cloned()
            .collect();
        sort_catalogue(&mut matching);
        Ok(matching.into_iter().next())
    }

    async fn list(&self) -> DomainResult<Vec<Article>> {
        let mut articles = self.snapshot();
        sort_catalogue(&mut articles);
        Ok(articles)
    }
}

/* -------------------------------- SlowListRepo -------------------------------- */

/// 読み取り専用ラッパー：次の一覧取得だけ、読み終えた後に遅延させる
pub struct SlowListRepo {
    inner: Arc<InMemoryArticleRepo>,
    delay_next_list: AtomicBool,
    delay: Duration,
}

impl SlowListRepo {
    pub fn new(inner: Arc<InMemoryArticleRepo>, delay: Duration) -> Self {
        Self {
            inner,
            delay_next_list: AtomicBool::new(false),
            delay,
        }
    }

    /// 次の `list()` 呼び出しを遅くする
    pub fn delay_next_list(&self) {
        self.delay_next_list.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl ArticleReadRepository for SlowListRepo {
    async fn find_by_id(&self, id: &ArticleId) -> DomainResult<Option<Article>> {
        self.inner.find_by_id(id).await
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        self.inner.find_by_slug(slug).await
    }

    async fn list(&self) -> DomainResult<Vec<Article>> {
        let articles = self.inner.list().await?;
        if self.delay_next_list.swap(false, Ordering::SeqCst) {
            tokio::time::sleep(self.delay).await;
        }
        Ok(articles)
    }
}

/* -------------------------------- FailingArticleRepo -------------------------------- */

/// 常に永続化エラーを返すリポジトリ
#[derive(Default)]
pub struct FailingArticleRepo;

fn down<T>() -> DomainResult<T> {
    Err(DomainError::Persistence("connection refused".into()))
}

#[async_trait]
impl ArticleWriteRepository for FailingArticleRepo {
    async fn insert(&self, _new: NewArticle) -> DomainResult<Article> {
        down()
    }

    async fn update(&self, _update: ArticleUpdate) -> DomainResult<Article> {
        down()
    }

    async fn delete(&self, _id: &ArticleId) -> DomainResult<()> {
        down()
    }
}

#[async_trait]
impl ArticleReadRepository for FailingArticleRepo {
    async fn find_by_id(&self, _id: &ArticleId) -> DomainResult<Option<Article>> {
        down()
    }

    async fn find_by_slug(&self, _slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        down()
    }

    async fn list(&self) -> DomainResult<Vec<Article>> {
        down()
    }
}
