// tests/support/helpers.rs
use super::mocks;
use axum::body::{self, Body};
use axum::http::{Request, StatusCode};
use axum::response::Response;
use clara_blog::application::{
    commands::auth::TokenLifetimes,
    ports::{
        feed::ArticleFeed,
        sanitizer::HtmlSanitizer,
        security::{PasswordHasher, TokenManager},
        time::Clock,
        util::SlugGenerator,
    },
    seo::SiteProfile,
    services::ApplicationServices,
};
use clara_blog::domain::article::{Article, ArticleReadRepository, ArticleWriteRepository};
use clara_blog::domain::user::{AccountRepository, UserId};
use clara_blog::infrastructure::{
    feed::BroadcastArticleFeed, sanitizer::AmmoniaSanitizer,
    security::accounts::ConfiguredAccountRepository, util::DefaultSlugGenerator,
};
use clara_blog::presentation::http::{routes::build_router_with_rate_limiter, state::HttpState};
use serde_json::Value;
use std::sync::Arc;

pub const ANALYTICS_SHARE_URL: &str = "https://cloud.umami.is/share/clara";

/// 指定リポジトリでアプリケーションサービスを組み立てる
pub fn build_services<R>(repo: Arc<R>) -> Arc<ApplicationServices>
where
    R: ArticleWriteRepository + ArticleReadRepository + 'static,
{
    let article_write: Arc<dyn ArticleWriteRepository> = repo.clone();
    let article_read: Arc<dyn ArticleReadRepository> = repo;
    let accounts: Arc<dyn AccountRepository> =
        Arc::new(ConfiguredAccountRepository::new(vec![mocks::admin_account()]));
    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(mocks::StrictPasswordHasher);
    let token_manager: Arc<dyn TokenManager> = Arc::new(mocks::DummyTokenManager);
    let sanitizer: Arc<dyn HtmlSanitizer> = Arc::new(AmmoniaSanitizer);
    let feed: Arc<dyn ArticleFeed> = Arc::new(BroadcastArticleFeed::new(16));
    let clock: Arc<dyn Clock> = Arc::new(mocks::DummyClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);
    let site = SiteProfile::default().with_analytics_share_url(Some(ANALYTICS_SHARE_URL.into()));

    Arc::new(ApplicationServices::new(
        article_write,
        article_read,
        accounts,
        password_hasher,
        token_manager,
        sanitizer,
        feed,
        clock,
        slugger,
        site,
        UserId::new(mocks::ADMIN_UID).expect("invalid admin uid"),
        TokenLifetimes::default(),
    ))
}

pub fn make_router_with_repo<R>(repo: Arc<R>) -> axum::Router
where
    R: ArticleWriteRepository + ArticleReadRepository + 'static,
{
    let state = HttpState {
        services: build_services(repo),
    };
    build_router_with_rate_limiter(state, false)
}

/// サンプルカタログ入りのテストルーター
pub fn make_test_router() -> axum::Router {
    make_test_router_with(super::builders::sample_catalogue()).0
}

/// 記事を指定してルーターとリポジトリを返す
pub fn make_test_router_with(
    articles: Vec<Article>,
) -> (axum::Router, Arc<mocks::InMemoryArticleRepo>) {
    let repo = Arc::new(mocks::InMemoryArticleRepo::with_articles(articles));
    (make_router_with_repo(Arc::clone(&repo)), repo)
}

pub fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

pub fn send_json(method: &str, uri: &str, token: Option<&str>, body: &Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub async fn body_bytes(resp: Response) -> Vec<u8> {
    body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body")
        .to_vec()
}

pub async fn json_body(resp: Response) -> Value {
    let bytes = body_bytes(resp).await;
    serde_json::from_slice(&bytes).expect("expected json body")
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(resp: Response, expected_status: StatusCode, expected_error: &str) {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json = json_body(resp).await;
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}
