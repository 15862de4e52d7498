//! テストサポートモック再エクスポートモジュール
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod article_repos;
pub mod security;
pub mod time;

// 時刻関連
pub use time::{DummyClock, fixed_now};

// セキュリティ関連
pub use security::{
    ADMIN_EMAIL, ADMIN_PASSWORD, ADMIN_TOKEN, ADMIN_UID, CountingPasswordHasher, DummyTokenManager,
    EXPIRED_TOKEN,
    StrictPasswordHasher, VISITOR_TOKEN, admin_account,
};

// 記事リポジトリ
pub use article_repos::{FailingArticleRepo, InMemoryArticleRepo, SlowListRepo};
