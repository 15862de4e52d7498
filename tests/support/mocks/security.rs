// tests/support/mocks/security.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use clara_blog::application::{
    ApplicationResult,
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    error::ApplicationError,
    ports::security::{PasswordHasher, TokenManager},
};
use clara_blog::domain::user::{Account, Email, PasswordHash, Role, UserId};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// テスト用トークン定数（タイポ防止とIDE補完のため）
pub const ADMIN_TOKEN: &str = "admin-token";
pub const VISITOR_TOKEN: &str = "visitor-token";
pub const EXPIRED_TOKEN: &str = "expired-token";

/// 設定済み管理者アカウント
pub const ADMIN_UID: &str = "clara-admin";
pub const ADMIN_EMAIL: &str = "clara@lechoixdeclara.fr";
pub const ADMIN_PASSWORD: &str = "s3cret-dressing";

pub fn admin_account() -> Account {
    Account {
        uid: UserId::new(ADMIN_UID).expect("invalid uid"),
        email: Email::new(ADMIN_EMAIL).expect("invalid email"),
        password_hash: PasswordHash::new(format!("hash::{ADMIN_PASSWORD}")).expect("invalid hash"),
        role: Role::Admin,
    }
}

/* -------------------------------- TokenManager -------------------------------- */

/// ロールに応じた固定トークンを発行・検証するダミー
#[derive(Clone, Debug, Default)]
pub struct DummyTokenManager;

#[async_trait]
impl TokenManager for DummyTokenManager {
    async fn issue(&self, subject: TokenSubject, ttl: Duration) -> ApplicationResult<AuthTokenDto> {
        let now = super::time::fixed_now();
        let ttl = chrono::Duration::from_std(ttl)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        let token = match subject.role {
            Role::Admin => ADMIN_TOKEN,
            Role::Visitor => VISITOR_TOKEN,
        };
        Ok(AuthTokenDto {
            token: token.into(),
            issued_at: now,
            expires_at: now + ttl,
            expires_in: ttl.num_seconds(),
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let now = super::time::fixed_now();
        match token {
            ADMIN_TOKEN => Ok(user(ADMIN_UID, ADMIN_EMAIL, Role::Admin, now)),
            VISITOR_TOKEN => Ok(user("anon-visitor", "Visiteur", Role::Visitor, now)),
            // 期限切れトークンは認証時に拒否される
            EXPIRED_TOKEN => Err(ApplicationError::unauthorized("token expired")),
            _ => Err(ApplicationError::unauthorized("invalid token")),
        }
    }
}

fn user(uid: &str, name: &str, role: Role, now: DateTime<Utc>) -> AuthenticatedUser {
    AuthenticatedUser {
        id: UserId::new(uid).expect("invalid user id"),
        display_name: name.into(),
        role,
        capabilities: role.default_capabilities(),
        issued_at: now,
        expires_at: now + chrono::Duration::hours(1),
    }
}

/* -------------------------------- PasswordHasher -------------------------------- */

/// 厳密なパスワードハッシャー（`hash::<password>` 形式のみ一致）
#[derive(Clone, Debug, Default)]
pub struct StrictPasswordHasher;

#[async_trait]
impl PasswordHasher for StrictPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("hash::{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if format!("hash::{password}") == expected_hash {
            Ok(())
        } else {
            Err(ApplicationError::access_denied())
        }
    }
}

/// パスワード処理の回数を数えるハッシャー（照合ロジックは StrictPasswordHasher と同じ）
#[derive(Debug, Default)]
pub struct CountingPasswordHasher {
    calls: AtomicUsize,
}

impl CountingPasswordHasher {
    /// hash と verify の合計呼び出し回数
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PasswordHasher for CountingPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        StrictPasswordHasher.hash(password).await
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        StrictPasswordHasher.verify(password, expected_hash).await
    }
}
