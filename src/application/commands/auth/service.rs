// src/application/commands/auth/service.rs
use std::{sync::Arc, time::Duration};

use crate::application::ports::security::{PasswordHasher, TokenManager};
use crate::domain::user::{AccountRepository, UserId};

#[derive(Debug, Clone, Copy)]
pub struct TokenLifetimes {
    pub admin: Duration,
    pub anonymous: Duration,
}

impl Default for TokenLifetimes {
    fn default() -> Self {
        Self {
            admin: Duration::from_secs(3600),
            anonymous: Duration::from_secs(86_400),
        }
    }
}

pub struct AuthCommandService {
    pub(super) account_repo: Arc<dyn AccountRepository>,
    pub(super) password_hasher: Arc<dyn PasswordHasher>,
    pub(super) token_manager: Arc<dyn TokenManager>,
    pub(super) admin_uid: UserId,
    pub(super) lifetimes: TokenLifetimes,
}

impl AuthCommandService {
    pub fn new(
        account_repo: Arc<dyn AccountRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
        admin_uid: UserId,
        lifetimes: TokenLifetimes,
    ) -> Self {
        Self {
            account_repo,
            password_hasher,
            token_manager,
            admin_uid,
            lifetimes,
        }
    }
}
