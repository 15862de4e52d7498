// src/infrastructure/security/accounts.rs
use crate::domain::errors::DomainResult;
use crate::domain::user::{Account, AccountRepository, Email};
use async_trait::async_trait;

/// Account directory backed by configuration. The site has a single
/// administrator, so the directory holds at most a handful of entries.
#[derive(Debug, Clone, Default)]
pub struct ConfiguredAccountRepository {
    accounts: Vec<Account>,
}

impl ConfiguredAccountRepository {
    pub fn new(accounts: Vec<Account>) -> Self {
        Self { accounts }
    }
}

#[async_trait]
impl AccountRepository for ConfiguredAccountRepository {
    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<Account>> {
        Ok(self
            .accounts
            .iter()
            .find(|account| &account.email == email)
            .cloned())
    }
}
