// src/application/commands/auth/login.rs
use super::AuthCommandService;
use crate::{
    application::{
        dto::{AuthTokenDto, ProfileDto, TokenSubject},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{Account, Email, Role},
};

pub struct LoginCommand {
    pub email: String,
    pub password: String,
}

pub struct LoginResult {
    pub token: AuthTokenDto,
    pub profile: ProfileDto,
}

impl AuthCommandService {
    /// Administrator sign-in. Every failure is reported as the same
    /// "access denied" so callers cannot probe which check failed.
    pub async fn login(&self, command: LoginCommand) -> ApplicationResult<LoginResult> {
        let account = self
            .authenticate_admin(&command.email, &command.password)
            .await?;

        let role = Role::Admin;
        let subject = TokenSubject {
            user_id: account.uid.clone(),
            display_name: account.email.as_str().to_string(),
            role,
            capabilities: role.default_capabilities(),
        };

        let token = self
            .token_manager
            .issue(subject.clone(), self.lifetimes.admin)
            .await?;
        tracing::info!(uid = %account.uid, "administrator signed in");

        Ok(LoginResult {
            profile: ProfileDto::from_subject(&subject, token.expires_at),
            token,
        })
    }

    async fn authenticate_admin(&self, email: &str, password: &str) -> ApplicationResult<Account> {
        let Ok(email) = Email::new(email) else {
            tracing::warn!("login rejected: malformed email");
            self.spend_hashing_cost(password).await;
            return Err(ApplicationError::access_denied());
        };

        let account = match self.account_repo.find_by_email(&email).await {
            Ok(Some(account)) => account,
            Ok(None) => {
                tracing::warn!("login rejected: unknown account");
                self.spend_hashing_cost(password).await;
                return Err(ApplicationError::access_denied());
            }
            Err(err) => {
                tracing::warn!(error = %err, "login rejected: account lookup failed");
                self.spend_hashing_cost(password).await;
                return Err(ApplicationError::access_denied());
            }
        };

        if self
            .password_hasher
            .verify(password, account.password_hash.as_str())
            .await
            .is_err()
        {
            tracing::warn!(uid = %account.uid, "login rejected: bad password");
            return Err(ApplicationError::access_denied());
        }

        if !account.is_administrator(&self.admin_uid) {
            tracing::warn!(uid = %account.uid, "login rejected: not the administrator");
            return Err(ApplicationError::access_denied());
        }

        Ok(account)
    }

    /// One throwaway hash, so a rejected email takes as long as a wrong password.
    async fn spend_hashing_cost(&self, password: &str) {
        if let Err(err) = self.password_hasher.hash(password).await {
            tracing::debug!(error = %err, "throwaway password hash failed");
        }
    }
}
