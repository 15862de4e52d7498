// src/application/commands/auth/anonymous.rs
use super::{AuthCommandService, LoginResult};
use crate::{
    application::{
        dto::{ProfileDto, TokenSubject},
        error::ApplicationResult,
    },
    domain::user::{Role, UserId},
};
use uuid::Uuid;

pub const ANONYMOUS_PREFIX: &str = "anon-";
const VISITOR_NAME: &str = "Visiteur";

impl AuthCommandService {
    /// Issue a read-only identity to an unauthenticated reader.
    pub async fn sign_in_anonymously(&self) -> ApplicationResult<LoginResult> {
        let user_id = UserId::new(format!("{ANONYMOUS_PREFIX}{}", Uuid::new_v4()))?;
        let role = Role::Visitor;

        let subject = TokenSubject {
            user_id,
            display_name: VISITOR_NAME.to_string(),
            role,
            capabilities: role.default_capabilities(),
        };

        let token = self
            .token_manager
            .issue(subject.clone(), self.lifetimes.anonymous)
            .await?;
        tracing::debug!(uid = %subject.user_id, "anonymous session issued");

        Ok(LoginResult {
            profile: ProfileDto::from_subject(&subject, token.expires_at),
            token,
        })
    }
}
