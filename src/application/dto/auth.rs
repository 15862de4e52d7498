use crate::application::{ApplicationResult, error::ApplicationError};
use crate::domain::user::{Capability, Role, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthTokenDto {
    pub token: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub expires_in: i64,
}

#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub display_name: String,
    pub role: Role,
    pub capabilities: HashSet<Capability>,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl AuthenticatedUser {
    pub fn has_capability(&self, resource: &str, action: &str) -> bool {
        self.capabilities
            .iter()
            .any(|cap| cap.matches(resource, action))
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// `Forbidden` unless the token grants `resource:action`.
    pub fn ensure_capability(&self, resource: &str, action: &str) -> ApplicationResult<()> {
        if self.has_capability(resource, action) {
            Ok(())
        } else {
            Err(ApplicationError::forbidden(format!(
                "missing capability {resource}:{action}"
            )))
        }
    }
}

#[derive(Debug, Clone)]
pub struct TokenSubject {
    pub user_id: UserId,
    pub display_name: String,
    pub role: Role,
    pub capabilities: HashSet<Capability>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProfileDto {
    pub uid: String,
    pub display_name: String,
    pub role: String,
    pub is_anonymous: bool,
    pub capabilities: Vec<String>,
    pub expires_at: DateTime<Utc>,
}

fn capability_names(capabilities: &HashSet<Capability>) -> Vec<String> {
    let mut names: Vec<String> = capabilities
        .iter()
        .map(|cap| format!("{}:{}", cap.resource, cap.action))
        .collect();
    names.sort();
    names
}

impl ProfileDto {
    pub fn from_subject(subject: &TokenSubject, expires_at: DateTime<Utc>) -> Self {
        Self {
            uid: subject.user_id.to_string(),
            display_name: subject.display_name.clone(),
            role: subject.role.as_str().to_string(),
            is_anonymous: subject.role == Role::Visitor,
            capabilities: capability_names(&subject.capabilities),
            expires_at,
        }
    }
}

impl From<&AuthenticatedUser> for ProfileDto {
    fn from(user: &AuthenticatedUser) -> Self {
        Self {
            uid: user.id.to_string(),
            display_name: user.display_name.clone(),
            role: user.role.as_str().to_string(),
            is_anonymous: user.role == Role::Visitor,
            capabilities: capability_names(&user.capabilities),
            expires_at: user.expires_at,
        }
    }
}
