// src/domain/user/entity.rs
use crate::domain::user::value_objects::{Email, PasswordHash, Role, UserId};

/// A password-backed identity known to the account directory.
#[derive(Debug, Clone)]
pub struct Account {
    pub uid: UserId,
    pub email: Email,
    pub password_hash: PasswordHash,
    pub role: Role,
}

impl Account {
    pub fn is_administrator(&self, admin_uid: &UserId) -> bool {
        self.role == Role::Admin && &self.uid == admin_uid
    }
}
