// src/application/commands/auth/mod.rs
mod anonymous;
mod login;
mod service;

pub use login::{LoginCommand, LoginResult};
pub use service::{AuthCommandService, TokenLifetimes};
