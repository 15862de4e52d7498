// src/domain/user/mod.rs
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::Account;
pub use repository::AccountRepository;
pub use value_objects::{Capability, Email, PasswordHash, Role, UserId};
