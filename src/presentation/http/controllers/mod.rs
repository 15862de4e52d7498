// src/presentation/http/controllers/mod.rs
pub mod admin;
pub mod articles;
pub mod auth;
pub mod feed;
pub mod site;
pub mod views;
