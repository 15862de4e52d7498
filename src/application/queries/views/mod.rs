// src/application/queries/views/mod.rs
//! Resolution of a navigation state into everything a client renders:
//! content, meta tags, breadcrumb and JSON-LD.
mod admin;
mod article;
mod catalogue;
mod pages;
mod preview;
mod service;

pub use pages::{StaticPageContent, static_page};
pub use service::ViewQueryService;
