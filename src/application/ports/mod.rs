// src/application/ports/mod.rs
pub mod feed;
pub mod sanitizer;
pub mod security;
pub mod time;
pub mod util;
