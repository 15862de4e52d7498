pub mod database;
pub mod feed;
pub mod repositories;
pub mod sanitizer;
pub mod security;
pub mod time;
pub mod util;
