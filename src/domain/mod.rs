pub mod article;
pub mod errors;
pub mod navigation;
pub mod user;
