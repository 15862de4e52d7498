pub mod articles;
pub mod views;
