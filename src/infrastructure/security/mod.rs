pub mod accounts;
pub mod claims;
pub mod password;
pub mod token;
