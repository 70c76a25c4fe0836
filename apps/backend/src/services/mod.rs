pub mod claims;
pub mod games;
pub mod users;
