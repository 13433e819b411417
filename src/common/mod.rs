pub mod jwk;
pub mod provision;
pub mod types;
