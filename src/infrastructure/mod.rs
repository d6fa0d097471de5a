//! Infrastructure layer: persistence and cryptography

pub mod crypto;
pub mod database;
