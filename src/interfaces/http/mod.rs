//! HTTP REST API interfaces
//!
//! - `common`: response envelopes and the validating JSON extractor
//! - `middleware`: JWT bearer authentication
//! - `modules`: one module per resource (dto + handlers)
//! - `router`: API router with Swagger documentation

pub mod common;
pub mod middleware;
pub mod modules;
pub mod router;

pub use router::create_api_router;
