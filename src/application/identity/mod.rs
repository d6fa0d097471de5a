//! Identity module — user management & authentication
//!
//! Contains the `IdentityService` which orchestrates registration, login,
//! refresh-token rotation, profile updates and password changes.

pub mod service;

pub use service::{AuthResult, DeviceInfo, IdentityService};
