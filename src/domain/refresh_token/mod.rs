//! Refresh token aggregate

pub mod model;
pub mod repository;

pub use model::RefreshToken;
pub use repository::{CreateRefreshTokenDto, RefreshTokenRepositoryInterface};
