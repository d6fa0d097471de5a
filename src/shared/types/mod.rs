pub mod errors;
pub mod pagination;

pub use errors::{DomainError, DomainResult, InfraError};
pub use pagination::PaginatedResult;
