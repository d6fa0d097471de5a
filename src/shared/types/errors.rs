use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {entity} with {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("Validation: {0}")]
    Validation(String),

    #[error("Already exists: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Energy types that cannot be removed from a vehicle because
    /// entries of those types are already logged against it.
    #[error("Energy types {types:?} are in use by {entry_count} energy entries")]
    EnergyTypeInUse {
        types: Vec<String>,
        entry_count: u64,
    },

    /// Candidate entry mileage contradicts the vehicle's date ordering.
    #[error("Mileage {mileage} is inconsistent with the vehicle's entry history")]
    MileageOutOfOrder { mileage: i64 },

    /// Infrastructure failure surfacing through a domain operation.
    #[error(transparent)]
    Infra(#[from] InfraError),
}

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum InfraError {
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("Crypto error: {0}")]
    Crypto(String),
}
