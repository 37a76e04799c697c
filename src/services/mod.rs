use thiserror::Error;

pub mod catalog;
pub mod flutter_env;
pub mod main;

/// Errors surfaced by the service layer to the route handlers.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// A required identifier was empty.
    #[error("{0} is required")]
    MissingParameter(&'static str),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
