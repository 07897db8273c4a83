use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the vehicles library.
pub type Result<T> = std::result::Result<T, Error>;

/// Coarse classification used at the HTTP boundary.
///
/// Callers branch on the kind rather than on error messages. Anything that is
/// not explicitly a "no matching records" condition is [`ErrorKind::Generic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// No vehicles matched the query.
    NotFound,
    /// Any other failure.
    Generic,
}

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// No vehicles matched the requested criteria.
    #[error("no vehicles found")]
    NoVehicles,

    /// Unclassified failure raised by a service implementation.
    #[error("{message}")]
    Unspecified { message: String },

    /// Dataset could not be located at the given path.
    #[error("dataset not found at {path}")]
    DatasetNotFound { path: PathBuf },

    /// Two records in the dataset share the same id.
    #[error("duplicate vehicle id encountered: {id}")]
    DuplicateVehicleId { id: u64 },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON parsing errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an unclassified error with the given message.
    pub fn unspecified(message: impl Into<String>) -> Self {
        Self::Unspecified {
            message: message.into(),
        }
    }

    /// Classify this error for response mapping.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NoVehicles => ErrorKind::NotFound,
            _ => ErrorKind::Generic,
        }
    }
}
