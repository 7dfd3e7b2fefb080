use thiserror::Error;

/// Failure reported by a backend implementation.
///
/// Each variant carries the human-readable message that ends up in a
/// store's error slot; the variant records how the failure was classified
/// at the transport boundary.
#[non_exhaustive]
#[derive(Debug, Error, PartialEq)]
pub enum BackendError {
    /// The server rejected the request payload.
    #[error("{0}")]
    Validation(String),
    /// The addressed record does not exist.
    #[error("{0}")]
    NotFound(String),
    /// Authentication failed and was not recovered by a token refresh.
    #[error("{0}")]
    Auth(String),
    /// The server failed on an otherwise well-formed request.
    #[error("{0}")]
    Server(String),
    /// No response was received at all.
    #[error("{0}")]
    Network(String),
}
