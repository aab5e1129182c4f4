//! Error types for the conversion service.

/// Application-level errors.
///
/// Every failure the service detects is one of these four kinds, and each
/// kind maps to exactly one HTTP status code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    InternalServer(String),
}

impl ServiceError {
    /// HTTP status code implied by the error kind.
    pub fn status_code(&self) -> u16 {
        match self {
            ServiceError::BadRequest(_) => 400,
            ServiceError::NotFound(_) => 404,
            ServiceError::Unauthorized(_) => 401,
            ServiceError::InternalServer(_) => 500,
        }
    }

    /// Stable machine-readable name of the kind.
    pub fn kind(&self) -> &'static str {
        match self {
            ServiceError::BadRequest(_) => "bad_request",
            ServiceError::NotFound(_) => "not_found",
            ServiceError::Unauthorized(_) => "unauthorized",
            ServiceError::InternalServer(_) => "internal_server",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ServiceError::BadRequest(msg)
            | ServiceError::NotFound(msg)
            | ServiceError::Unauthorized(msg)
            | ServiceError::InternalServer(msg) => msg,
        }
    }
}
