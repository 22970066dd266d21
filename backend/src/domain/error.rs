//! Domain-level error types.
//!
//! These errors are transport agnostic. The HTTP adapter maps them to status
//! codes and the `{url, status, message}` payload in
//! [`crate::inbound::http::error`]; the `Display` text of each variant is the
//! client-facing message.

use serde::Serialize;

use super::{NameValidationError, PersonId};

/// Stable machine-readable category of a domain failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The request is malformed or fails validation.
    InvalidRequest,
    /// The requested resource does not exist.
    NotFound,
    /// An unexpected error occurred inside the domain or its adapters.
    InternalError,
}

/// Terminal failure of a single request.
///
/// # Examples
/// ```
/// use person_registry::domain::{Error, ErrorCode, PersonId};
///
/// let err = Error::PersonNotFound(PersonId::new(10));
/// assert_eq!(err.code(), ErrorCode::NotFound);
/// assert_eq!(err.to_string(), "Person 10 not found.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// No person is stored under the identifier.
    #[error("Person {0} not found.")]
    PersonNotFound(PersonId),
    /// The supplied name failed the naming grammar.
    #[error(transparent)]
    InvalidName(#[from] NameValidationError),
    /// A required request parameter was absent.
    #[error("Required String parameter '{0}' is not present")]
    MissingParameter(String),
    /// A request parameter was present but could not be interpreted.
    #[error("{message}")]
    InvalidParameter { name: String, message: String },
    /// No route matches the request method and path.
    #[error("No handler found for {method} {path}")]
    NoHandler { method: String, path: String },
    /// Any other failure, typically raised by a storage adapter.
    #[error("{0}")]
    Unexpected(String),
}

impl Error {
    /// Convenience constructor for [`Error::MissingParameter`].
    pub fn missing_parameter(name: impl Into<String>) -> Self {
        Self::MissingParameter(name.into())
    }

    /// Convenience constructor for [`Error::InvalidParameter`].
    pub fn invalid_parameter(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Convenience constructor for [`Error::NoHandler`].
    pub fn no_handler(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self::NoHandler {
            method: method.into(),
            path: path.into(),
        }
    }

    /// Convenience constructor for [`Error::Unexpected`].
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected(message.into())
    }

    /// Stable machine-readable error category.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidName(_) | Self::MissingParameter(_) | Self::InvalidParameter { .. } => {
                ErrorCode::InvalidRequest
            }
            Self::PersonNotFound(_) | Self::NoHandler { .. } => ErrorCode::NotFound,
            Self::Unexpected(_) => ErrorCode::InternalError,
        }
    }
}

#[cfg(test)]
mod tests;
