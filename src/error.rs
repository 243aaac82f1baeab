//! Application-wide error types
//!
//! Provides a single error enum that classifies every failure the API can
//! surface and converts to the appropriate HTTP response.

use thiserror::Error;

/// Application error type
///
/// Store operations return this so handlers can propagate failures with the
/// `?` operator; the conversion to an HTTP response lives in
/// `http::response`.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Missing or invalid required field (400 Bad Request)
    #[error("{message}")]
    Validation {
        /// Human-readable description of the failed constraint
        message: String,
    },

    /// Reference to a nonexistent record (404 Not Found)
    #[error("{resource} not found")]
    NotFound {
        /// The kind of record that was looked up
        resource: &'static str,
    },

    /// Malformed request input outside field validation, such as an
    /// unparseable body or route parameter (400 Bad Request)
    #[error("{message}")]
    BadRequest {
        /// The error message
        message: String,
    },

    /// Persistence-layer failure, propagated unclassified (500)
    #[error("Database error: {0}")]
    Database(String),
}

impl ApiError {
    /// Create a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a NotFound error for a record kind
    pub fn not_found(resource: &'static str) -> Self {
        Self::NotFound { resource }
    }

    /// Create a BadRequest error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Validation { .. } => 400,
            Self::NotFound { .. } => 404,
            Self::BadRequest { .. } => 400,
            Self::Database(_) => 500,
        }
    }

    /// Collapse `validator` crate errors into a single Validation error,
    /// carrying the first declared message.
    pub fn from_validator(errors: validator::ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .into_iter()
            .flat_map(|(_, field_errors)| field_errors.iter())
            .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .next()
            .unwrap_or_else(|| "Validation failed".to_string());
        Self::Validation { message }
    }
}

// Implement From<DbErr> for automatic error conversion with ?
impl From<sea_orm::DbErr> for ApiError {
    fn from(e: sea_orm::DbErr) -> Self {
        Self::Database(e.to_string())
    }
}

// Unwrap transaction errors back into the application error: a failure of
// the closure keeps its classification, a connection failure is a database
// fault.
impl From<sea_orm::TransactionError<ApiError>> for ApiError {
    fn from(e: sea_orm::TransactionError<ApiError>) -> Self {
        match e {
            sea_orm::TransactionError::Connection(db) => db.into(),
            sea_orm::TransactionError::Transaction(api) => api,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn status_codes_match_error_kinds() {
        assert_eq!(ApiError::validation("Title is required").status_code(), 400);
        assert_eq!(ApiError::not_found("Todo").status_code(), 404);
        assert_eq!(ApiError::bad_request("bad id").status_code(), 400);
        assert_eq!(ApiError::Database("boom".to_string()).status_code(), 500);
    }

    #[test]
    fn not_found_formats_the_resource_name() {
        assert_eq!(ApiError::not_found("Todo").to_string(), "Todo not found");
    }
}
