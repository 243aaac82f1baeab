//! HTTP handlers
//!
//! Each handler deserializes the request, invokes one store operation with
//! the injected connection, and serializes the result.

pub mod comment;
pub mod todo;

use crate::error::ApiError;

/// Parse a numeric id route parameter
pub(crate) fn parse_id(raw: &str) -> Result<i32, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::bad_request(format!("Invalid id parameter: {}", raw)))
}
