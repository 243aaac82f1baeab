use super::body::{collect_body, parse_json};
use crate::error::ApiError;
use serde::de::DeserializeOwned;
use std::collections::HashMap;

/// HTTP request wrapper providing typed access to route parameters and the
/// JSON body
pub struct Request {
    inner: hyper::Request<hyper::body::Incoming>,
    params: HashMap<String, String>,
}

impl Request {
    pub fn new(inner: hyper::Request<hyper::body::Incoming>) -> Self {
        Self {
            inner,
            params: HashMap::new(),
        }
    }

    pub fn with_params(mut self, params: HashMap<String, String>) -> Self {
        self.params = params;
        self
    }

    /// Get the request method
    pub fn method(&self) -> &hyper::Method {
        self.inner.method()
    }

    /// Get the request path
    pub fn path(&self) -> &str {
        self.inner.uri().path()
    }

    /// Get a route parameter by name (e.g., /api/todos/{id}/)
    ///
    /// Returns an error if the parameter is missing, enabling use of the
    /// `?` operator in handlers.
    pub fn param(&self, name: &str) -> Result<&str, ApiError> {
        self.params
            .get(name)
            .map(|s| s.as_str())
            .ok_or_else(|| ApiError::bad_request(format!("Missing required parameter: {}", name)))
    }

    /// Parse the request body as JSON
    ///
    /// Consumes the request since the body can only be read once.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// pub async fn store(db: DbConnection, req: Request) -> Response {
    ///     let payload: CreateTodoRequest = req.json().await?;
    ///     // ...
    /// }
    /// ```
    pub async fn json<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        let bytes = collect_body(self.inner.into_body()).await?;
        parse_json(&bytes)
    }
}
