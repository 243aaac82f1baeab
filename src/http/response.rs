use crate::error::ApiError;
use bytes::Bytes;
use http_body_util::Full;

/// HTTP response builder
pub struct HttpResponse {
    status: u16,
    body: String,
    headers: Vec<(String, String)>,
}

/// Response type alias - allows using `?` operator for early returns
pub type Response = Result<HttpResponse, HttpResponse>;

impl HttpResponse {
    pub fn new() -> Self {
        Self {
            status: 200,
            body: String::new(),
            headers: Vec::new(),
        }
    }

    /// Create a JSON response from a serde_json::Value
    pub fn json(body: serde_json::Value) -> Self {
        Self {
            status: 200,
            body: body.to_string(),
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
        }
    }

    /// Set the HTTP status code
    pub fn status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    /// Get the HTTP status code
    pub fn status_code(&self) -> u16 {
        self.status
    }

    /// Convert to hyper response
    pub fn into_hyper(self) -> hyper::Response<Full<Bytes>> {
        let mut builder = hyper::Response::builder().status(self.status);

        for (name, value) in self.headers {
            builder = builder.header(name, value);
        }

        builder.body(Full::new(Bytes::from(self.body))).unwrap()
    }
}

impl Default for HttpResponse {
    fn default() -> Self {
        Self::new()
    }
}

/// Auto-convert ApiError to HttpResponse
///
/// This enables using the `?` operator in handlers to propagate application
/// errors as client-facing responses with the right status code.
impl From<ApiError> for HttpResponse {
    fn from(err: ApiError) -> HttpResponse {
        let body = serde_json::json!({ "error": err.to_string() });
        HttpResponse::json(body).status(err.status_code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn api_errors_become_json_client_errors() {
        let response = HttpResponse::from(ApiError::validation("Title is required"));
        assert_eq!(response.status_code(), 400);
        assert_eq!(response.body, r#"{"error":"Title is required"}"#);

        let response = HttpResponse::from(ApiError::not_found("Todo"));
        assert_eq!(response.status_code(), 404);
        assert_eq!(response.body, r#"{"error":"Todo not found"}"#);
    }
}
