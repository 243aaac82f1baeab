mod body;
mod request;
mod response;

pub use request::Request;
pub use response::{HttpResponse, Response};

/// Create a JSON response from `serde_json::json!` syntax
///
/// # Example
///
/// ```rust,ignore
/// pub async fn destroy(db: DbConnection, req: Request) -> Response {
///     json_response!({ "message": "Todo deleted successfully" })
/// }
/// ```
#[macro_export]
macro_rules! json_response {
    ($($json:tt)+) => {
        Ok($crate::http::HttpResponse::json(::serde_json::json!($($json)+)))
    };
}
