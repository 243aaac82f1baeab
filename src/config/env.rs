/// Get an environment variable with a default value
///
/// # Example
/// ```
/// use todos_api::config::env;
///
/// let port: u16 = env("SERVER_PORT", 8000);
/// let host = env("SERVER_HOST", "127.0.0.1".to_string());
/// ```
pub fn env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
