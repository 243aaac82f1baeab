//! Runtime configuration
//!
//! All configuration comes from environment variables, optionally seeded
//! from a `.env` file at process start.

pub mod env;

mod database;
mod server;

pub use database::DatabaseConfig;
pub use env::env;
pub use server::ServerConfig;

/// Load variables from the project `.env` file, if present.
///
/// Existing process environment variables take precedence over file values.
pub fn load_env() {
    dotenvy::dotenv().ok();
}
