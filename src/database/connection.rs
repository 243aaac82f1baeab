//! Database connection management

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::sync::Arc;
use std::time::Duration;

use crate::config::DatabaseConfig;
use crate::error::ApiError;

/// Wrapper around SeaORM's DatabaseConnection
///
/// Clonable and thread-safe, so the route table can hand each handler its
/// own handle to the shared pool.
///
/// # Example
///
/// ```rust,ignore
/// let db = DbConnection::connect(&config).await?;
///
/// let todos = todo_item::Entity::find().all(&*db).await?;
/// ```
#[derive(Clone)]
pub struct DbConnection {
    inner: Arc<DatabaseConnection>,
}

impl DbConnection {
    /// Create a new database connection from config
    ///
    /// This establishes a connection pool using the provided configuration.
    /// For SQLite databases, this will automatically create the database
    /// file if it doesn't exist.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, ApiError> {
        // For SQLite, ensure the database file can be created
        let url = if config.url.starts_with("sqlite://") {
            let path = config.url.trim_start_matches("sqlite://");
            let path = path.trim_start_matches("./");

            // Don't apply to in-memory databases
            if path != ":memory:" && !path.starts_with(":memory:") {
                if let Some(parent) = std::path::Path::new(path).parent() {
                    if !parent.as_os_str().is_empty() {
                        std::fs::create_dir_all(parent).ok();
                    }
                }

                if !std::path::Path::new(path).exists() {
                    std::fs::File::create(path).ok();
                }
            }

            // Use the file path format that SQLite prefers with create mode
            format!("sqlite:{}?mode=rwc", path)
        } else {
            config.url.clone()
        };

        let mut opt = ConnectOptions::new(&url);
        opt.max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(Duration::from_secs(config.connect_timeout))
            .sqlx_logging(config.logging);

        let conn = Database::connect(opt)
            .await
            .map_err(|e| ApiError::Database(e.to_string()))?;

        Ok(Self {
            inner: Arc::new(conn),
        })
    }

    /// Get a reference to the underlying SeaORM connection
    pub fn inner(&self) -> &DatabaseConnection {
        &self.inner
    }
}

impl std::ops::Deref for DbConnection {
    type Target = DatabaseConnection;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}
