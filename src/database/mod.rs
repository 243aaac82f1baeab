//! Database access
//!
//! The connection is established once at startup and passed explicitly to
//! every handler and store operation. There is no process-global handle, so
//! tests can run against isolated in-memory stores.

mod connection;

pub use connection::DbConnection;
