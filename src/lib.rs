pub mod actions;
pub mod config;
pub mod controllers;
pub mod database;
pub mod error;
pub mod http;
pub mod migrations;
pub mod models;
pub mod requests;
pub mod resources;
pub mod routes;
pub mod routing;
pub mod server;

pub use database::DbConnection;
pub use error::ApiError;
pub use http::{HttpResponse, Request, Response};
pub use routing::Router;
pub use server::Server;
