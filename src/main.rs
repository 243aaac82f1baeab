use todos_api::config::{self, DatabaseConfig, ServerConfig};
use todos_api::database::DbConnection;
use todos_api::routes;
use todos_api::server::Server;

#[tokio::main]
async fn main() {
    config::load_env();

    let db_config = DatabaseConfig::from_env();
    let db = DbConnection::connect(&db_config)
        .await
        .expect("Failed to connect to database");

    let server_config = ServerConfig::from_env();
    let router = routes::router(&db);

    Server::new(router)
        .host(&server_config.host)
        .port(server_config.port)
        .run()
        .await
        .expect("Failed to start server");
}
