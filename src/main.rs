use axum::{Server, middleware::from_fn};
use diesel::{
    PgConnection,
    r2d2::{self, ConnectionManager as DbConnectionManager},
};
use issuedive::{AppState, config::Config, db::DbPool};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

#[tokio::main]
async fn main() {
    let config = Config::from_env().expect("Failed to load configuration");
    issuedive::init_tracing(&config);

    // Initialize database
    let manager = DbConnectionManager::<PgConnection>::new(&config.database_url);
    let db: DbPool = r2d2::Pool::builder()
        .max_size(config.database_max_connections)
        .build(manager)
        .expect("Failed to create database connection pool");

    let addr = config
        .server_address()
        .parse()
        .expect("Invalid server address");

    // Application state
    let state = Arc::new(AppState::new(db, config));

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = issuedive::routes::create_router(state)
        .layer(cors)
        .layer(from_fn(issuedive::middleware::logger::logger));

    tracing::info!("Server running at http://{}", addr);
    Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .expect("Server failed");
}
