mod calendar;
mod config;
mod neis;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use neis::NeisClient;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = config::AppConfig::from_env().expect("invalid configuration");
    let port = config.port;
    tracing::debug!(neis = ?config.neis, "neis client config");

    let client = NeisClient::new(config.neis).expect("failed to build NEIS http client");
    let state = state::AppState::new(Arc::new(client), &config.default_office);

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, default_office = %config.default_office, "mealboard listening");
    axum::serve(listener, app).await.expect("server failed");
}
