#![recursion_limit = "256"]

mod config;
mod routes;

#[tokio::main]
async fn main() {
    // A missing .env file is normal outside local development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::HostConfig::from_env().expect("invalid host configuration");
    tracing::info!(port = config.port, api_base_url = config.api.base_url(), "configuration loaded");

    let app = routes::app(&config).expect("failed to build router");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "arena-console listening");
    axum::serve(listener, app).await.expect("server failed");
}
