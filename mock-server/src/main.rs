use std::time::Duration;

use axum::http::StatusCode;
use mock_server::MockConfig;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    tracing_subscriber::fmt::init();

    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let mut config = MockConfig::default();
    if let Some(ms) = std::env::var("MOCK_DELAY_MS").ok().and_then(|v| v.parse().ok()) {
        config.delay = Duration::from_millis(ms);
    }
    if let Some(status) = std::env::var("MOCK_STATUS")
        .ok()
        .and_then(|v| v.parse::<u16>().ok())
        .and_then(|code| StatusCode::from_u16(code).ok())
    {
        config.status = status;
    }

    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, status = %config.status, delay = ?config.delay, "mock todo server listening");
    mock_server::run_with(listener, config).await
}
