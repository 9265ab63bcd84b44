use cryptoscore::{create_router, utils, Config, ExplorerClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    utils::init_logging();

    let config = Config::from_env()?;
    let client = ExplorerClient::from_config(&config)?;

    tracing::info!(
        "Using explorer {} (timeout {}ms, {} retries, {}ms retry delay)",
        config.explorer_api_url,
        config.explorer_timeout_ms,
        config.explorer_max_retries,
        config.explorer_retry_delay_ms
    );

    let port = config.port;
    let app = create_router(client, &config.allowed_origins);

    let listener = tokio::net::TcpListener::bind(&format!("0.0.0.0:{}", port)).await?;
    tracing::info!("Server running on port {}", port);

    axum::serve(listener, app).await?;

    Ok(())
}
