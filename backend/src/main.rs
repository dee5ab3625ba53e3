use token_icons::{create_router, utils, Config, TokenIconResolver};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    utils::init_logging();

    let config = Config::from_env()?;
    let port = config.port;
    let resolver: TokenIconResolver = TokenIconResolver::default();
    let app = create_router(resolver, config);

    let listener = tokio::net::TcpListener::bind(&format!("0.0.0.0:{}", port)).await?;
    tracing::info!("Server running on port {}", port);

    axum::serve(listener, app).await?;

    Ok(())
}
