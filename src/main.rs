use customer_sync::config::Config;
use customer_sync::shell::http::router;
use customer_sync::shell::state::AppState;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::from_env()?;
    let (state, refresher) = AppState::in_memory(&config);
    refresher.spawn();

    let app = router(state);

    tracing::info!(table = %config.table_name, "Change processing endpoint: http://{}/process", config.bind_addr);
    tracing::info!("GraphQL endpoint: http://{}/gql", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
