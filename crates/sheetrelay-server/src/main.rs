use sheetrelay_server::config::Config;
use sheetrelay_server::run_server;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sheetrelay_server=debug,tower_http=debug".into()),
        )
        .init();

    let config = Config::from_env()?;
    run_server(config).await
}
