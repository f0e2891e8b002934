use anyhow::Context as _;
use clap::Parser as _;
use hilal::{
    config::Config,
    server::{self, AppState},
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    let filter = EnvFilter::try_from_env("HILAL_LOG")
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .context("invalid log filter")?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::debug!(?config, "Loaded configuration");

    let client = config
        .client()
        .context("failed to configure the OpenAI backend")?;

    server::serve(config.bind, AppState::new(client))
        .await
        .context("server error")
}
