use accountstore::error::InfraResult;
use accountstore::{Registry, config::Config, net::http};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Parser)]
#[command(name = "accountstore", about = "In-memory account store served over HTTP")]
struct Cli {
    /// TOML config file; the environment (and .env) is used when omitted
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Listen address, overrides the configured one
    #[arg(long)]
    addr: Option<String>,
}

impl Cli {
    /// Picks the config file, or `from_env` when none was given, then applies
    /// the command line overrides.
    fn resolve_config(self, from_env: impl FnOnce() -> InfraResult<Config>) -> InfraResult<Config> {
        let mut cfg = match &self.config {
            Some(path) => Config::load(path)?,
            None => from_env()?,
        };
        if let Some(addr) = self.addr {
            cfg.http_addr = addr;
        }
        Ok(cfg)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg = Cli::parse().resolve_config(Config::from_env)?;

    init_tracing(&cfg.log_filter)?;

    let addr = cfg.socket_addr()?;
    let registry = Arc::new(Registry::new(Arc::new(cfg)));

    tracing::info!(%addr, first_id = registry.config.account_id_start, "starting accountstore");
    if let Err(e) = http::serve(addr, registry).await {
        tracing::error!(error = %e, "http server failed");
        return Err(e.into());
    }

    Ok(())
}

fn init_tracing(default_filter: &str) -> anyhow::Result<()> {
    use tracing_subscriber::{EnvFilter, prelude::*};

    color_eyre::install().map_err(|e| anyhow::anyhow!("cannot install error reporter: {e}"))?;

    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_filter))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_timer(tracing_subscriber::fmt::time::uptime()),
        )
        .with(tracing_error::ErrorLayer::default())
        .try_init()?;

    Ok(())
}
