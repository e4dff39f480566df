use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use chirpy::api::{self, ApiConfig};
use chirpy::config::Config;
use chirpy::store::{MemoryStore, PgStore, Store};
use chirpy::Server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = Config::from_env().context("invalid configuration")?;

    let store: Arc<dyn Store> = match &config.database_url {
        Some(url) => Arc::new(
            PgStore::connect(url)
                .await
                .context("failed to connect to database")?,
        ),
        None => {
            tracing::warn!("DATABASE_URL not set; using in-memory store");
            Arc::new(MemoryStore::new())
        }
    };

    tracing::info!(
        platform = ?config.platform,
        root = %config.filepath_root.display(),
        "starting chirpy"
    );

    let cfg = Arc::new(ApiConfig::new(store, config.platform));
    let app = api::router(cfg, config.filepath_root.clone());

    Server::bind(&config.listen_addr())?
        .serve(app)
        .await
        .context("server error")?;
    Ok(())
}

/// `RUST_LOG` filters (default `info`); `LOG_FORMAT=json` switches to JSON lines.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = std::env::var("LOG_FORMAT").is_ok_and(|v| v == "json");

    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(false);
    let _ = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}
