//! HTTP server command
//!
//! Usage: netinv serve [--bind ADDR] [--db PATH] [--config FILE]

use anyhow::Context;
use clap::Args;
use netinv_server::AppState;
use tokio::net::TcpListener;

use super::{open_database, StoreArgs};

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Listen address (overrides `server.bind`)
    #[arg(long)]
    pub bind: Option<String>,

    #[command(flatten)]
    pub store: StoreArgs,
}

pub async fn execute(args: ServeArgs) -> anyhow::Result<()> {
    let mut config = args.store.load_config()?;
    if let Some(bind) = args.bind {
        config.server.bind = bind;
    }

    let db = open_database(&config)?;
    tracing::info!(db = %db.path().display(), "database ready");
    let listener = TcpListener::bind(&config.server.bind)
        .await
        .with_context(|| format!("binding {}", config.server.bind))?;

    netinv_server::serve(listener, AppState::new(db), shutdown_signal()).await?;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}
