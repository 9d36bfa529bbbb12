//! Command-line arguments and process bootstrap shared by the binaries

use bandroll_common::config::{Overrides, ServiceConfig};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Command-line arguments for bandroll-api and bandroll-seed
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "bandroll")]
#[command(about = "Musician roster service")]
#[command(version)]
pub struct Args {
    /// Address to bind the HTTP listener to
    #[arg(long, env = "BANDROLL_HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "BANDROLL_PORT")]
    pub port: Option<u16>,

    /// Path to the SQLite database file
    #[arg(short, long, env = "BANDROLL_DATABASE")]
    pub database: Option<PathBuf>,

    /// Path to the TOML bootstrap file
    #[arg(short, long, env = "BANDROLL_CONFIG")]
    pub config: Option<PathBuf>,
}

impl Args {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            host: self.host.clone(),
            port: self.port,
            database_path: self.database.clone(),
            config_path: self.config.clone(),
        }
    }

    /// Resolve against the TOML file and compiled defaults
    pub fn resolve(&self) -> bandroll_common::Result<ServiceConfig> {
        ServiceConfig::resolve(self.overrides())
    }
}

/// Initialize the tracing subscriber
///
/// `RUST_LOG` wins when set; otherwise the configured level applies to the
/// bandroll crates and tower_http request spans.
pub fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "bandroll_api={level},bandroll_common={level},tower_http={level}",
            level = log_level
        ))
    });

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// One-line build identification for startup logs
pub fn build_info() -> String {
    let profile = match env!("BANDROLL_PROFILE") {
        "" => "unknown profile",
        other => other,
    };
    format!(
        "v{} ({}, {}, {})",
        env!("CARGO_PKG_VERSION"),
        env!("BANDROLL_REVISION"),
        profile,
        env!("BANDROLL_BUILT_AT")
    )
}

/// Resolves on Ctrl+C, or SIGTERM on unix
///
/// A signal source that cannot be registered is logged and never fires, so
/// the server keeps running on the other one.
pub async fn shutdown_signal() {
    let interrupt = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => "interrupt",
            Err(e) => {
                warn!("Ctrl+C handler unavailable: {}", e);
                std::future::pending().await
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
                "terminate"
            }
            Err(e) => {
                warn!("SIGTERM handler unavailable: {}", e);
                std::future::pending().await
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<&str>();

    let received = tokio::select! {
        name = interrupt => name,
        name = terminate => name,
    };
    info!("Received {} signal, draining connections", received);
}
