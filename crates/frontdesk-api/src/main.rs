//! frontdesk gateway entry point.
//!
//! Binary name: `fdesk`
//!
//! Loads the settings file (fatal on any failure), wires application state,
//! then serves the HTTP gateway until Ctrl+C or SIGTERM.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use frontdesk_api::http::router::build_router;
use frontdesk_api::state::AppState;
use frontdesk_infra::config::load_config;

#[derive(Debug, Parser)]
#[command(name = "fdesk", version, about = "Web chat gateway with conversation logging")]
struct Cli {
    /// Path to the settings file.
    #[arg(long, default_value = "config.json")]
    config: PathBuf,

    /// Override the listen port from the settings file and environment.
    #[arg(long)]
    port: Option<u16>,

    /// Interface to bind.
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Increase log verbosity (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors.
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "info",
        1 => "info,frontdesk=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    // A partially configured gateway is unsafe to serve: bail before the
    // socket opens on any configuration problem.
    let mut config = load_config(&cli.config)
        .await
        .map_err(|err| anyhow::anyhow!("fatal: cannot load configuration: {err}"))?;
    if let Some(port) = cli.port {
        config.listen_port = port;
    }
    let listen_port = config.listen_port;

    let state = AppState::init(config).await?;

    let addr = format!("{}:{}", cli.host, listen_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(
        %addr,
        completion_enabled = state.completion.is_some(),
        company = %state.config.company_name,
        "frontdesk gateway listening"
    );

    let router =
        build_router(state).into_make_service_with_connect_info::<SocketAddr>();

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
