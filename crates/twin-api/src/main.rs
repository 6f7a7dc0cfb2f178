//! Entry point for the Digital Twin Engine API server.

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, EnvFilter};

use twin_api::routes::app;
use twin_core::EngineConfig;
use twin_graph::GraphClient;

#[derive(Parser)]
#[command(name = "twin-api")]
#[command(about = "HTTP API server for the Digital Twin Engine")]
struct Cli {
    /// Config file prefix (default: twin).
    #[arg(short, long, default_value = "twin")]
    config: String,

    /// Override the HTTP bind address (e.g., 127.0.0.1:9000).
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).json().init();

    let cli = Cli::parse();

    // Missing Neo4j credentials abort startup before the listener binds.
    let config = EngineConfig::load(&cli.config)?;

    let graph = GraphClient::connect(&config.neo4j).await?;

    let bind = cli.bind.as_deref().unwrap_or(&config.http.bind);
    let listener = TcpListener::bind(bind).await?;
    tracing::info!(%bind, "Digital Twin Engine listening");

    axum::serve(listener, app(graph))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // The graph client is dropped here, releasing the connection pool.
    tracing::info!("Shutdown complete");
    Ok(())
}

/// Resolve on SIGINT or SIGTERM so in-flight requests can finish.
async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
