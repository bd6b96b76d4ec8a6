use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

use emotion_service::config::Config;
use emotion_service::content::{MemoryHistory, MemoryStore, SupabaseClient};
use emotion_service::server::{self, AppState};

/// HTTP service that detects the emotion of typed or transcribed text
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the config file (defaults to ~/.emotion-service/config.json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Address to bind, overrides config and environment
    #[arg(short, long)]
    bind: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    let config_path = match &args.config {
        Some(path) => path.clone(),
        None => Config::default_config_path()?,
    };
    let mut config = Config::load(&config_path)?;
    config.apply_env()?;
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }

    info!("Emotion service starting...");
    info!("Config: {:?}", config_path);

    let state = match config.supabase() {
        Some(supabase) => {
            info!("Content store: Supabase at {}", supabase.url);
            let client = Arc::new(
                SupabaseClient::new(&supabase).context("Failed to create Supabase client")?,
            );
            AppState::new(client.clone(), client)
        }
        None => {
            warn!("Supabase not configured, suggestions and history are kept in memory only");
            AppState::new(Arc::new(MemoryStore::new()), Arc::new(MemoryHistory::new()))
        }
    };

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;

    server::serve(listener, state, shutdown_signal())
        .await
        .context("Server error")?;

    info!("Emotion service stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            warn!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
