use clap::Parser;
use jadlog_tracking::admin::{NONCE_ACTION, SESSION_HEADER};
use jadlog_tracking::config::{AppConfig, DEFAULT_NONCE_SECRET};
use jadlog_tracking::email::LogMailer;
use jadlog_tracking::hooks::Hooks;
use jadlog_tracking::lifecycle::{setup_tracing, TrackingSystem};
use jadlog_tracking::model::OrderCreate;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info, warn, Instrument};

/// Jadlog tracking codes for store orders.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// TOML configuration file. Defaults apply when omitted.
    #[arg(short, long, env = "JADLOG_CONFIG")]
    config: Option<PathBuf>,

    /// Address to listen on, overriding `server.bind`.
    #[arg(short, long)]
    bind: Option<String>,

    /// Place a sample order and log a nonce for it.
    #[arg(long)]
    demo: bool,
}

#[tokio::main]
async fn main() -> Result<(), String> {
    let cli = Cli::parse();
    setup_tracing();

    let mut config = match &cli.config {
        Some(path) => AppConfig::from_file(path).map_err(|e| e.to_string())?,
        None => AppConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.server.bind = bind;
    }
    if config.security.nonce_secret == DEFAULT_NONCE_SECRET {
        warn!("Using the built-in nonce secret; set security.nonce_secret");
    }

    let system = TrackingSystem::new(&config, Arc::new(LogMailer), Hooks::new())
        .map_err(|e| e.to_string())?;

    if cli.demo {
        let span = tracing::info_span!("demo");
        async {
            let order_id = system
                .order_client
                .place_order(OrderCreate {
                    number: None,
                    billing_email: Some("customer@example.com".to_string()),
                })
                .await
                .map_err(|e| e.to_string())?;
            let session = "demo";
            let nonce = system.nonces.create(NONCE_ACTION, session);
            info!(
                %order_id,
                header = %format!("{SESSION_HEADER}: {session}"),
                %nonce,
                "Demo order placed"
            );
            Ok::<_, String>(())
        }
        .instrument(span)
        .await?;
    }

    let listener = tokio::net::TcpListener::bind(&config.server.bind)
        .await
        .map_err(|e| format!("Failed to bind {}: {e}", config.server.bind))?;
    info!(bind = %config.server.bind, "Listening");

    axum::serve(listener, system.router())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| e.to_string())?;

    system.shutdown().await.map_err(|e| e.to_string())?;

    info!("Application completed successfully");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
