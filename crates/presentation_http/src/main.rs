//! Plancast HTTP Server
//!
//! Main entry point for the calendar feed server.

use std::{path::Path, sync::Arc, time::Duration};

use application::{CalendarFeedService, FeedSettings, ports::CredentialUnsealer};
use infrastructure::{AppConfig, RsaCredentialUnsealer};
use integration_portal::HttpPortalClient;
use presentation_http::{routes, state::AppState};
use tokio::{net::TcpListener, signal};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "plancast_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("📅 Plancast v{} starting...", env!("CARGO_PKG_VERSION"));

    // Load configuration. A malformed config, a typoed timezone included,
    // must not silently serve defaults; like key loading, failure is fatal.
    let config =
        AppConfig::load().map_err(|e| anyhow::anyhow!("Failed to load configuration: {e}"))?;

    info!(
        host = %config.server.host,
        port = %config.server.port,
        timezone = %config.feed.timezone,
        "Configuration loaded"
    );

    // Load the private key. Without it no credential can ever be unsealed,
    // so any failure here is fatal; there is no degraded mode.
    let unsealer = RsaCredentialUnsealer::from_pem_file(
        Path::new(&config.feed.private_key_path),
        config.feed.separator.clone(),
    )
    .map_err(|e| anyhow::anyhow!("Failed to load private key: {e}"))?;
    let unsealer: Arc<dyn CredentialUnsealer> = Arc::new(unsealer);

    info!(path = %config.feed.private_key_path, "Private key loaded");

    // Initialize the portal client
    let portal = HttpPortalClient::new(config.portal.clone())
        .map_err(|e| anyhow::anyhow!("Failed to initialize portal client: {e}"))?;

    // Initialize the feed pipeline
    let feed_service = CalendarFeedService::new(
        unsealer,
        Arc::new(portal),
        FeedSettings {
            calendar_name: config.feed.calendar_name.clone(),
            timezone: config.feed.timezone,
            window_start_ms: config.feed.start_timestamp.clone(),
            window_end_ms: config.feed.end_timestamp.clone(),
        },
    );

    let state = AppState::new(Arc::new(feed_service), &config.feed.filename);

    // Build router
    let app = routes::create_router(state);

    // Configure CORS layer
    let cors_layer = if config.server.allowed_origins.is_empty() {
        // Development mode: allow all origins
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        // Production mode: restrict to configured origins
        use axum::http::{HeaderValue, Method};
        let origins: Vec<HeaderValue> = config
            .server
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET])
            .allow_headers(Any)
    };

    // Add middleware (order matters: first added = outermost)
    let app = app.layer(TraceLayer::new_for_http()).layer(cors_layer);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;

    info!("🚀 Server listening on http://{}", addr);

    // Graceful shutdown configuration
    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs.unwrap_or(30));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown_timeout))
        .await?;

    info!("👋 Server shutdown complete");

    Ok(())
}

/// Wait for shutdown signals (SIGINT, SIGTERM) and handle graceful shutdown
async fn shutdown_signal(timeout: Duration) {
    let ctrl_c = async {
        // Log error but continue waiting - this is a best-effort signal handler
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("📥 Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("📥 Received SIGTERM, initiating graceful shutdown...");
        }
    }

    info!("⏳ Waiting up to {:?} for connections to close...", timeout);
    // The actual connection draining is handled by axum's graceful_shutdown
}
