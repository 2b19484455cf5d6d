use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use garage_api::config::ServerConfig;
use garage_api::graphql::enrich::JokeEnricher;
use garage_api::graphql::{build_schema, GarageSchema};
use garage_api::router::build_app_router;
use garage_api::routes::graphql::GRAPHQL_PATH;
use garage_api::state::AppState;
use garage_db::DataContext;
use garage_jokes::JokeApi;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    init_tracing();

    // --- Configuration ---
    let config = ServerConfig::from_env().context("Invalid configuration")?;
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Database ---
    let db = garage_db::connect(&config.mongo_url, &config.mongo_db)
        .await
        .context("Failed to create MongoDB client")?;
    garage_db::health_check(&db)
        .await
        .context("MongoDB health check failed")?;
    tracing::info!(database = %config.mongo_db, "Connected to MongoDB");

    let data = DataContext::from_database(&db);

    // --- Jokes ---
    let jokes = JokeEnricher::new(
        Arc::new(JokeApi::new(config.jokes.url.clone())),
        &config.jokes,
    );
    tracing::info!(
        url = %config.jokes.url,
        timeout_ms = config.jokes.timeout.as_millis() as u64,
        concurrency = config.jokes.concurrency,
        strict = config.jokes.strict,
        "Joke enrichment configured"
    );

    // --- App state ---
    let schema: GarageSchema = build_schema(data.clone(), jokes);
    let state = AppState {
        schema,
        data,
        config: Arc::new(config.clone()),
    };

    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(config.host, config.port);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;
    let local_addr = listener.local_addr()?;
    tracing::info!("Server ready at http://{local_addr}{GRAPHQL_PATH}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Graceful shutdown complete");
    Ok(())
}

/// Install the global subscriber. `LOG_FORMAT=json` switches to JSON lines.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        "garage_api=debug,garage_db=debug,garage_jokes=debug,tower_http=debug".into()
    });

    let registry = tracing_subscriber::registry().with(filter);
    if std::env::var("LOG_FORMAT").is_ok_and(|format| format == "json") {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the server
/// shuts down cleanly whether stopped interactively or by a process
/// manager.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
