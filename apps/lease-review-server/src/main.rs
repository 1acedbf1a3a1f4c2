//! Lease Review Server
//!
//! REST API that screens residential rental contracts for clauses that are
//! commonly unenforceable or worth a closer look under BC tenancy law.
//!
//! - Contract analysis from pasted text or an uploaded PDF/TXT document
//! - Clause catalog and category listing for the presentation layer
//!
//! ## Middleware
//!
//! - Rate limiting via tower-governor
//! - Permissive CORS for the browser frontend
//! - Request tracing and a request body limit

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use clap::Parser;
use clause_engine::{Catalog, ClauseEngine};
use document_text::MIN_CONTRACT_TEXT_LEN;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod api;
mod error;

use api::{
    handle_analyze_document, handle_analyze_text, handle_health, handle_list_categories,
    handle_list_clauses,
};

/// Command-line arguments for the lease review server
#[derive(Parser, Debug)]
#[command(name = "lease-review-server")]
#[command(about = "Rental contract clause screening and risk scoring API")]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "3000")]
    port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Rate limit: requests per second per IP
    #[arg(long, default_value = "10")]
    rate_limit: u32,

    /// JSON clause catalog to use instead of the built-in BC catalog
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Minimum contract text length, in characters
    #[arg(long, default_value_t = MIN_CONTRACT_TEXT_LEN)]
    min_text_length: usize,

    /// Maximum request body size in bytes (base64 uploads included)
    #[arg(long, default_value = "16777216")]
    max_body_bytes: usize,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub engine: ClauseEngine,
    /// Contracts shorter than this are rejected before analysis
    pub min_text_length: usize,
}

impl AppState {
    pub fn new(engine: ClauseEngine, min_text_length: usize) -> Self {
        Self {
            engine,
            min_text_length,
        }
    }
}

/// API routes, without transport middleware
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handle_health))
        // Catalog
        .route("/api/clauses", get(handle_list_clauses))
        .route("/api/categories", get(handle_list_categories))
        // Analysis
        .route("/api/analyze", post(handle_analyze_text))
        .route("/api/analyze/document", post(handle_analyze_document))
        .with_state(state)
}

fn load_engine(path: Option<&PathBuf>) -> anyhow::Result<ClauseEngine> {
    match path {
        Some(path) => {
            let catalog = Catalog::from_path(path)
                .with_context(|| format!("Failed to load clause catalog {}", path.display()))?;
            info!(
                "Loaded {} clause patterns from {}",
                catalog.len(),
                path.display()
            );
            Ok(ClauseEngine::with_catalog(catalog))
        }
        None => {
            let engine = ClauseEngine::new();
            info!(
                "Using built-in BC catalog ({} clause patterns)",
                engine.catalog().len()
            );
            Ok(engine)
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting lease review server on {}:{}", args.host, args.port);

    let engine = load_engine(args.catalog.as_ref())?;
    let state = AppState::new(engine, args.min_text_length);

    // Create rate limiter configuration
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(args.rate_limit.into())
            .burst_size(args.rate_limit.saturating_mul(2))
            .finish()
            .ok_or_else(|| anyhow::anyhow!("Invalid rate limit: {}", args.rate_limit))?,
    );

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = build_router(state)
        .layer(DefaultBodyLimit::max(args.max_body_bytes))
        .layer(GovernorLayer {
            config: governor_conf,
        })
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Server listening on http://{}", addr);
    info!("Rate limit: {} requests/second per IP", args.rate_limit);
    info!("Minimum contract length: {} characters", args.min_text_length);

    // The governor keys on peer address, which requires connect info
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
