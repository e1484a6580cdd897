//! StudyMetrics API Server
//!
//! Predicts exam scores from study habits and suggests improvements.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    STUDYMETRICS API                         │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ┌───────────┐  ┌────────────────────────────────────────┐  │
//! │  │  Router   │  │  Pipeline (trained once at startup)    │  │
//! │  │  (Axum)   │─►│  StandardScaler ─► LinearRegression    │  │
//! │  └───────────┘  │  + suggestion rules                    │  │
//! │                 └───────────────────┬────────────────────┘  │
//! │                                     ▼                       │
//! │                       data/student_exam_scores.csv          │
//! └─────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod error;
mod handlers;
mod models;
mod pipeline;

use std::sync::Arc;

use anyhow::Context;
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{CorsLayer, Any},
    trace::TraceLayer,
    compression::CompressionLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub use error::{AppError, AppResult};
use pipeline::Pipeline;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    // Initialize logging
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "studymetrics=debug,tower_http=debug".into());
    if config.is_production() {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    tracing::info!("StudyMetrics API starting...");

    // Train once; the pipeline is immutable afterwards
    let pipeline = Pipeline::train(&config.data_path, config.stress_seed);

    let state = AppState {
        pipeline: Arc::new(pipeline),
    };

    log_banner(&config, &state);

    let app = create_router(state);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, app)
        .await
        .context("server error")?;

    Ok(())
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<Pipeline>,
}

/// Create the main router with all routes
fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        // Historical data
        .route("/api/v1/historical", get(handlers::historical::list))
        .route("/api/v1/historical/:student_id", get(handlers::historical::get))

        // Predictive analysis
        .route("/api/v1/analysis", post(handlers::analysis::analyze))
        .route("/api/v1/model", get(handlers::model::summary));

    Router::new()
        .route("/", get(handlers::home::index))
        .route("/health", get(handlers::health::check))
        .merge(api_routes)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        )
        .with_state(state)
}

fn log_banner(config: &config::Config, state: &AppState) {
    let status = if state.pipeline.is_ready() { "ONLINE" } else { "OFFLINE" };

    tracing::info!("--- STUDYMETRICS API ---");
    tracing::info!("Purpose: predictive analysis of exam scores and study habits");
    tracing::info!("ML status: {}", status);
    if let Some(reason) = state.pipeline.offline_reason() {
        tracing::warn!("Model offline: {}", reason);
    }
    tracing::info!("Training records: {}", state.pipeline.list_historical().len());
    tracing::info!("🚀 Server listening on http://{}", config.bind_address());
    tracing::info!("Main route: POST http://{}/api/v1/analysis", config.bind_address());
}
