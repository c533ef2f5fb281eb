// src/main.rs
use axum::{extract::Extension, middleware, Router};
use dotenv::dotenv;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::path::PathBuf;
use std::{net::SocketAddr, str::FromStr, sync::Arc};
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

// ============================================================================
// MODULE IMPORTS
// ============================================================================

mod admin;
mod auth;
mod common;
mod cooking;
mod i18n;
mod kitchen;
mod logging_middleware;
mod recipes;
mod services;
mod store;
mod subscriptions;

// ============================================================================
// COMMON IMPORTS
// ============================================================================

use common::{AppConfig, AppState};
use services::{AiGateway, GeminiService, LocalStorage, MockBackend};
use store::SessionRegistry;

// ============================================================================
// MAIN APPLICATION ENTRY POINT
// ============================================================================

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    // ========================================================================
    // ENVIRONMENT CONFIGURATION
    // ========================================================================

    let config = AppConfig::from_env();
    info!(
        seed_admins = config.seed_admins.len(),
        seed_payment_methods = config.seed_payment_methods.len(),
        backend_latency_ms = config.backend_latency.as_millis() as u64,
        "Configuration loaded"
    );

    // ========================================================================
    // DATABASE SETUP
    // ========================================================================

    if let Some(path_part) = config.database_url.strip_prefix("sqlite://") {
        let path_without_params = path_part.split('?').next().unwrap_or("");
        if !path_without_params.is_empty() && !path_without_params.starts_with(':') {
            let db_path = PathBuf::from(path_without_params);
            if let Some(parent) = db_path.parent() {
                if !parent.as_os_str().is_empty() {
                    tokio::fs::create_dir_all(parent).await?;
                }
            }
        }
    }

    let connect_options =
        SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .connect_with(connect_options)
        .await?;

    // Run database migrations
    common::migrations::run_migrations(&pool).await?;

    // ========================================================================
    // SERVICE INITIALIZATION
    // ========================================================================

    let local_storage = LocalStorage::new(pool.clone());

    let backend = Arc::new(MockBackend::new(
        local_storage.clone(),
        config.backend_latency,
    ));
    backend
        .seed(&config.seed_admins, &config.seed_payment_methods)
        .await?;
    info!("MockBackend initialized");

    let gemini = GeminiService::new(config.gemini.clone());
    let ai_gateway = Arc::new(AiGateway::new(Arc::new(gemini)));
    if ai_gateway.is_configured() {
        info!("AiGateway initialized");
    } else {
        warn!("GEMINI_API_KEY not set, AI features will answer with a notice");
    }

    // ========================================================================
    // APPLICATION STATE
    // ========================================================================

    let sessions = SessionRegistry::new(config.session_ttl());
    SessionRegistry::start_cleanup_task(sessions.clone(), store::registry::CLEANUP_INTERVAL);
    info!("Session cleanup task started");

    let app_state = AppState {
        db: pool,
        config: Arc::new(config.clone()),
        local_storage,
        backend,
        ai_gateway,
        sessions,
    };

    let shared = Arc::new(RwLock::new(app_state));

    // ========================================================================
    // ROUTER COMPOSITION
    // ========================================================================

    let app = Router::new()
        // ====================================================================
        // SESSION AND AUTHENTICATION ROUTES
        // ====================================================================
        .merge(auth::auth_routes())
        // ====================================================================
        // PANTRY, SHOPPING LIST AND HISTORY
        // ====================================================================
        .merge(kitchen::kitchen_routes())
        // ====================================================================
        // RECIPES, PLANNER AND STORE ASSISTANT
        // ====================================================================
        .merge(recipes::recipes_routes())
        // ====================================================================
        // COOKING TIMER
        // ====================================================================
        .merge(cooking::cooking_routes())
        // ====================================================================
        // PREMIUM SUBSCRIPTIONS
        // ====================================================================
        .merge(subscriptions::subscriptions_routes())
        // ====================================================================
        // ADMIN ROUTES (Payments, Users, Payment methods)
        // ====================================================================
        .merge(admin::admin_routes())
        // ====================================================================
        // TRANSLATIONS
        // ====================================================================
        .merge(i18n::i18n_routes())
        // ====================================================================
        // MIDDLEWARE AND LAYERS
        // ====================================================================
        // Add request/response body logging in debug mode
        .layer(middleware::from_fn(logging_middleware::log_request_response))
        .layer(Extension(shared.clone()))
        .layer({
            let origins: Vec<axum::http::HeaderValue> = config
                .cors_origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::PUT,
                    axum::http::Method::DELETE,
                    axum::http::Method::PATCH,
                    axum::http::Method::OPTIONS,
                ])
                .allow_headers([
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::AUTHORIZATION,
                ])
                .allow_credentials(true)
        })
        .layer(TraceLayer::new_for_http());

    // ========================================================================
    // SERVER STARTUP
    // ========================================================================

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Persist writes still queued by live sessions
    let state = shared.read().await.clone();
    state.sessions.flush_all().await;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to install CTRL+C handler");
        std::future::pending::<()>().await;
    }
    info!("Received ctrl+C signal, shutting down");
}
