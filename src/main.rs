//! School Payments API - Main Application Entry Point
//!
//! A payment-transaction tracking backend for school payment collection. It
//! records collection requests, answers transaction-status queries, and
//! ingests webhook callbacks from the payment gateway.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Database**: SQLite with sqlx (async queries, bound parameters only)
//! - **Authentication**: JWT bearer tokens verified against a shared secret
//! - **Format**: JSON requests/responses
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Create the database connection pool
//! 3. Run database migrations
//! 4. Build the HTTP router: public routes plus the authenticated group
//! 5. Start the server on the configured port

mod config;
mod db;
mod error;
mod handlers;
mod middleware;
mod models;
mod state;
mod store;

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

use crate::{middleware::auth::AuthConfig, state::AppState, store::TransactionStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logging via tracing; RUST_LOG overrides the "info" default
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = config::Config::from_env()?;
    tracing::info!("Configuration loaded");

    let pool = db::create_pool(&config.database_url).await?;
    tracing::info!("Database pool created");

    db::run_migrations(&pool).await?;
    tracing::info!("Database migrations complete");

    let state = AppState::new(
        TransactionStore::new(pool),
        AuthConfig::new(&config.jwt_secret),
        config.payment_gateway_url,
    );

    // Every route except the gateway webhook and the health probe sits
    // behind the bearer token gate.
    let authenticated_routes = Router::new()
        .route(
            "/api/transactions",
            get(handlers::transactions::list_transactions),
        )
        .route(
            "/api/transactions/school/{school_id}",
            get(handlers::transactions::list_school_transactions),
        )
        .route(
            "/api/transactions/status/{custom_order_id}",
            get(handlers::transactions::check_transaction_status),
        )
        .route(
            "/api/transactions/{collect_id}/status",
            post(handlers::transactions::update_transaction_status),
        )
        .route(
            "/api/create-collect-request",
            post(handlers::transactions::create_collect_request),
        )
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::require_auth,
        ));

    let app = Router::new()
        .route("/health", get(handlers::health::health_check))
        // The gateway callback carries no user token by design
        .route(
            "/api/webhook/transaction-status",
            post(handlers::webhooks::transaction_status),
        )
        .merge(authenticated_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
