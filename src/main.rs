//! Banking back-office service - main application entry point.
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Create database connection pool
//! 3. Run database migrations
//! 4. Build HTTP router with routes and middleware
//! 5. Start server on configured port

use banking_backoffice::{config, db, handlers, middleware};

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Reads RUST_LOG environment variable (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = config::Config::from_env()?;
    tracing::info!("Configuration loaded");

    let pool = db::create_pool(&config.database_url).await?;
    tracing::info!("Database pool created");

    db::run_migrations(&pool).await?;
    tracing::info!("Database migrations complete");

    // Routes behind bearer-token authentication
    let authenticated_routes = Router::new()
        .route("/api/v1/auth/logout", post(handlers::auth::logout))
        // Accounts
        .route("/api/v1/accounts", post(handlers::accounts::create_account))
        .route(
            "/api/v1/accounts/{id}",
            get(handlers::accounts::get_account),
        )
        // Customers and agencies
        .route(
            "/api/v1/customers",
            post(handlers::customers::create_customer),
        )
        .route(
            "/api/v1/customers/{id}",
            get(handlers::customers::get_customer),
        )
        .route("/api/v1/agencies", post(handlers::agencies::create_agency))
        .route(
            "/api/v1/agencies/{id}",
            get(handlers::agencies::get_agency),
        )
        // Ledger entries and transfers
        .route(
            "/api/v1/transactions",
            post(handlers::transactions::create_transaction),
        )
        .route(
            "/api/v1/transactions/{id}",
            get(handlers::transactions::get_transaction),
        )
        .route(
            "/api/v1/transfers",
            post(handlers::transfers::create_transfer),
        )
        // Loans and repayments
        .route("/api/v1/loans", post(handlers::loans::create_loan))
        .route("/api/v1/loans/{id}", get(handlers::loans::get_loan))
        .route(
            "/api/v1/repayments",
            post(handlers::loans::create_repayment),
        )
        .route(
            "/api/v1/repayments/{id}",
            get(handlers::loans::get_repayment),
        )
        // Cards and credits
        .route("/api/v1/cards", post(handlers::cards::create_card))
        .route("/api/v1/credits", post(handlers::cards::create_credit))
        // Apply authentication middleware to all routes in this group
        .route_layer(axum_middleware::from_fn_with_state(
            pool.clone(),
            middleware::auth::auth_middleware,
        ));

    // Public routes (no authentication required)
    let app = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/api/v1/auth/signup", post(handlers::auth::signup))
        .route("/api/v1/auth/login", post(handlers::auth::login))
        .route(
            "/api/v1/contact",
            post(handlers::contact::create_contact_message),
        )
        .merge(authenticated_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(pool);

    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
