/**
 * Server Initialization
 *
 * Builds the Axum application from a `ServerConfig`:
 *
 * 1. Pick the store: `PgStore` when `DATABASE_URL` is set, otherwise the
 *    in-memory store
 * 2. Build the token service from `JWT_SECRET`
 * 3. Assemble the router
 *
 * A missing secret is not fatal: the server starts and sign-in/protected
 * routes answer 500 until it is configured.
 */

use axum::Router;
use thiserror::Error;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::{connect_database, ServerConfig};
use crate::backend::server::state::AppState;
use crate::backend::store::{MemoryStore, PgStore};

/// Startup failures
#[derive(Debug, Error)]
pub enum InitError {
    #[error("failed to connect to database: {0}")]
    Database(#[from] sqlx::Error),
}

/// Create and configure the Axum application
pub async fn create_app(config: ServerConfig) -> Result<Router<()>, InitError> {
    tracing::info!("Initializing blog API server");

    let state = match config.database_url.clone() {
        Some(url) => {
            let pool = connect_database(&url).await?;
            AppState::new(PgStore::new(pool), config)
        }
        None => {
            tracing::warn!("DATABASE_URL not set. Using the in-memory store; data is lost on restart.");
            AppState::new(MemoryStore::new(), config)
        }
    };

    if !state.tokens.is_configured() {
        tracing::warn!("JWT_SECRET not set. Sign-in and protected routes will fail.");
    }

    let app = create_router(state);
    tracing::info!("Router configured");
    Ok(app)
}
