/**
 * Application State Management
 *
 * `AppState` is cloned into every handler. It holds the store handle, the
 * token service and the immutable configuration; none of it is mutated
 * while serving requests.
 *
 * The `FromRef` implementations let extractors such as `AuthUser` pull out
 * just the part they need.
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::auth::sessions::TokenService;
use crate::backend::server::config::ServerConfig;
use crate::backend::store::{BlogStore, DynStore};

/// Shared state for all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: DynStore,
    pub tokens: TokenService,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Build state around a store; the token service takes the configured secret
    pub fn new(store: impl BlogStore + 'static, config: ServerConfig) -> Self {
        Self {
            store: Arc::new(store),
            tokens: TokenService::new(config.jwt_secret.as_deref()),
            config: Arc::new(config),
        }
    }
}

impl FromRef<AppState> for DynStore {
    fn from_ref(state: &AppState) -> Self {
        state.store.clone()
    }
}

impl FromRef<AppState> for TokenService {
    fn from_ref(state: &AppState) -> Self {
        state.tokens.clone()
    }
}

impl FromRef<AppState> for Arc<ServerConfig> {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}
