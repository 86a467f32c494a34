//! Test server construction

use axum_test::TestServer;
use inkpost::backend::routes::create_router;
use inkpost::backend::server::{AppState, ServerConfig};
use inkpost::backend::store::MemoryStore;

pub const TEST_SECRET: &str = "integration-test-secret";

/// Configuration with a signing secret and the cheapest bcrypt cost
pub fn test_config() -> ServerConfig {
    ServerConfig {
        jwt_secret: Some(TEST_SECRET.to_string()),
        bcrypt_cost: 4,
        ..ServerConfig::default()
    }
}

pub fn server_with_config(config: ServerConfig) -> TestServer {
    let state = AppState::new(MemoryStore::new(), config);
    TestServer::new(create_router(state)).expect("Failed to build test server")
}

/// Fresh server with an empty store
pub fn test_server() -> TestServer {
    server_with_config(test_config())
}
