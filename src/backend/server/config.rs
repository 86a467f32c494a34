/**
 * Server Configuration
 *
 * This module loads the server's settings from environment variables once at
 * startup. Nothing else in the crate reads the process environment; the
 * resulting `ServerConfig` is passed to whatever needs it.
 *
 * # Configuration Sources
 *
 * | Variable | Meaning | Default |
 * |---|---|---|
 * | `PORT`, then `BASE_URL_PORT` | listen port | 5000 |
 * | `DATABASE_URL` | PostgreSQL URL | unset (in-memory store) |
 * | `JWT_SECRET` | token signing secret | unset |
 * | `ORIGIN_BASE_URL` | allowed CORS origin | unset |
 * | `APP_ENV` or `NODE_ENV` | `production` enables secure cookies | development |
 * | `BCRYPT_COST` | bcrypt cost factor | 10 |
 */

use sqlx::PgPool;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_BCRYPT_COST: u32 = 10;

/// Settings the server is started with
#[derive(Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub database_url: Option<String>,
    pub jwt_secret: Option<String>,
    pub allowed_origin: Option<String>,
    pub production: bool,
    pub bcrypt_cost: u32,
}

impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("port", &self.port)
            .field("database_url", &self.database_url.as_ref().map(|_| "<set>"))
            .field("jwt_secret", &self.jwt_secret.as_ref().map(|_| "<redacted>"))
            .field("allowed_origin", &self.allowed_origin)
            .field("production", &self.production)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .finish()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            database_url: None,
            jwt_secret: None,
            allowed_origin: None,
            production: false,
            bcrypt_cost: DEFAULT_BCRYPT_COST,
        }
    }
}

impl ServerConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let port = get("PORT")
            .or_else(|| get("BASE_URL_PORT"))
            .and_then(|p| match p.parse::<u16>() {
                Ok(port) => Some(port),
                Err(_) => {
                    tracing::warn!("Ignoring invalid port {:?}", p);
                    None
                }
            })
            .unwrap_or(DEFAULT_PORT);

        let production = get("APP_ENV")
            .or_else(|| get("NODE_ENV"))
            .is_some_and(|env| env.eq_ignore_ascii_case("production"));

        let bcrypt_cost = get("BCRYPT_COST")
            .and_then(|c| c.parse::<u32>().ok())
            .filter(|c| (4..=31).contains(c))
            .unwrap_or(DEFAULT_BCRYPT_COST);

        Self {
            port,
            database_url: get("DATABASE_URL"),
            jwt_secret: get("JWT_SECRET"),
            allowed_origin: get("ORIGIN_BASE_URL"),
            production,
            bcrypt_cost,
        }
    }
}

/// Connect to PostgreSQL and run the embedded migrations
///
/// A connection failure is returned to the caller. A migration failure is
/// logged and startup continues, since the schema may already be in place.
pub async fn connect_database(database_url: &str) -> Result<PgPool, sqlx::Error> {
    tracing::info!("Connecting to database...");
    let pool = PgPool::connect(database_url).await?;
    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    match sqlx::migrate!().run(&pool).await {
        Ok(_) => tracing::info!("Database migrations completed successfully"),
        Err(e) => {
            tracing::error!("Failed to run database migrations: {}", e);
            tracing::warn!("Continuing without migrations - database might not be up to date");
        }
    }

    Ok(pool)
}
