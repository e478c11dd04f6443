use crate::log_info;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::LogContext;
use diesel::pg::PgConnection;
use diesel::r2d2::{self, ConnectionManager, Pool};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use std::env;
use std::time::Duration;

pub type DbPool = Pool<ConnectionManager<PgConnection>>;
pub type DbConnection = r2d2::PooledConnection<ConnectionManager<PgConnection>>;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

const DEFAULT_POOL_MAX_SIZE: u32 = 10;
const DEFAULT_CONNECTION_TIMEOUT_SECS: u64 = 10;

/// Connection settings read from the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub url: String,
    pub pool_max_size: u32,
    pub connection_timeout: Duration,
}

impl DatabaseConfig {
    /// Read `DATABASE_URL`, `DATABASE_POOL_MAX_SIZE` and
    /// `DATABASE_CONNECTION_TIMEOUT_SECS`.
    pub fn from_env() -> AppResult<Self> {
        let url = env::var("DATABASE_URL").map_err(|_| {
            AppError::DatabaseError("DATABASE_URL environment variable not found".to_string())
        })?;

        Self::from_parts(
            url,
            env::var("DATABASE_POOL_MAX_SIZE").ok(),
            env::var("DATABASE_CONNECTION_TIMEOUT_SECS").ok(),
        )
    }

    fn from_parts(
        url: String,
        pool_max_size: Option<String>,
        connection_timeout_secs: Option<String>,
    ) -> AppResult<Self> {
        if !url.starts_with("postgres://") && !url.starts_with("postgresql://") {
            return Err(AppError::DatabaseError(
                "Invalid database URL format. Must start with postgres:// or postgresql://"
                    .to_string(),
            ));
        }

        let pool_max_size = match pool_max_size {
            Some(raw) => raw.parse::<u32>().ok().filter(|size| *size > 0).ok_or_else(|| {
                AppError::ValidationError(format!("Invalid DATABASE_POOL_MAX_SIZE: {}", raw))
            })?,
            None => DEFAULT_POOL_MAX_SIZE,
        };

        let timeout_secs = match connection_timeout_secs {
            Some(raw) => raw.parse::<u64>().map_err(|_| {
                AppError::ValidationError(format!(
                    "Invalid DATABASE_CONNECTION_TIMEOUT_SECS: {}",
                    raw
                ))
            })?,
            None => DEFAULT_CONNECTION_TIMEOUT_SECS,
        };

        Ok(Self {
            url,
            pool_max_size,
            connection_timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Host part of the URL, safe to log
    pub fn display_host(&self) -> &str {
        self.url.split('@').last().unwrap_or("unknown_host")
    }
}

#[derive(Debug)]
pub struct Database {
    pool: DbPool,
}

impl Database {
    pub fn new(config: &DatabaseConfig) -> AppResult<Self> {
        log_info!(
            "Initializing database connection to: {}",
            config.display_host()
        );

        let manager = ConnectionManager::<PgConnection>::new(config.url.clone());
        let pool = r2d2::Pool::builder()
            .max_size(config.pool_max_size)
            .connection_timeout(config.connection_timeout)
            .idle_timeout(Some(Duration::from_secs(300)))
            .test_on_check_out(true)
            .build(manager)
            .map_err(|e| {
                AppError::DatabaseError(format!("Failed to create connection pool: {}", e))
            })?;

        log_info!(
            "Database connection pool initialized with max_size: {}",
            pool.max_size()
        );

        Ok(Self { pool })
    }

    /// Create a Database instance from an existing pool (useful for testing)
    pub fn from_pool(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn get_connection(&self) -> AppResult<DbConnection> {
        let start = std::time::Instant::now();

        match self.pool.get() {
            Ok(conn) => {
                let duration = start.elapsed().as_millis() as u64;
                if duration > 100 {
                    LogContext::performance_metric("db_connection_acquire", duration, Some("slow"));
                }
                Ok(conn)
            }
            Err(e) => {
                LogContext::error_with_context(
                    &e,
                    "Failed to acquire database connection from pool",
                );
                Err(AppError::from(e))
            }
        }
    }

    /// Apply embedded migrations that have not run yet
    pub fn run_migrations(&self) -> AppResult<usize> {
        let mut conn = self.get_connection()?;
        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|e| AppError::DatabaseError(format!("Failed to run migrations: {}", e)))?;

        log_info!("Applied {} pending migration(s)", applied.len());
        Ok(applied.len())
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}
