pub mod modules;
mod schema;
pub mod shared;

use modules::qna::{PgQnaStore, QnaService};
use shared::errors::AppResult;
use shared::utils::init_logger;
use shared::{Database, DatabaseConfig};
use std::sync::Arc;

/// Wire a `QnaService` over Postgres
///
/// Loads `.env`, initializes logging, connects using `DatabaseConfig::from_env`
/// and applies pending migrations before handing back the service.
pub fn bootstrap() -> AppResult<QnaService> {
    // Load environment variables
    dotenvy::dotenv().ok();
    init_logger();

    let config = DatabaseConfig::from_env()?;
    let database = Arc::new(Database::new(&config)?);
    database.run_migrations()?;

    let store = Arc::new(PgQnaStore::new(Arc::clone(&database)));

    Ok(QnaService::new(store.clone(), store.clone(), store))
}
