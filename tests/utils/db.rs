/// Database test utilities with singleton pattern
///
/// Postgres-backed tests are opt-in: without `TEST_DATABASE_URL` the pool is
/// `None` and callers return early.
use diesel::prelude::*;
use diesel::r2d2::{self, ConnectionManager};
use qna_lib::shared::infrastructure::{Database, DbPool};
use std::sync::{Arc, Mutex, OnceLock};

static DB_POOL: OnceLock<Option<Arc<DbPool>>> = OnceLock::new();

/// Get or create the shared test pool, with migrations applied
pub fn get_test_db_pool() -> Option<Arc<DbPool>> {
    DB_POOL
        .get_or_init(|| {
            dotenvy::dotenv().ok();
            let test_db_url = std::env::var("TEST_DATABASE_URL").ok()?;

            let manager = ConnectionManager::<PgConnection>::new(test_db_url);
            let pool = r2d2::Pool::builder()
                .max_size(5)
                .build(manager)
                .expect("Failed to create test database pool");

            Database::from_pool(pool.clone())
                .run_migrations()
                .expect("Failed to run migrations on test database");

            Some(Arc::new(pool))
        })
        .clone()
}

/// Database handle over the shared pool, or `None` when no test database is configured
pub fn test_database() -> Option<Arc<Database>> {
    get_test_db_pool().map(|pool| Arc::new(Database::from_pool((*pool).clone())))
}

/// Clean all Q&A tables - use at the start of each test
pub fn clean_test_db() {
    let Some(pool) = get_test_db_pool() else {
        return;
    };
    let mut conn = pool.get().expect("Failed to get DB connection");

    diesel::sql_query(
        "TRUNCATE TABLE delete_histories, answers, questions, users RESTART IDENTITY CASCADE",
    )
    .execute(&mut conn)
    .expect("Failed to clean Q&A tables");
}

/// Global test mutex for serialization
static TEST_LOCK: Mutex<()> = Mutex::new(());

/// Acquire test lock to ensure tests run serially
/// Returns a guard that releases the lock when dropped
pub fn acquire_test_lock() -> std::sync::MutexGuard<'static, ()> {
    // Handle poisoned mutex by recovering from panic
    match TEST_LOCK.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}
