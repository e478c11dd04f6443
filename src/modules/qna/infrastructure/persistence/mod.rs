pub mod models;
pub mod pg_qna_store;

pub use pg_qna_store::{PgQnaStore, PgUnitOfWork};
