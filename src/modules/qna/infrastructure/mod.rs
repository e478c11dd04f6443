pub mod memory;
pub mod persistence;

pub use memory::InMemoryQnaStore;
pub use persistence::PgQnaStore;
