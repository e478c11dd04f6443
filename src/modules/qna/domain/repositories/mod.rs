pub mod delete_history_repository;
pub mod question_repository;
pub mod unit_of_work;
pub mod user_repository;

pub use delete_history_repository::DeleteHistoryRepository;
pub use question_repository::QuestionRepository;
pub use unit_of_work::{UnitOfWork, UnitOfWorkFactory};
pub use user_repository::UserRepository;

#[cfg(test)]
pub use unit_of_work::MockUnitOfWorkFactory;
