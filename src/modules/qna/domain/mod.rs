pub mod entities;
pub mod repositories;
pub mod value_objects;

// Re-exports for easy access
pub use entities::{Answer, Answers, DeleteHistory, Question, User};
pub use repositories::{
    DeleteHistoryRepository, QuestionRepository, UnitOfWork, UnitOfWorkFactory, UserRepository,
};
pub use value_objects::ContentType;
