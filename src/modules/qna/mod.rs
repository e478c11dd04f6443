pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::service::QnaService;
pub use application::use_cases::{DeleteQuestionCommand, DeleteQuestionHandler};
pub use domain::{
    Answer, Answers, ContentType, DeleteHistory, DeleteHistoryRepository, Question,
    QuestionRepository, UnitOfWork, UnitOfWorkFactory, User, UserRepository,
};
pub use infrastructure::{InMemoryQnaStore, PgQnaStore};
