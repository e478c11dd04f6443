/// Transaction boundary for the delete workflow
///
/// Everything done through one `UnitOfWork` becomes visible on `commit` and is
/// discarded on `rollback`. Dropping an unfinished unit of work rolls it back.
/// After `commit` or `rollback` every call fails with `InternalError`.
use crate::modules::qna::domain::entities::{DeleteHistory, Question};
use crate::shared::errors::AppResult;
use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait UnitOfWork: Send {
    /// Find a question that is not deleted
    async fn find_active_question(&mut self, id: &Uuid) -> AppResult<Option<Question>>;

    /// Stage the question and its answers
    async fn save_question(&mut self, question: &Question) -> AppResult<()>;

    /// Stage a batch of delete histories
    async fn save_delete_histories(&mut self, histories: &[DeleteHistory]) -> AppResult<()>;

    async fn commit(&mut self) -> AppResult<()>;

    async fn rollback(&mut self) -> AppResult<()>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UnitOfWorkFactory: Send + Sync {
    /// Open a new unit of work
    async fn begin(&self) -> AppResult<Box<dyn UnitOfWork>>;
}
