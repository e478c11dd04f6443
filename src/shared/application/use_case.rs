use crate::shared::errors::AppResult;
use async_trait::async_trait;

/// Base trait for use cases (command handlers)
///
/// This trait provides a standard interface for command handlers that an
/// outer layer (HTTP handler, CLI, job) invokes.
///
/// # Example
///
/// ```ignore
/// struct DeleteQuestionUseCase {
///     service: Arc<QnaService>,
/// }
///
/// #[async_trait]
/// impl UseCase<DeleteQuestionCommand, ()> for DeleteQuestionUseCase {
///     async fn execute(&self, command: DeleteQuestionCommand) -> AppResult<()> {
///         self.service
///             .delete_question(&command.login_user, &command.question_id)
///             .await
///     }
/// }
/// ```
#[async_trait]
pub trait UseCase<TCommand, TResult> {
    /// Execute the use case with the given command
    async fn execute(&self, command: TCommand) -> AppResult<TResult>;
}
