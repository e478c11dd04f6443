/// Repository trait for question persistence
///
/// A question is stored together with its answers; answer order is kept.
use crate::modules::qna::domain::entities::Question;
use crate::shared::errors::AppResult;
use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Insert or update a question and its answers
    async fn save(&self, question: &Question) -> AppResult<Question>;

    /// Find a question whether or not it is deleted
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Question>>;

    /// Find a question that is not deleted
    async fn find_active_by_id(&self, id: &Uuid) -> AppResult<Option<Question>>;

    /// All questions that are not deleted, oldest first
    async fn find_all_active(&self) -> AppResult<Vec<Question>>;
}
