/// Repository trait for the deletion audit trail
use crate::modules::qna::domain::entities::DeleteHistory;
use crate::modules::qna::domain::value_objects::ContentType;
use crate::shared::errors::AppResult;
use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait DeleteHistoryRepository: Send + Sync {
    /// Append records in the given order
    async fn save_all(&self, histories: &[DeleteHistory]) -> AppResult<Vec<DeleteHistory>>;

    /// Every record, in the order it was written
    async fn find_all(&self) -> AppResult<Vec<DeleteHistory>>;

    async fn find_by_content(
        &self,
        content_type: ContentType,
        content_id: &Uuid,
    ) -> AppResult<Vec<DeleteHistory>>;
}
