/// Repository trait for user persistence
use crate::modules::qna::domain::entities::User;
use crate::shared::errors::AppResult;
use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert or update a user
    async fn save(&self, user: &User) -> AppResult<User>;

    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<User>>;

    /// Find a user by login id
    async fn find_by_user_id(&self, user_id: &str) -> AppResult<Option<User>>;

    async fn find_all(&self) -> AppResult<Vec<User>>;
}
