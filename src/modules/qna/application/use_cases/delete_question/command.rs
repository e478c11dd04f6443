use uuid::Uuid;

use crate::modules::qna::domain::entities::User;

/// Command for soft-deleting a question on behalf of the logged-in user
#[derive(Debug, Clone)]
pub struct DeleteQuestionCommand {
    pub login_user: User,
    pub question_id: Uuid,
}

impl DeleteQuestionCommand {
    pub fn new(login_user: User, question_id: Uuid) -> Self {
        Self {
            login_user,
            question_id,
        }
    }
}
