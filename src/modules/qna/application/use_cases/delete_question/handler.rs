use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::qna::application::service::QnaService;
use crate::shared::{application::use_case::UseCase, errors::AppResult};

use super::command::DeleteQuestionCommand;

/// Use case handler for deleting a question with its answers
pub struct DeleteQuestionHandler {
    service: Arc<QnaService>,
}

impl DeleteQuestionHandler {
    pub fn new(service: Arc<QnaService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl UseCase<DeleteQuestionCommand, ()> for DeleteQuestionHandler {
    async fn execute(&self, command: DeleteQuestionCommand) -> AppResult<()> {
        self.service
            .delete_question(&command.login_user, &command.question_id)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::qna::domain::entities::User;
    use crate::modules::qna::infrastructure::InMemoryQnaStore;
    use crate::shared::errors::AppError;

    fn handler_over(store: &Arc<InMemoryQnaStore>) -> (DeleteQuestionHandler, Arc<QnaService>) {
        let service = Arc::new(QnaService::new(store.clone(), store.clone(), store.clone()));
        (DeleteQuestionHandler::new(service.clone()), service)
    }

    #[tokio::test]
    async fn test_execute_deletes_owned_question() {
        let store = Arc::new(InMemoryQnaStore::new());
        let (handler, service) = handler_over(&store);
        let writer = User::new("javajigi", "password", "name", "javajigi@slipp.net");
        let question = service
            .create_question(&writer, "title1".into(), "contents1".into())
            .await
            .unwrap();

        handler
            .execute(DeleteQuestionCommand::new(writer, question.id()))
            .await
            .unwrap();

        assert!(service.find_active_questions().await.unwrap().is_empty());
        assert_eq!(service.find_delete_histories().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_execute_rejects_other_users_question() {
        let store = Arc::new(InMemoryQnaStore::new());
        let (handler, service) = handler_over(&store);
        let writer = User::new("javajigi", "password", "name", "javajigi@slipp.net");
        let other = User::new("sanjigi", "password", "name", "sanjigi@slipp.net");
        let question = service
            .create_question(&writer, "title1".into(), "contents1".into())
            .await
            .unwrap();

        let result = handler
            .execute(DeleteQuestionCommand::new(other, question.id()))
            .await;

        assert!(matches!(result, Err(AppError::CannotDelete(_))));
        assert_eq!(service.find_active_questions().await.unwrap().len(), 1);
    }
}
