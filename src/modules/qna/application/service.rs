use crate::modules::qna::domain::{
    entities::{Answer, DeleteHistory, Question, User},
    repositories::{DeleteHistoryRepository, QuestionRepository, UnitOfWork, UnitOfWorkFactory},
};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::{LogContext, TimedOperation};
use crate::shared::utils::Validator;
use crate::{log_debug, log_error, log_info};
use std::sync::Arc;
use uuid::Uuid;

pub struct QnaService {
    question_repo: Arc<dyn QuestionRepository>,
    history_repo: Arc<dyn DeleteHistoryRepository>,
    unit_of_work: Arc<dyn UnitOfWorkFactory>,
}

impl QnaService {
    pub fn new(
        question_repo: Arc<dyn QuestionRepository>,
        history_repo: Arc<dyn DeleteHistoryRepository>,
        unit_of_work: Arc<dyn UnitOfWorkFactory>,
    ) -> Self {
        Self {
            question_repo,
            history_repo,
            unit_of_work,
        }
    }

    pub async fn create_question(
        &self,
        writer: &User,
        title: String,
        contents: String,
    ) -> AppResult<Question> {
        Validator::validate_question_title(&title)?;

        let question = Question::new(title, contents, writer);
        let saved = self.question_repo.save(&question).await?;

        log_info!("Question {} created by {}", saved.id(), writer.user_id);
        Ok(saved)
    }

    pub async fn add_answer(
        &self,
        writer: &User,
        question_id: &Uuid,
        contents: String,
    ) -> AppResult<Answer> {
        let mut question = self.find_question_by_id(question_id).await?;

        let answer_id = Answer::write(Some(writer), Some(&mut question), contents)?;
        let saved = self.question_repo.save(&question).await?;

        saved.answer(&answer_id).cloned().ok_or_else(|| {
            AppError::InternalError(format!("Answer {} missing after save", answer_id))
        })
    }

    pub async fn find_question_by_id(&self, id: &Uuid) -> AppResult<Question> {
        self.question_repo
            .find_active_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Question with ID {} not found", id)))
    }

    pub async fn find_active_questions(&self) -> AppResult<Vec<Question>> {
        self.question_repo.find_all_active().await
    }

    /// Soft-delete a question and its answers on behalf of `login_user`
    ///
    /// Runs in one unit of work: the flags and the history records are
    /// committed together, or the unit of work is rolled back and the error
    /// is returned unchanged.
    pub async fn delete_question(&self, login_user: &User, question_id: &Uuid) -> AppResult<()> {
        let timer = TimedOperation::new("delete_question");
        let mut uow = self.unit_of_work.begin().await?;

        match Self::delete_within(uow.as_mut(), login_user, question_id).await {
            Ok(histories) => {
                uow.commit().await?;
                LogContext::deletion("question", question_id, Some(histories.len()));
                timer.finish_with_info("committed");
                Ok(())
            }
            Err(e) => {
                if let Err(rollback_err) = uow.rollback().await {
                    log_error!(
                        "Rollback after failed delete of question {} failed: {}",
                        question_id,
                        rollback_err
                    );
                }
                if matches!(e, AppError::CannotDelete(_)) {
                    LogContext::deletion("question", question_id, None);
                }
                timer.finish_with_info("rolled back");
                Err(e)
            }
        }
    }

    async fn delete_within(
        uow: &mut dyn UnitOfWork,
        login_user: &User,
        question_id: &Uuid,
    ) -> AppResult<Vec<DeleteHistory>> {
        let mut question = uow
            .find_active_question(question_id)
            .await?
            .ok_or_else(|| {
                log_debug!("Question {} not found among active questions", question_id);
                AppError::NotFound(format!("Question with ID {} not found", question_id))
            })?;

        let histories = question.delete(login_user)?;

        uow.save_question(&question).await?;
        uow.save_delete_histories(&histories).await?;

        Ok(histories)
    }

    pub async fn find_delete_histories(&self) -> AppResult<Vec<DeleteHistory>> {
        self.history_repo.find_all().await
    }
}
