use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{delete_history::DeleteHistory, question::Question, user::User};
use crate::shared::errors::{AppError, AppResult};

/// Answer to a question
///
/// An answer only exists inside the [`Answers`](super::Answers) of the
/// question it belongs to; `question_id` is the back-reference to that owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    id: Uuid,
    writer_id: Uuid,
    question_id: Uuid,
    contents: String,
    deleted: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Answer {
    /// Write a new answer and register it with its question
    ///
    /// Fails with `Unauthorized` when there is no writer and with `NotFound`
    /// when there is no question. Returns the id of the registered answer.
    pub fn write(
        writer: Option<&User>,
        question: Option<&mut Question>,
        contents: impl Into<String>,
    ) -> AppResult<Uuid> {
        let writer = writer
            .ok_or_else(|| AppError::Unauthorized("An answer requires a writer".to_string()))?;
        let question = question
            .ok_or_else(|| AppError::NotFound("An answer requires a question".to_string()))?;

        let now = Utc::now();
        let answer = Self {
            id: Uuid::new_v4(),
            writer_id: writer.id,
            question_id: question.id(),
            contents: contents.into(),
            deleted: false,
            created_at: now,
            updated_at: now,
        };
        let id = answer.id;
        question.add_answer(answer);

        Ok(id)
    }

    /// Rebuild an answer from persisted state
    pub fn restore(
        id: Uuid,
        writer_id: Uuid,
        question_id: Uuid,
        contents: String,
        deleted: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            writer_id,
            question_id,
            contents,
            deleted,
            created_at,
            updated_at,
        }
    }

    pub fn is_owner(&self, user: &User) -> bool {
        self.writer_id == user.id
    }

    /// Point the back-reference at the question now holding this answer
    pub(crate) fn attach_to(&mut self, question_id: Uuid) {
        self.question_id = question_id;
    }

    /// Replace the contents; authorization is the caller's job
    pub fn update(&mut self, contents: impl Into<String>) {
        self.contents = contents.into();
        self.updated_at = Utc::now();
    }

    pub fn delete(&mut self, login_user: &User) -> AppResult<DeleteHistory> {
        if !self.is_owner(login_user) {
            return Err(AppError::CannotDelete(
                "Another user's answer exists, so the answer cannot be deleted".to_string(),
            ));
        }

        self.deleted = true;
        self.updated_at = Utc::now();

        Ok(DeleteHistory::from_answer(self))
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn writer_id(&self) -> Uuid {
        self.writer_id
    }

    pub fn question_id(&self) -> Uuid {
        self.question_id
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::{question_by, user};
    use super::*;
    use crate::modules::qna::domain::value_objects::ContentType;

    #[test]
    fn test_new_without_writer_is_unauthorized() {
        let mut question = question_by(&user(1));

        let result = Answer::write(None, Some(&mut question), "contents");

        assert!(matches!(result, Err(AppError::Unauthorized(_))));
        assert!(question.answers().is_empty());
    }

    #[test]
    fn test_new_without_question_is_not_found() {
        let writer = user(1);

        let result = Answer::write(Some(&writer), None, "contents");

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_missing_writer_is_checked_before_missing_question() {
        let result = Answer::write(None, None, "contents");
        assert!(matches!(result, Err(AppError::Unauthorized(_))));
    }

    #[test]
    fn test_new_registers_with_question() {
        let writer = user(1);
        let mut question = question_by(&writer);

        let answer_id = Answer::write(Some(&writer), Some(&mut question), "Answers Contents1").unwrap();

        let answer = question.answer(&answer_id).unwrap();
        assert_eq!(answer.question_id(), question.id());
        assert_eq!(answer.writer_id(), writer.id);
        assert_eq!(answer.contents(), "Answers Contents1");
        assert!(!answer.is_deleted());
    }

    #[test]
    fn test_delete_by_owner() {
        let writer = user(1);
        let mut question = question_by(&user(2));
        let answer_id = Answer::write(Some(&writer), Some(&mut question), "contents").unwrap();
        let answer = question.answer_mut(&answer_id).unwrap();

        let history = answer.delete(&writer).unwrap();

        assert!(answer.is_deleted());
        assert_eq!(history.content_type(), ContentType::Answer);
        assert_eq!(history.content_id(), answer.id());
        assert_eq!(history.deleted_by(), answer.writer_id());
    }

    #[test]
    fn test_delete_by_other_user_is_refused() {
        let writer = user(1);
        let mut question = question_by(&writer);
        let answer_id = Answer::write(Some(&writer), Some(&mut question), "contents").unwrap();
        let answer = question.answer_mut(&answer_id).unwrap();

        let result = answer.delete(&user(2));

        assert!(matches!(result, Err(AppError::CannotDelete(_))));
        assert!(!answer.is_deleted());
    }

    #[test]
    fn test_is_owner_compares_identity() {
        let writer = user(1);
        let mut same_identity = writer.clone();
        same_identity.rename("renamed");
        let answer = Answer::restore(
            Uuid::new_v4(),
            writer.id,
            Uuid::new_v4(),
            "contents".to_string(),
            false,
            Utc::now(),
            Utc::now(),
        );

        assert!(answer.is_owner(&same_identity));
        assert!(!answer.is_owner(&user(1)));
    }

    #[test]
    fn test_update_replaces_contents() {
        let writer = user(1);
        let mut question = question_by(&writer);
        let answer_id = Answer::write(Some(&writer), Some(&mut question), "before").unwrap();
        let answer = question.answer_mut(&answer_id).unwrap();

        answer.update("after");

        assert_eq!(answer.contents(), "after");
    }
}
