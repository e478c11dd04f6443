use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{answer::Answer, answers::Answers, delete_history::DeleteHistory, user::User};
use crate::shared::errors::{AppError, AppResult};

/// Question Aggregate Root
///
/// Owns its answers. Every change to an answer of this question goes through
/// the question, which keeps each answer's `question_id` pointing back here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    id: Uuid,
    title: String,
    contents: String,
    writer_id: Uuid,
    deleted: bool,
    answers: Answers,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Question {
    pub fn new(title: impl Into<String>, contents: impl Into<String>, writer: &User) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            contents: contents.into(),
            writer_id: writer.id,
            deleted: false,
            answers: Answers::default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Rebuild a question from persisted state
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: Uuid,
        title: String,
        contents: String,
        writer_id: Uuid,
        deleted: bool,
        answers: Answers,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            contents,
            writer_id,
            deleted,
            answers,
            created_at,
            updated_at,
        }
    }

    /// Reassign the writer
    pub fn write_by(mut self, writer: &User) -> Self {
        self.writer_id = writer.id;
        self.updated_at = Utc::now();
        self
    }

    pub fn is_owner(&self, user: &User) -> bool {
        self.writer_id == user.id
    }

    pub fn add_answer(&mut self, mut answer: Answer) {
        answer.attach_to(self.id);
        self.answers.add(answer);
    }

    /// Replace title and contents; authorization is the caller's job
    pub fn update(&mut self, title: impl Into<String>, contents: impl Into<String>) {
        self.title = title.into();
        self.contents = contents.into();
        self.updated_at = Utc::now();
    }

    /// Soft-delete this question and all of its answers
    ///
    /// The question's own history comes first, then one per answer in
    /// insertion order. The question is flagged deleted before its answers
    /// are visited, so a `CannotDelete` from the cascade leaves it flagged
    /// together with every answer visited before the failing one.
    pub fn delete(&mut self, login_user: &User) -> AppResult<Vec<DeleteHistory>> {
        if !self.is_owner(login_user) {
            return Err(AppError::CannotDelete(
                "You do not have permission to delete this question".to_string(),
            ));
        }

        self.deleted = true;
        self.updated_at = Utc::now();

        let mut histories = vec![DeleteHistory::from_question(self)];
        histories.extend(self.answers.delete(login_user)?);

        Ok(histories)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }

    pub fn writer_id(&self) -> Uuid {
        self.writer_id
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted
    }

    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    pub fn answer(&self, id: &Uuid) -> Option<&Answer> {
        self.answers.get(id)
    }

    pub fn answer_mut(&mut self, id: &Uuid) -> Option<&mut Answer> {
        self.answers.get_mut(id)
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
