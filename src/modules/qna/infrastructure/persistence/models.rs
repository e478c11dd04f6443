/// Diesel models for the Q&A tables
///
/// The `seq` columns are filled by the database and only used for ordering,
/// so no model carries them.
use crate::modules::qna::domain::entities::{Answer, Answers, DeleteHistory, Question, User};
use crate::modules::qna::domain::value_objects::ContentType;
use crate::schema::{answers, delete_histories, questions, users};
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

#[derive(Queryable, Selectable, Insertable, Debug, Clone)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserModel {
    pub id: Uuid,
    pub user_id: String,
    pub password: String,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&User> for UserModel {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            user_id: user.user_id.clone(),
            password: user.password.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: model.id,
            user_id: model.user_id,
            password: model.password,
            name: model.name,
            email: model.email,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[derive(Queryable, Selectable, Insertable, Debug, Clone)]
#[diesel(table_name = questions)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct QuestionModel {
    pub id: Uuid,
    pub title: String,
    pub contents: String,
    pub writer_id: Uuid,
    pub deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Question> for QuestionModel {
    fn from(question: &Question) -> Self {
        Self {
            id: question.id(),
            title: question.title().to_string(),
            contents: question.contents().to_string(),
            writer_id: question.writer_id(),
            deleted: question.is_deleted(),
            created_at: question.created_at(),
            updated_at: question.updated_at(),
        }
    }
}

impl QuestionModel {
    /// Convert to the domain aggregate
    pub fn into_question(self, answers: Answers) -> Question {
        Question::restore(
            self.id,
            self.title,
            self.contents,
            self.writer_id,
            self.deleted,
            answers,
            self.created_at,
            self.updated_at,
        )
    }
}

#[derive(Queryable, Selectable, Insertable, Debug, Clone)]
#[diesel(table_name = answers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct AnswerModel {
    pub id: Uuid,
    pub writer_id: Uuid,
    pub question_id: Uuid,
    pub contents: String,
    pub deleted: bool,
    pub position: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AnswerModel {
    pub fn from_answer(answer: &Answer, position: i32) -> Self {
        Self {
            id: answer.id(),
            writer_id: answer.writer_id(),
            question_id: answer.question_id(),
            contents: answer.contents().to_string(),
            deleted: answer.is_deleted(),
            position,
            created_at: answer.created_at(),
            updated_at: answer.updated_at(),
        }
    }

    pub fn into_answer(self) -> Answer {
        Answer::restore(
            self.id,
            self.writer_id,
            self.question_id,
            self.contents,
            self.deleted,
            self.created_at,
            self.updated_at,
        )
    }
}

#[derive(Queryable, Selectable, Insertable, Debug, Clone)]
#[diesel(table_name = delete_histories)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct DeleteHistoryModel {
    pub id: Uuid,
    pub content_type: ContentType,
    pub content_id: Uuid,
    pub deleted_by_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl From<&DeleteHistory> for DeleteHistoryModel {
    fn from(history: &DeleteHistory) -> Self {
        Self {
            id: history.id(),
            content_type: history.content_type(),
            content_id: history.content_id(),
            deleted_by_id: history.deleted_by(),
            created_at: history.created_at(),
        }
    }
}

impl From<DeleteHistoryModel> for DeleteHistory {
    fn from(model: DeleteHistoryModel) -> Self {
        DeleteHistory::restore(
            model.id,
            model.content_type,
            model.content_id,
            model.deleted_by_id,
            model.created_at,
        )
    }
}
