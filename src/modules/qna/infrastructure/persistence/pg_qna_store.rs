/// Diesel-based implementation of every Q&A storage port
///
/// A unit of work owns one pooled connection with an open transaction; the
/// repository methods each borrow a connection for a single statement group.
use crate::modules::qna::domain::entities::{Answers, DeleteHistory, Question, User};
use crate::modules::qna::domain::repositories::{
    DeleteHistoryRepository, QuestionRepository, UnitOfWork, UnitOfWorkFactory, UserRepository,
};
use crate::modules::qna::domain::value_objects::ContentType;
use crate::modules::qna::infrastructure::persistence::models::{
    AnswerModel, DeleteHistoryModel, QuestionModel, UserModel,
};
use crate::schema::{answers, delete_histories, questions, users};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::database::{Database, DbConnection};
use crate::shared::utils::logger::LogContext;
use crate::shared::utils::Validator;
use crate::{log_debug, log_error};
use async_trait::async_trait;
use diesel::connection::{AnsiTransactionManager, TransactionManager};
use diesel::pg::PgConnection;
use diesel::prelude::*;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

pub struct PgQnaStore {
    db: Arc<Database>,
}

impl PgQnaStore {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

fn upsert_user(conn: &mut PgConnection, user: &User) -> AppResult<()> {
    Validator::validate_user(&user.user_id, &user.password, &user.name, &user.email)?;
    let model = UserModel::from(user);

    diesel::insert_into(users::table)
        .values(&model)
        .on_conflict(users::id)
        .do_update()
        .set((
            users::user_id.eq(&model.user_id),
            users::password.eq(&model.password),
            users::name.eq(&model.name),
            users::email.eq(&model.email),
            users::updated_at.eq(model.updated_at),
        ))
        .execute(conn)?;

    Ok(())
}

fn upsert_question(conn: &mut PgConnection, question: &Question) -> AppResult<()> {
    Validator::validate_question_title(question.title())?;
    let model = QuestionModel::from(question);

    diesel::insert_into(questions::table)
        .values(&model)
        .on_conflict(questions::id)
        .do_update()
        .set((
            questions::title.eq(&model.title),
            questions::contents.eq(&model.contents),
            questions::writer_id.eq(model.writer_id),
            questions::deleted.eq(model.deleted),
            questions::updated_at.eq(model.updated_at),
        ))
        .execute(conn)?;

    for (position, answer) in question.answers().iter().enumerate() {
        let position = i32::try_from(position)
            .map_err(|_| AppError::InternalError("Too many answers".to_string()))?;
        let answer_model = AnswerModel::from_answer(answer, position);

        diesel::insert_into(answers::table)
            .values(&answer_model)
            .on_conflict(answers::id)
            .do_update()
            .set((
                answers::question_id.eq(answer_model.question_id),
                answers::contents.eq(&answer_model.contents),
                answers::deleted.eq(answer_model.deleted),
                answers::position.eq(answer_model.position),
                answers::updated_at.eq(answer_model.updated_at),
            ))
            .execute(conn)?;
    }

    Ok(())
}

fn load_answers(conn: &mut PgConnection, question_ids: &[Uuid]) -> AppResult<HashMap<Uuid, Answers>> {
    let rows: Vec<AnswerModel> = answers::table
        .filter(answers::question_id.eq_any(question_ids.to_vec()))
        .order((answers::question_id.asc(), answers::position.asc()))
        .select(AnswerModel::as_select())
        .load(conn)?;

    let mut grouped: HashMap<Uuid, Vec<_>> = HashMap::new();
    for row in rows {
        grouped
            .entry(row.question_id)
            .or_default()
            .push(row.into_answer());
    }

    Ok(grouped
        .into_iter()
        .map(|(question_id, values)| (question_id, Answers::new(values)))
        .collect())
}

fn assemble(conn: &mut PgConnection, models: Vec<QuestionModel>) -> AppResult<Vec<Question>> {
    let ids: Vec<Uuid> = models.iter().map(|model| model.id).collect();
    let mut answers_by_question = load_answers(conn, &ids)?;

    Ok(models
        .into_iter()
        .map(|model| {
            let answers = answers_by_question.remove(&model.id).unwrap_or_default();
            model.into_question(answers)
        })
        .collect())
}

fn find_question(
    conn: &mut PgConnection,
    id: &Uuid,
    active_only: bool,
) -> AppResult<Option<Question>> {
    let model: Option<QuestionModel> = if active_only {
        questions::table
            .find(*id)
            .filter(questions::deleted.eq(false))
            .select(QuestionModel::as_select())
            .first(conn)
            .optional()?
    } else {
        questions::table
            .find(*id)
            .select(QuestionModel::as_select())
            .first(conn)
            .optional()?
    };

    match model {
        Some(model) => Ok(assemble(conn, vec![model])?.pop()),
        None => Ok(None),
    }
}

fn insert_histories(conn: &mut PgConnection, histories: &[DeleteHistory]) -> AppResult<()> {
    if histories.is_empty() {
        return Ok(());
    }

    let models: Vec<DeleteHistoryModel> = histories.iter().map(DeleteHistoryModel::from).collect();
    diesel::insert_into(delete_histories::table)
        .values(&models)
        .execute(conn)?;

    Ok(())
}

#[async_trait]
impl UserRepository for PgQnaStore {
    async fn save(&self, user: &User) -> AppResult<User> {
        let mut conn = self.db.get_connection()?;
        upsert_user(&mut conn, user)?;
        Ok(user.clone())
    }

    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<User>> {
        let mut conn = self.db.get_connection()?;

        let model: Option<UserModel> = users::table
            .find(*id)
            .select(UserModel::as_select())
            .first(&mut conn)
            .optional()?;

        Ok(model.map(User::from))
    }

    async fn find_by_user_id(&self, user_id: &str) -> AppResult<Option<User>> {
        let mut conn = self.db.get_connection()?;

        let model: Option<UserModel> = users::table
            .filter(users::user_id.eq(user_id))
            .select(UserModel::as_select())
            .first(&mut conn)
            .optional()?;

        Ok(model.map(User::from))
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        let mut conn = self.db.get_connection()?;

        let models: Vec<UserModel> = users::table
            .order(users::seq.asc())
            .select(UserModel::as_select())
            .load(&mut conn)?;

        Ok(models.into_iter().map(User::from).collect())
    }
}

#[async_trait]
impl QuestionRepository for PgQnaStore {
    async fn save(&self, question: &Question) -> AppResult<Question> {
        let start = std::time::Instant::now();
        let mut conn = self.db.get_connection()?;

        conn.transaction::<_, AppError, _>(|conn| upsert_question(conn, question))?;

        LogContext::db_operation(
            "save",
            "questions",
            Some(start.elapsed().as_millis() as u64),
        );
        Ok(question.clone())
    }

    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Question>> {
        let mut conn = self.db.get_connection()?;
        find_question(&mut conn, id, false)
    }

    async fn find_active_by_id(&self, id: &Uuid) -> AppResult<Option<Question>> {
        let mut conn = self.db.get_connection()?;
        find_question(&mut conn, id, true)
    }

    async fn find_all_active(&self) -> AppResult<Vec<Question>> {
        let mut conn = self.db.get_connection()?;

        let models: Vec<QuestionModel> = questions::table
            .filter(questions::deleted.eq(false))
            .order(questions::seq.asc())
            .select(QuestionModel::as_select())
            .load(&mut conn)?;

        assemble(&mut conn, models)
    }
}

#[async_trait]
impl DeleteHistoryRepository for PgQnaStore {
    async fn save_all(&self, histories: &[DeleteHistory]) -> AppResult<Vec<DeleteHistory>> {
        let mut conn = self.db.get_connection()?;
        insert_histories(&mut conn, histories)?;
        Ok(histories.to_vec())
    }

    async fn find_all(&self) -> AppResult<Vec<DeleteHistory>> {
        let mut conn = self.db.get_connection()?;

        let models: Vec<DeleteHistoryModel> = delete_histories::table
            .order(delete_histories::seq.asc())
            .select(DeleteHistoryModel::as_select())
            .load(&mut conn)?;

        Ok(models.into_iter().map(DeleteHistory::from).collect())
    }

    async fn find_by_content(
        &self,
        content_type: ContentType,
        content_id: &Uuid,
    ) -> AppResult<Vec<DeleteHistory>> {
        let mut conn = self.db.get_connection()?;

        let models: Vec<DeleteHistoryModel> = delete_histories::table
            .filter(delete_histories::content_type.eq(content_type))
            .filter(delete_histories::content_id.eq(*content_id))
            .order(delete_histories::seq.asc())
            .select(DeleteHistoryModel::as_select())
            .load(&mut conn)?;

        Ok(models.into_iter().map(DeleteHistory::from).collect())
    }
}

#[async_trait]
impl UnitOfWorkFactory for PgQnaStore {
    async fn begin(&self) -> AppResult<Box<dyn UnitOfWork>> {
        let conn = self.db.get_connection()?;
        Ok(Box::new(PgUnitOfWork::begin(conn)?))
    }
}

pub struct PgUnitOfWork {
    conn: Option<DbConnection>,
}

impl PgUnitOfWork {
    fn begin(mut conn: DbConnection) -> AppResult<Self> {
        <AnsiTransactionManager as TransactionManager<PgConnection>>::begin_transaction(&mut *conn)?;
        log_debug!("Transaction started");
        Ok(Self { conn: Some(conn) })
    }

    fn conn(&mut self) -> AppResult<&mut PgConnection> {
        self.conn
            .as_deref_mut()
            .ok_or_else(|| AppError::InternalError("Unit of work already finished".to_string()))
    }

    fn finish(&mut self) -> AppResult<DbConnection> {
        self.conn
            .take()
            .ok_or_else(|| AppError::InternalError("Unit of work already finished".to_string()))
    }
}

#[async_trait]
impl UnitOfWork for PgUnitOfWork {
    async fn find_active_question(&mut self, id: &Uuid) -> AppResult<Option<Question>> {
        find_question(self.conn()?, id, true)
    }

    async fn save_question(&mut self, question: &Question) -> AppResult<()> {
        upsert_question(self.conn()?, question)
    }

    async fn save_delete_histories(&mut self, histories: &[DeleteHistory]) -> AppResult<()> {
        insert_histories(self.conn()?, histories)
    }

    async fn commit(&mut self) -> AppResult<()> {
        let mut conn = self.finish()?;
        <AnsiTransactionManager as TransactionManager<PgConnection>>::commit_transaction(&mut *conn)?;
        log_debug!("Transaction committed");
        Ok(())
    }

    async fn rollback(&mut self) -> AppResult<()> {
        let mut conn = self.finish()?;
        <AnsiTransactionManager as TransactionManager<PgConnection>>::rollback_transaction(&mut *conn)?;
        log_debug!("Transaction rolled back");
        Ok(())
    }
}

impl Drop for PgUnitOfWork {
    fn drop(&mut self) {
        if let Some(mut conn) = self.conn.take() {
            if let Err(e) =
                <AnsiTransactionManager as TransactionManager<PgConnection>>::rollback_transaction(
                    &mut *conn,
                )
            {
                log_error!("Failed to roll back abandoned transaction: {}", e);
            }
        }
    }
}
