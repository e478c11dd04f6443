/// In-process implementation of every Q&A storage port
///
/// State lives behind one async mutex. A unit of work holds that lock for its
/// whole lifetime and works on a copy of the state, which replaces the live
/// state on commit. Repository calls made from the task that holds an open
/// unit of work wait for it to finish.
use crate::modules::qna::domain::entities::{DeleteHistory, Question, User};
use crate::modules::qna::domain::repositories::{
    DeleteHistoryRepository, QuestionRepository, UnitOfWork, UnitOfWorkFactory, UserRepository,
};
use crate::modules::qna::domain::value_objects::ContentType;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;
use crate::{log_debug, log_warn};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};
use uuid::Uuid;

#[derive(Debug, Clone, Default)]
struct StoreState {
    users: Vec<User>,
    questions: Vec<Question>,
    histories: Vec<DeleteHistory>,
}

impl StoreState {
    fn upsert_user(&mut self, user: &User) -> AppResult<()> {
        Validator::validate_user(&user.user_id, &user.password, &user.name, &user.email)?;

        if self
            .users
            .iter()
            .any(|existing| existing.user_id == user.user_id && existing.id != user.id)
        {
            return Err(AppError::ValidationError(format!(
                "User id '{}' is already taken",
                user.user_id
            )));
        }

        match self.users.iter_mut().find(|existing| existing.id == user.id) {
            Some(existing) => *existing = user.clone(),
            None => self.users.push(user.clone()),
        }
        Ok(())
    }

    fn upsert_question(&mut self, question: &Question) -> AppResult<()> {
        Validator::validate_question_title(question.title())?;

        match self
            .questions
            .iter_mut()
            .find(|existing| existing.id() == question.id())
        {
            Some(existing) => *existing = question.clone(),
            None => self.questions.push(question.clone()),
        }
        Ok(())
    }

    fn active_question(&self, id: &Uuid) -> Option<Question> {
        self.questions
            .iter()
            .find(|question| question.id() == *id && !question.is_deleted())
            .cloned()
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryQnaStore {
    state: Arc<Mutex<StoreState>>,
}

impl InMemoryQnaStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryQnaStore {
    async fn save(&self, user: &User) -> AppResult<User> {
        self.state.lock().await.upsert_user(user)?;
        Ok(user.clone())
    }

    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<User>> {
        let state = self.state.lock().await;
        Ok(state.users.iter().find(|user| user.id == *id).cloned())
    }

    async fn find_by_user_id(&self, user_id: &str) -> AppResult<Option<User>> {
        let state = self.state.lock().await;
        Ok(state
            .users
            .iter()
            .find(|user| user.user_id == user_id)
            .cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        Ok(self.state.lock().await.users.clone())
    }
}

#[async_trait]
impl QuestionRepository for InMemoryQnaStore {
    async fn save(&self, question: &Question) -> AppResult<Question> {
        self.state.lock().await.upsert_question(question)?;
        Ok(question.clone())
    }

    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Question>> {
        let state = self.state.lock().await;
        Ok(state
            .questions
            .iter()
            .find(|question| question.id() == *id)
            .cloned())
    }

    async fn find_active_by_id(&self, id: &Uuid) -> AppResult<Option<Question>> {
        Ok(self.state.lock().await.active_question(id))
    }

    async fn find_all_active(&self) -> AppResult<Vec<Question>> {
        let state = self.state.lock().await;
        Ok(state
            .questions
            .iter()
            .filter(|question| !question.is_deleted())
            .cloned()
            .collect())
    }
}

#[async_trait]
impl DeleteHistoryRepository for InMemoryQnaStore {
    async fn save_all(&self, histories: &[DeleteHistory]) -> AppResult<Vec<DeleteHistory>> {
        self.state
            .lock()
            .await
            .histories
            .extend_from_slice(histories);
        Ok(histories.to_vec())
    }

    async fn find_all(&self) -> AppResult<Vec<DeleteHistory>> {
        Ok(self.state.lock().await.histories.clone())
    }

    async fn find_by_content(
        &self,
        content_type: ContentType,
        content_id: &Uuid,
    ) -> AppResult<Vec<DeleteHistory>> {
        let state = self.state.lock().await;
        Ok(state
            .histories
            .iter()
            .filter(|history| {
                history.content_type() == content_type && history.content_id() == *content_id
            })
            .cloned()
            .collect())
    }
}

#[async_trait]
impl UnitOfWorkFactory for InMemoryQnaStore {
    async fn begin(&self) -> AppResult<Box<dyn UnitOfWork>> {
        let guard = Arc::clone(&self.state).lock_owned().await;
        let working = guard.clone();
        log_debug!("Unit of work started");

        Ok(Box::new(InMemoryUnitOfWork {
            guard: Some(guard),
            working,
        }))
    }
}

pub struct InMemoryUnitOfWork {
    guard: Option<OwnedMutexGuard<StoreState>>,
    working: StoreState,
}

impl InMemoryUnitOfWork {
    fn ensure_open(&self) -> AppResult<()> {
        if self.guard.is_none() {
            return Err(AppError::InternalError(
                "Unit of work already finished".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl UnitOfWork for InMemoryUnitOfWork {
    async fn find_active_question(&mut self, id: &Uuid) -> AppResult<Option<Question>> {
        self.ensure_open()?;
        Ok(self.working.active_question(id))
    }

    async fn save_question(&mut self, question: &Question) -> AppResult<()> {
        self.ensure_open()?;
        self.working.upsert_question(question)
    }

    async fn save_delete_histories(&mut self, histories: &[DeleteHistory]) -> AppResult<()> {
        self.ensure_open()?;
        self.working.histories.extend_from_slice(histories);
        Ok(())
    }

    async fn commit(&mut self) -> AppResult<()> {
        let mut guard = self.guard.take().ok_or_else(|| {
            AppError::InternalError("Unit of work already finished".to_string())
        })?;
        *guard = std::mem::take(&mut self.working);
        log_debug!("Unit of work committed");
        Ok(())
    }

    async fn rollback(&mut self) -> AppResult<()> {
        self.ensure_open()?;
        self.guard = None;
        self.working = StoreState::default();
        log_warn!("Unit of work rolled back");
        Ok(())
    }
}
