use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{answer::Answer, question::Question};
use crate::modules::qna::domain::value_objects::ContentType;

/// Audit record of a single soft delete
///
/// Immutable once created. Two records are equal when their ids match.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteHistory {
    id: Uuid,
    content_type: ContentType,
    content_id: Uuid,
    deleted_by: Uuid,
    created_at: DateTime<Utc>,
}

impl DeleteHistory {
    /// `created_at` defaults to now
    pub fn new(
        content_type: ContentType,
        content_id: Uuid,
        deleted_by: Uuid,
        created_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            content_type,
            content_id,
            deleted_by,
            created_at: created_at.unwrap_or_else(Utc::now),
        }
    }

    /// Rebuild a record from persisted state
    pub fn restore(
        id: Uuid,
        content_type: ContentType,
        content_id: Uuid,
        deleted_by: Uuid,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            content_type,
            content_id,
            deleted_by,
            created_at,
        }
    }

    pub fn from_answer(answer: &Answer) -> Self {
        Self::new(ContentType::Answer, answer.id(), answer.writer_id(), None)
    }

    pub fn from_question(question: &Question) -> Self {
        Self::new(
            ContentType::Question,
            question.id(),
            question.writer_id(),
            None,
        )
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn content_type(&self) -> ContentType {
        self.content_type
    }

    pub fn content_id(&self) -> Uuid {
        self.content_id
    }

    /// Id of the user the deleted content belonged to
    pub fn deleted_by(&self) -> Uuid {
        self.deleted_by
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl PartialEq for DeleteHistory {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for DeleteHistory {}
