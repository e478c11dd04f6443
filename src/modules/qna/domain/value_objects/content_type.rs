use diesel_derive_enum::DbEnum;
use serde::{Deserialize, Serialize};

/// Kind of content a delete history entry refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, DbEnum)]
#[ExistingTypePath = "crate::schema::sql_types::ContentType"]
#[serde(rename_all = "UPPERCASE")]
pub enum ContentType {
    Question,
    Answer,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Question => "QUESTION",
            ContentType::Answer => "ANSWER",
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
