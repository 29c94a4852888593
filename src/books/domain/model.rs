use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::core::domain::Record;
use crate::utils::date::{opt_serializer, serializer};

// BookEntity is the persisted shape of a catalog record. `id` and `created_at` are owned by
// the repository and never change once assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookEntity {
    #[serde(default)]
    pub id: i64,
    pub title: String,
    pub author: String,
    pub published_year: i32,
    pub genre: String,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "opt_serializer", default)]
    pub updated_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub is_deleted: bool,
}

impl BookEntity {
    pub fn new(title: &str, author: &str, published_year: i32, genre: &str) -> Self {
        Self {
            id: 0,
            title: title.to_string(),
            author: author.to_string(),
            published_year,
            genre: genre.to_string(),
            // replaced by the repository when the book is added
            created_at: Utc::now().naive_utc(),
            updated_at: None,
            is_deleted: false,
        }
    }
}

impl Record for BookEntity {
    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }

    fn set_created_at(&mut self, at: NaiveDateTime) {
        self.created_at = at;
    }

    fn updated_at(&self) -> Option<NaiveDateTime> {
        self.updated_at
    }

    fn set_updated_at(&mut self, at: NaiveDateTime) {
        self.updated_at = Some(at);
    }

    fn is_deleted(&self) -> bool {
        self.is_deleted
    }

    fn set_deleted(&mut self, deleted: bool) {
        self.is_deleted = deleted;
    }
}
