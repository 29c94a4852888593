use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use crate::utils::date::{opt_serializer, serializer};

// BookDto is the view of a book returned by the Catalog service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub published_year: i32,
    pub genre: String,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "opt_serializer", default)]
    pub updated_at: Option<NaiveDateTime>,
}

// BookRequest carries the business fields for creating or updating a book. Missing JSON fields
// default to empty values so that they surface as validation failures.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookRequest {
    pub title: String,
    pub author: String,
    pub published_year: i32,
    pub genre: String,
}

impl BookRequest {
    pub fn new(title: &str, author: &str, published_year: i32, genre: &str) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            published_year,
            genre: genre.to_string(),
        }
    }
}
