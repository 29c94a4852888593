use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct SearchBooksCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl SearchBooksCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

// both filters are optional, no filter lists the whole catalog
#[derive(Debug, Default, Deserialize)]
pub(crate) struct SearchBooksCommandRequest {
    pub author: Option<String>,
    pub genre: Option<String>,
}

impl SearchBooksCommandRequest {
    pub fn new(author: Option<&str>, genre: Option<&str>) -> Self {
        Self {
            author: author.map(str::to_string),
            genre: genre.map(str::to_string),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct SearchBooksCommandResponse {
    pub books: Vec<BookDto>,
}

impl SearchBooksCommandResponse {
    pub fn new(books: Vec<BookDto>) -> Self {
        Self {
            books,
        }
    }
}

#[async_trait]
impl Command<SearchBooksCommandRequest, SearchBooksCommandResponse> for SearchBooksCommand {
    async fn execute(&self, req: SearchBooksCommandRequest) -> Result<SearchBooksCommandResponse, CommandError> {
        let books = match (req.author.as_deref(), req.genre.as_deref()) {
            (Some(author), Some(genre)) => {
                let mut books = self.catalog_service.find_books_by_author(author).await?;
                books.retain(|b| b.genre.eq_ignore_ascii_case(genre.trim()));
                books
            }
            (Some(author), None) => self.catalog_service.find_books_by_author(author).await?,
            (None, Some(genre)) => self.catalog_service.find_books_by_genre(genre).await?,
            (None, None) => self.catalog_service.list_books().await?,
        };
        Ok(SearchBooksCommandResponse::new(books))
    }
}
