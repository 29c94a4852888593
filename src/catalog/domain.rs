pub mod service;

use async_trait::async_trait;
use crate::books::dto::{BookDto, BookRequest};
use crate::core::library::LibraryResult;

#[async_trait]
pub trait CatalogService: Sync + Send {
    async fn list_books(&self) -> LibraryResult<Vec<BookDto>>;
    async fn get_book(&self, id: i64) -> LibraryResult<BookDto>;
    async fn create_book(&self, req: &BookRequest) -> LibraryResult<()>;
    async fn update_book(&self, id: i64, req: &BookRequest) -> LibraryResult<()>;
    async fn soft_delete_book(&self, id: i64) -> LibraryResult<()>;
    async fn hard_delete_book(&self, id: i64) -> LibraryResult<()>;
    async fn find_books_by_author(&self, author: &str) -> LibraryResult<Vec<BookDto>>;
    async fn find_books_by_genre(&self, genre: &str) -> LibraryResult<Vec<BookDto>>;
}
