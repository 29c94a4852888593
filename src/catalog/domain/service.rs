use async_trait::async_trait;
use tracing::{debug, info};
use crate::books::domain::model::BookEntity;
use crate::books::dto::{BookDto, BookRequest};
use crate::books::mapping::merge_into;
use crate::books::repository::BookRepository;
use crate::books::validator::validate;
use crate::catalog::domain::CatalogService;
use crate::core::domain::Configuration;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

pub(crate) const BOOK_NOT_FOUND: &str = "Book not found.";

pub(crate) struct CatalogServiceImpl {
    book_repository: Box<dyn BookRepository>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(_config: &Configuration, book_repository: Box<dyn BookRepository>) -> Self {
        Self {
            book_repository,
        }
    }

    async fn find_active(&self, id: i64) -> LibraryResult<BookEntity> {
        self.book_repository.get_by_id(id).await?
            .ok_or_else(|| LibraryError::not_found(BOOK_NOT_FOUND))
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn list_books(&self) -> LibraryResult<Vec<BookDto>> {
        let books = self.book_repository.get_all().await?;
        Ok(books.iter().map(BookDto::from).collect())
    }

    async fn get_book(&self, id: i64) -> LibraryResult<BookDto> {
        self.find_active(id).await.map(|b| BookDto::from(&b))
    }

    async fn create_book(&self, req: &BookRequest) -> LibraryResult<()> {
        validate(req).map_err(LibraryError::invalid_input)?;
        let mut book = BookEntity::from(req);
        self.book_repository.add(&mut book).await?;
        info!(id = book.id, "book created");
        Ok(())
    }

    // existence is checked before validation, so an unknown id reports NotFound even for a bad request
    async fn update_book(&self, id: i64, req: &BookRequest) -> LibraryResult<()> {
        let mut book = self.find_active(id).await?;
        validate(req).map_err(LibraryError::invalid_input)?;
        merge_into(req, &mut book);
        self.book_repository.update(&mut book).await?;
        info!(id, "book updated");
        Ok(())
    }

    async fn soft_delete_book(&self, id: i64) -> LibraryResult<()> {
        let _ = self.find_active(id).await?;
        self.book_repository.soft_delete(id).await?;
        info!(id, "book soft-deleted");
        Ok(())
    }

    // soft-deleted books can still be purged, only ids without any row are NotFound
    async fn hard_delete_book(&self, id: i64) -> LibraryResult<()> {
        if self.book_repository.get_any_by_id(id).await?.is_none() {
            debug!(id, "hard delete of unknown book");
            return Err(LibraryError::not_found(BOOK_NOT_FOUND));
        }
        self.book_repository.hard_delete(id).await?;
        info!(id, "book hard-deleted");
        Ok(())
    }

    async fn find_books_by_author(&self, author: &str) -> LibraryResult<Vec<BookDto>> {
        let books = self.book_repository.find_by_author(author).await?;
        Ok(books.iter().map(BookDto::from).collect())
    }

    async fn find_books_by_genre(&self, genre: &str) -> LibraryResult<Vec<BookDto>> {
        let books = self.book_repository.find_by_genre(genre).await?;
        Ok(books.iter().map(BookDto::from).collect())
    }
}
