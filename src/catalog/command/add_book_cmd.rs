use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookRequest;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct AddBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl AddBookCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct AddBookCommandRequest {
    pub(crate) book: BookRequest,
}

impl AddBookCommandRequest {
    pub fn new(book: BookRequest) -> Self {
        Self {
            book,
        }
    }
}

#[derive(Debug, Default, Serialize)]
pub(crate) struct AddBookCommandResponse {}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        self.catalog_service.create_book(&req.book).await
            .map_err(CommandError::from).map(|_| AddBookCommandResponse::default())
    }
}
