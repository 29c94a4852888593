use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

// PurgeBookCommand removes a book permanently, whether or not it was soft-deleted first
pub(crate) struct PurgeBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl PurgeBookCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct PurgeBookCommandRequest {
    pub(crate) book_id: i64,
}

impl PurgeBookCommandRequest {
    pub fn new(book_id: i64) -> Self {
        Self {
            book_id,
        }
    }
}

#[derive(Debug, Default, Serialize)]
pub(crate) struct PurgeBookCommandResponse {}

#[async_trait]
impl Command<PurgeBookCommandRequest, PurgeBookCommandResponse> for PurgeBookCommand {
    async fn execute(&self, req: PurgeBookCommandRequest) -> Result<PurgeBookCommandResponse, CommandError> {
        self.catalog_service.hard_delete_book(req.book_id).await
            .map_err(CommandError::from).map(|_| PurgeBookCommandResponse::default())
    }
}
