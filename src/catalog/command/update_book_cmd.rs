use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookRequest;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct UpdateBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl UpdateBookCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct UpdateBookCommandRequest {
    pub book_id: i64,
    pub book: BookRequest,
}

impl UpdateBookCommandRequest {
    pub fn new(book_id: i64, book: BookRequest) -> Self {
        Self {
            book_id,
            book,
        }
    }
}

#[derive(Debug, Default, Serialize)]
pub(crate) struct UpdateBookCommandResponse {}

#[async_trait]
impl Command<UpdateBookCommandRequest, UpdateBookCommandResponse> for UpdateBookCommand {
    async fn execute(&self, req: UpdateBookCommandRequest) -> Result<UpdateBookCommandResponse, CommandError> {
        self.catalog_service.update_book(req.book_id, &req.book).await
            .map_err(CommandError::from).map(|_| UpdateBookCommandResponse::default())
    }
}

#[cfg(test)]
mod tests {
    use crate::books::dto::BookRequest;
    use crate::catalog::command::update_book_cmd::{UpdateBookCommand, UpdateBookCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;

    #[tokio::test]
    async fn test_should_run_update_book() {
        let svc = factory::create_catalog_service(&Configuration::new("test")).await;
        svc.create_book(&BookRequest::new("Dune", "Herbert", 1965, "SciFi")).await.expect("should add book");

        let cmd = UpdateBookCommand::new(svc.clone());
        let req = UpdateBookCommandRequest::new(1, BookRequest::new("Dune Messiah", "Herbert", 1969, "SciFi"));
        let _ = cmd.execute(req).await.expect("should update book");

        let loaded = svc.get_book(1).await.expect("should get book");
        assert_eq!("Dune Messiah", loaded.title.as_str());
        assert_eq!(1969, loaded.published_year);
        assert!(loaded.updated_at.is_some());
    }

    #[tokio::test]
    async fn test_should_not_update_unknown_book() {
        let svc = factory::create_catalog_service(&Configuration::new("test")).await;
        let req = UpdateBookCommandRequest::new(999, BookRequest::new("Dune", "Herbert", 1965, "SciFi"));
        let res = UpdateBookCommand::new(svc).execute(req).await;
        assert!(matches!(res, Err(CommandError::NotFound { .. })));
    }
}
