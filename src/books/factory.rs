use std::sync::Arc;
use tracing::info;
use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;
use crate::core::repository::ddb_store::DDBStore;
use crate::core::repository::generic_repository::GenericRepository;
use crate::core::repository::memory_store::MemoryStore;
use crate::utils::ddb::{build_db_client, create_catalog_tables};

pub async fn create_book_repository(config: &Configuration) -> Box<dyn BookRepository> {
    info!(store = %config.store, branch = config.branch_id.as_str(), "building book repository");
    match config.store {
        RepositoryStore::Memory => {
            Box::new(GenericRepository::<BookEntity>::new(Arc::new(MemoryStore::<BookEntity>::new())))
        }
        RepositoryStore::DynamoDB => {
            let client = build_db_client(config).await;
            let store = DDBStore::<BookEntity>::new(
                client, config.books_table.as_str(), config.sequence_table.as_str());
            Box::new(GenericRepository::<BookEntity>::new(Arc::new(store)))
        }
        RepositoryStore::LocalDynamoDB => {
            let client = build_db_client(config).await;
            create_catalog_tables(&client, config).await;
            let store = DDBStore::<BookEntity>::new(
                client, config.books_table.as_str(), config.sequence_table.as_str());
            Box::new(GenericRepository::<BookEntity>::new(Arc::new(store)))
        }
    }
}
