use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::warn;
use crate::core::library::{LibraryError, LibraryResult};

pub mod ddb_store;
pub mod generic_repository;
pub mod memory_store;

// Predicate is evaluated per record by `Repository::find`
pub type Predicate<Entity> = dyn Fn(&Entity) -> bool + Send + Sync;

// Repository offers entity-agnostic CRUD where soft-deleted records are invisible to every read
#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // all records that are not soft-deleted
    async fn get_all(&self) -> LibraryResult<Vec<Entity>>;

    // an active record, None when absent or soft-deleted
    async fn get_by_id(&self, id: i64) -> LibraryResult<Option<Entity>>;

    // raw lookup that ignores the soft-delete flag
    async fn get_any_by_id(&self, id: i64) -> LibraryResult<Option<Entity>>;

    // active records matching the predicate
    async fn find(&self, predicate: &Predicate<Entity>) -> LibraryResult<Vec<Entity>>;

    // stamps created_at and persists, the store assigns the id
    async fn add(&self, entity: &mut Entity) -> LibraryResult<()>;

    // stamps updated_at and persists the full record
    async fn update(&self, entity: &mut Entity) -> LibraryResult<()>;

    // hides an active record, no-op when absent
    async fn soft_delete(&self, id: i64) -> LibraryResult<()>;

    // removes a record permanently, no-op when absent
    async fn hard_delete(&self, id: i64) -> LibraryResult<()>;
}

// Store is the transactional backend under a repository. Every call is durable before it returns.
#[async_trait]
pub trait Store<Entity>: Sync + Send {
    // every row, including soft-deleted ones, ordered by id
    async fn scan(&self) -> LibraryResult<Vec<Entity>>;

    async fn fetch(&self, id: i64) -> LibraryResult<Option<Entity>>;

    // assigns a fresh id to the entity and inserts it
    async fn insert(&self, entity: &mut Entity) -> LibraryResult<()>;

    // overwrites an existing row, no-op when the row is gone
    async fn replace(&self, entity: &Entity) -> LibraryResult<()>;

    async fn remove(&self, id: i64) -> LibraryResult<()>;
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub enum RepositoryStore {
    Memory,
    DynamoDB,
    LocalDynamoDB,
}

impl FromStr for RepositoryStore {
    type Err = LibraryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "memory" => Ok(RepositoryStore::Memory),
            "dynamodb" => Ok(RepositoryStore::DynamoDB),
            "local-dynamodb" | "localdynamodb" => Ok(RepositoryStore::LocalDynamoDB),
            other => {
                warn!(store = other, "unknown repository store");
                Err(LibraryError::runtime(
                    format!("unknown repository store {}, expected memory, dynamodb or local-dynamodb", other).as_str(), None))
            }
        }
    }
}

impl Display for RepositoryStore {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            RepositoryStore::Memory => write!(f, "memory"),
            RepositoryStore::DynamoDB => write!(f, "dynamodb"),
            RepositoryStore::LocalDynamoDB => write!(f, "local-dynamodb"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::library::LibraryError;
    use crate::core::repository::RepositoryStore;

    #[tokio::test]
    async fn test_should_format_repository_store() {
        let stores = vec![
            RepositoryStore::Memory,
            RepositoryStore::DynamoDB,
            RepositoryStore::LocalDynamoDB,
        ];
        for store in stores {
            let str = store.to_string();
            assert_eq!(store, str.parse::<RepositoryStore>().expect("should parse store"));
        }
        assert_eq!(RepositoryStore::LocalDynamoDB, " LocalDynamoDB ".parse::<RepositoryStore>().expect("should parse store"));
    }

    #[tokio::test]
    async fn test_should_reject_unknown_store() {
        assert!(matches!("dynamo".parse::<RepositoryStore>(), Err(LibraryError::Runtime { .. })));
        assert!("".parse::<RepositoryStore>().is_err());
    }
}
