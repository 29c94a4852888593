use std::env;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::warn;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::RepositoryStore;

// Record defines the capabilities shared by persistent objects: a store-assigned identity,
// audit timestamps and the soft-delete flag.
pub trait Record: Sync + Send {
    fn id(&self) -> i64;
    fn set_id(&mut self, id: i64);
    fn created_at(&self) -> NaiveDateTime;
    fn set_created_at(&mut self, at: NaiveDateTime);
    fn updated_at(&self) -> Option<NaiveDateTime>;
    fn set_updated_at(&mut self, at: NaiveDateTime);
    fn is_deleted(&self) -> bool;
    fn set_deleted(&mut self, deleted: bool);
}

pub const DEFAULT_BOOKS_TABLE: &str = "books";
pub const DEFAULT_SEQUENCE_TABLE: &str = "sequences";

// Configuration abstracts config options for the catalog service
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub branch_id: String,
    pub store: RepositoryStore,
    pub books_table: String,
    pub sequence_table: String,
    // endpoint of DynamoDB Local, only used by RepositoryStore::LocalDynamoDB
    pub ddb_endpoint: String,
    pub dev_mode: bool,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            store: RepositoryStore::Memory,
            books_table: DEFAULT_BOOKS_TABLE.to_string(),
            sequence_table: DEFAULT_SEQUENCE_TABLE.to_string(),
            ddb_endpoint: "http://localhost:8000".to_string(),
            dev_mode: false,
        }
    }

    pub fn with_store(mut self, store: RepositoryStore) -> Self {
        self.store = store;
        self
    }

    // Reads CATALOG_* variables, falling back to the defaults of `new`.
    pub fn from_env() -> LibraryResult<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    // Builds the configuration from any variable lookup. An unknown store name or dev-mode flag
    // is an error rather than a silent fallback.
    pub fn from_lookup<F>(lookup: F) -> LibraryResult<Self>
        where F: Fn(&str) -> Option<String> {
        let mut config = Configuration::new(
            lookup("CATALOG_BRANCH").unwrap_or_else(|| "dev".to_string()).as_str());
        if let Some(store) = lookup("CATALOG_STORE") {
            config.store = store.parse::<RepositoryStore>()?;
        }
        if let Some(table) = lookup("CATALOG_BOOKS_TABLE") {
            config.books_table = table;
        }
        if let Some(table) = lookup("CATALOG_SEQUENCE_TABLE") {
            config.sequence_table = table;
        }
        if let Some(endpoint) = lookup("CATALOG_DDB_ENDPOINT") {
            config.ddb_endpoint = endpoint;
        }
        if let Some(dev_mode) = lookup("CATALOG_DEV_MODE") {
            config.dev_mode = match dev_mode.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" | "" => false,
                other => {
                    warn!(dev_mode = other, "invalid CATALOG_DEV_MODE");
                    return Err(LibraryError::runtime(
                        format!("invalid CATALOG_DEV_MODE {}", other).as_str(), None));
                }
            };
        }
        Ok(config)
    }
}
