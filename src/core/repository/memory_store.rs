use std::collections::BTreeMap;
use async_trait::async_trait;
use tokio::sync::RwLock;
use crate::core::domain::Record;
use crate::core::library::LibraryResult;
use crate::core::repository::Store;

struct MemoryTable<Entity> {
    rows: BTreeMap<i64, Entity>,
    last_id: i64,
}

// MemoryStore keeps rows in an ordered map. Each operation holds the table lock for its whole
// duration, which serializes concurrent callers the way a database transaction would.
pub struct MemoryStore<Entity> {
    table: RwLock<MemoryTable<Entity>>,
}

impl<Entity> MemoryStore<Entity> {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(MemoryTable {
                rows: BTreeMap::new(),
                last_id: 0,
            }),
        }
    }
}

impl<Entity> Default for MemoryStore<Entity> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<Entity> Store<Entity> for MemoryStore<Entity>
    where Entity: Record + Clone + 'static {
    async fn scan(&self) -> LibraryResult<Vec<Entity>> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn fetch(&self, id: i64) -> LibraryResult<Option<Entity>> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn insert(&self, entity: &mut Entity) -> LibraryResult<()> {
        let mut table = self.table.write().await;
        // ids are never reused, even after a hard delete
        table.last_id += 1;
        entity.set_id(table.last_id);
        table.rows.insert(entity.id(), entity.clone());
        Ok(())
    }

    async fn replace(&self, entity: &Entity) -> LibraryResult<()> {
        let mut table = self.table.write().await;
        if let Some(row) = table.rows.get_mut(&entity.id()) {
            *row = entity.clone();
        }
        Ok(())
    }

    async fn remove(&self, id: i64) -> LibraryResult<()> {
        let mut table = self.table.write().await;
        table.rows.remove(&id);
        Ok(())
    }
}
