use std::sync::Arc;
use async_trait::async_trait;
use chrono::Utc;
use tracing::debug;
use crate::core::domain::Record;
use crate::core::library::LibraryResult;
use crate::core::repository::{Predicate, Repository, Store};

// GenericRepository enforces soft-delete visibility over any Record type. It keeps no state of
// its own beyond the store handle, so it can be shared across concurrent callers.
pub struct GenericRepository<Entity> {
    store: Arc<dyn Store<Entity>>,
}

impl<Entity> GenericRepository<Entity> {
    pub fn new(store: Arc<dyn Store<Entity>>) -> Self {
        Self {
            store,
        }
    }
}

#[async_trait]
impl<Entity> Repository<Entity> for GenericRepository<Entity>
    where Entity: Record + Clone + 'static {
    async fn get_all(&self) -> LibraryResult<Vec<Entity>> {
        let rows = self.store.scan().await?;
        Ok(rows.into_iter().filter(|e| !e.is_deleted()).collect())
    }

    async fn get_by_id(&self, id: i64) -> LibraryResult<Option<Entity>> {
        let row = self.store.fetch(id).await?;
        Ok(row.filter(|e| !e.is_deleted()))
    }

    async fn get_any_by_id(&self, id: i64) -> LibraryResult<Option<Entity>> {
        self.store.fetch(id).await
    }

    async fn find(&self, predicate: &Predicate<Entity>) -> LibraryResult<Vec<Entity>> {
        let rows = self.store.scan().await?;
        Ok(rows.into_iter()
            .filter(|e| !e.is_deleted())
            .filter(|e| predicate(e))
            .collect())
    }

    async fn add(&self, entity: &mut Entity) -> LibraryResult<()> {
        entity.set_created_at(Utc::now().naive_utc());
        self.store.insert(entity).await?;
        debug!(id = entity.id(), "record added");
        Ok(())
    }

    async fn update(&self, entity: &mut Entity) -> LibraryResult<()> {
        entity.set_updated_at(Utc::now().naive_utc());
        self.store.replace(entity).await?;
        debug!(id = entity.id(), "record updated");
        Ok(())
    }

    async fn soft_delete(&self, id: i64) -> LibraryResult<()> {
        if let Some(mut entity) = self.get_by_id(id).await? {
            entity.set_deleted(true);
            entity.set_updated_at(Utc::now().naive_utc());
            self.update(&mut entity).await?;
            debug!(id, "record soft-deleted");
        }
        Ok(())
    }

    async fn hard_delete(&self, id: i64) -> LibraryResult<()> {
        if let Some(entity) = self.get_any_by_id(id).await? {
            self.store.remove(entity.id()).await?;
            debug!(id, "record hard-deleted");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use chrono::{NaiveDateTime, Utc};
    use crate::books::domain::model::BookEntity;
    use crate::core::domain::Record;
    use crate::core::repository::{Repository, Store};
    use crate::core::repository::generic_repository::GenericRepository;
    use crate::core::repository::memory_store::MemoryStore;

    fn build_repository() -> (Arc<MemoryStore<BookEntity>>, GenericRepository<BookEntity>) {
        let store = Arc::new(MemoryStore::new());
        let repo = GenericRepository::new(store.clone() as Arc<dyn Store<BookEntity>>);
        (store, repo)
    }

    async fn add_book(repo: &GenericRepository<BookEntity>, title: &str, author: &str) -> BookEntity {
        let mut book = BookEntity::new(title, author, 1965, "SciFi");
        repo.add(&mut book).await.expect("should add book");
        book
    }

    #[tokio::test]
    async fn test_should_add_and_get_book() {
        let (_, repo) = build_repository();
        let book = add_book(&repo, "Dune", "Herbert").await;
        assert_eq!(1, book.id);
        assert!(book.updated_at.is_none());

        let loaded = repo.get_by_id(book.id).await.expect("should get book").expect("should exist");
        assert_eq!(book, loaded);
    }

    #[tokio::test]
    async fn test_should_return_empty_catalog() {
        let (_, repo) = build_repository();
        assert!(repo.get_all().await.expect("should list").is_empty());
        assert!(repo.get_by_id(1).await.expect("should get").is_none());
    }

    #[tokio::test]
    async fn test_should_stamp_updated_at() {
        let (_, repo) = build_repository();
        let mut book = add_book(&repo, "Dune", "Herbert").await;
        let created_at = book.created_at;

        book.title = "Dune Messiah".to_string();
        repo.update(&mut book).await.expect("should update book");

        let loaded = repo.get_by_id(book.id).await.expect("should get book").expect("should exist");
        assert_eq!("Dune Messiah", loaded.title.as_str());
        assert_eq!(created_at, loaded.created_at);
        assert!(loaded.updated_at.expect("should be stamped") >= loaded.created_at);
    }

    #[tokio::test]
    async fn test_should_hide_but_preserve_soft_deleted() {
        let (store, repo) = build_repository();
        let book = add_book(&repo, "Dune", "Herbert").await;
        let other = add_book(&repo, "Emma", "Austen").await;

        repo.soft_delete(book.id).await.expect("should soft delete");

        assert!(repo.get_by_id(book.id).await.expect("should get").is_none());
        let all = repo.get_all().await.expect("should list");
        assert_eq!(vec![other.id], all.iter().map(|b| b.id).collect::<Vec<i64>>());
        assert!(repo.find(&|_: &BookEntity| true).await.expect("should find").iter().all(|b| b.id != book.id));

        let raw = store.fetch(book.id).await.expect("should fetch").expect("row should remain");
        assert!(raw.is_deleted);
        assert!(raw.updated_at.is_some());
        assert_eq!(Some(raw.clone()), repo.get_any_by_id(book.id).await.expect("should get raw"));
    }

    #[tokio::test]
    async fn test_should_ignore_repeated_soft_delete() {
        let (store, repo) = build_repository();
        let book = add_book(&repo, "Dune", "Herbert").await;
        repo.soft_delete(book.id).await.expect("should soft delete");
        let first = store.fetch(book.id).await.expect("should fetch").expect("row should remain");

        repo.soft_delete(book.id).await.expect("second soft delete should be a no-op");
        let second = store.fetch(book.id).await.expect("should fetch").expect("row should remain");
        assert_eq!(first.updated_at, second.updated_at);

        repo.soft_delete(999).await.expect("absent id should be a no-op");
    }

    #[tokio::test]
    async fn test_should_remove_permanently() {
        let (store, repo) = build_repository();
        let book = add_book(&repo, "Dune", "Herbert").await;
        let hidden = add_book(&repo, "Emma", "Austen").await;
        repo.soft_delete(hidden.id).await.expect("should soft delete");

        repo.hard_delete(book.id).await.expect("should hard delete");
        repo.hard_delete(hidden.id).await.expect("should hard delete soft-deleted row");
        repo.hard_delete(999).await.expect("absent id should be a no-op");

        assert!(repo.get_by_id(book.id).await.expect("should get").is_none());
        assert!(store.scan().await.expect("should scan").is_empty());
    }

    #[tokio::test]
    async fn test_should_find_with_predicate() {
        let (_, repo) = build_repository();
        add_book(&repo, "Dune", "Herbert").await;
        add_book(&repo, "Children of Dune", "Herbert").await;
        let emma = add_book(&repo, "Emma", "Austen").await;
        let removed = add_book(&repo, "Persuasion", "Austen").await;
        repo.soft_delete(removed.id).await.expect("should soft delete");

        let res = repo.find(&|b: &BookEntity| b.author == "Austen").await.expect("should find");
        assert_eq!(1, res.len());
        assert_eq!(emma.id, res[0].id);

        let res = repo.find(&|b: &BookEntity| b.title.contains("Dune")).await.expect("should find");
        assert_eq!(2, res.len());
    }

    #[derive(Debug, Clone, PartialEq)]
    struct NoteRecord {
        id: i64,
        text: String,
        created_at: NaiveDateTime,
        updated_at: Option<NaiveDateTime>,
        deleted: bool,
    }

    impl Record for NoteRecord {
        fn id(&self) -> i64 { self.id }
        fn set_id(&mut self, id: i64) { self.id = id; }
        fn created_at(&self) -> NaiveDateTime { self.created_at }
        fn set_created_at(&mut self, at: NaiveDateTime) { self.created_at = at; }
        fn updated_at(&self) -> Option<NaiveDateTime> { self.updated_at }
        fn set_updated_at(&mut self, at: NaiveDateTime) { self.updated_at = Some(at); }
        fn is_deleted(&self) -> bool { self.deleted }
        fn set_deleted(&mut self, deleted: bool) { self.deleted = deleted; }
    }

    #[tokio::test]
    async fn test_should_manage_any_record_type() {
        let repo = GenericRepository::new(Arc::new(MemoryStore::<NoteRecord>::new()) as Arc<dyn Store<NoteRecord>>);
        let mut note = NoteRecord { id: 0, text: "shelve returns".to_string(), created_at: Utc::now().naive_utc(), updated_at: None, deleted: false };
        repo.add(&mut note).await.expect("should add note");
        repo.soft_delete(note.id).await.expect("should soft delete");
        assert!(repo.get_all().await.expect("should list").is_empty());
        assert_eq!("shelve returns", repo.get_any_by_id(note.id).await.expect("should get").expect("should exist").text);
    }
}
