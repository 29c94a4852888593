use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;
use crate::core::repository::generic_repository::GenericRepository;

#[async_trait]
pub trait BookRepository: Repository<BookEntity> {
    // active books whose author matches, ignoring ASCII case
    async fn find_by_author(&self, author: &str) -> LibraryResult<Vec<BookEntity>>;

    // active books whose genre matches, ignoring ASCII case
    async fn find_by_genre(&self, genre: &str) -> LibraryResult<Vec<BookEntity>>;
}

#[async_trait]
impl BookRepository for GenericRepository<BookEntity> {
    async fn find_by_author(&self, author: &str) -> LibraryResult<Vec<BookEntity>> {
        let author = author.trim().to_string();
        self.find(&move |b: &BookEntity| b.author.eq_ignore_ascii_case(&author)).await
    }

    async fn find_by_genre(&self, genre: &str) -> LibraryResult<Vec<BookEntity>> {
        let genre = genre.trim().to_string();
        self.find(&move |b: &BookEntity| b.genre.eq_ignore_ascii_case(&genre)).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use crate::books::domain::model::BookEntity;
    use crate::books::repository::BookRepository;
    use crate::core::repository::Repository;
    use crate::core::repository::generic_repository::GenericRepository;
    use crate::core::repository::memory_store::MemoryStore;

    async fn add_test_books(repo: &GenericRepository<BookEntity>) {
        for (title, author, genre) in [
            ("Dune", "Frank Herbert", "SciFi"),
            ("Dune Messiah", "Frank Herbert", "SciFi"),
            ("Emma", "Jane Austen", "Classic"),
            ("Foundation", "Isaac Asimov", "scifi"),
        ] {
            let mut book = BookEntity::new(title, author, 1960, genre);
            repo.add(&mut book).await.expect("should add book");
        }
    }

    #[tokio::test]
    async fn test_should_find_by_author() {
        let repo = GenericRepository::<BookEntity>::new(Arc::new(MemoryStore::<BookEntity>::new()));
        add_test_books(&repo).await;
        let res = repo.find_by_author("frank herbert").await.expect("should find books");
        assert_eq!(2, res.len());
        assert!(repo.find_by_author("Tolkien").await.expect("should find books").is_empty());
    }

    #[tokio::test]
    async fn test_should_find_by_genre_excluding_soft_deleted() {
        let repo = GenericRepository::<BookEntity>::new(Arc::new(MemoryStore::<BookEntity>::new()));
        add_test_books(&repo).await;
        assert_eq!(3, repo.find_by_genre("SciFi").await.expect("should find books").len());

        repo.soft_delete(1).await.expect("should soft delete");
        let res = repo.find_by_genre("SCIFI").await.expect("should find books");
        assert_eq!(vec![2, 4], res.iter().map(|b| b.id).collect::<Vec<i64>>());
    }
}
