use crate::books::domain::model::BookEntity;
use crate::books::dto::{BookDto, BookRequest};

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            id: other.id,
            title: other.title.to_string(),
            author: other.author.to_string(),
            published_year: other.published_year,
            genre: other.genre.to_string(),
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}

// a fresh record, identity and timestamps are left to the repository
impl From<&BookRequest> for BookEntity {
    fn from(other: &BookRequest) -> Self {
        BookEntity::new(other.title.as_str(), other.author.as_str(), other.published_year, other.genre.as_str())
    }
}

// Overwrites the business fields of an existing record, keeping id, timestamps and the
// deletion flag.
pub fn merge_into(req: &BookRequest, book: &mut BookEntity) {
    book.title = req.title.to_string();
    book.author = req.author.to_string();
    book.published_year = req.published_year;
    book.genre = req.genre.to_string();
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::BookEntity;
    use crate::books::dto::{BookDto, BookRequest};
    use crate::books::mapping::merge_into;

    #[tokio::test]
    async fn test_should_map_entity_to_view() {
        let mut book = BookEntity::new("Dune", "Herbert", 1965, "SciFi");
        book.id = 5;
        let view = BookDto::from(&book);
        assert_eq!(5, view.id);
        assert_eq!("Herbert", view.author.as_str());
        assert_eq!(book.created_at, view.created_at);
        assert_eq!(None, view.updated_at);
    }

    #[tokio::test]
    async fn test_should_map_request_to_entity() {
        let book = BookEntity::from(&BookRequest::new("Emma", "Austen", 1815, "Classic"));
        assert_eq!(0, book.id);
        assert_eq!("Classic", book.genre.as_str());
        assert!(!book.is_deleted);
    }

    #[tokio::test]
    async fn test_should_merge_business_fields() {
        let mut book = BookEntity::new("Dune", "Herbert", 1965, "SciFi");
        book.id = 9;
        let created_at = book.created_at;
        merge_into(&BookRequest::new("Emma", "Austen", 1815, "Classic"), &mut book);
        assert_eq!(9, book.id);
        assert_eq!(created_at, book.created_at);
        assert_eq!("Emma", book.title.as_str());
        assert_eq!("Austen", book.author.as_str());
        assert_eq!(1815, book.published_year);
        assert_eq!("Classic", book.genre.as_str());
    }
}
