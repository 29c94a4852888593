use chrono::{Datelike, Utc};
use crate::books::dto::BookRequest;
use crate::core::library::Violation;

pub const MAX_TITLE_LEN: usize = 200;
pub const MAX_AUTHOR_LEN: usize = 100;
pub const MAX_GENRE_LEN: usize = 100;

// Validates a create/update request against the current calendar year (UTC).
pub fn validate(req: &BookRequest) -> Result<(), Vec<Violation>> {
    validate_for_year(req, Utc::now().year())
}

// Every rule runs, so the result lists all failures in rule order rather than the first one.
pub fn validate_for_year(req: &BookRequest, current_year: i32) -> Result<(), Vec<Violation>> {
    let mut violations = vec![];

    check_text(&mut violations, "title", &req.title, MAX_TITLE_LEN,
               "Title must be filled out.", "Title must not exceed 200 characters.");
    check_text(&mut violations, "author", &req.author, MAX_AUTHOR_LEN,
               "Author must be filled out.", "Author must not exceed 100 characters.");

    if req.published_year < 0 {
        violations.push(Violation::new("published_year", "PublishedYear must be a positive number"));
    }
    if req.published_year > current_year {
        violations.push(Violation::new("published_year",
                                       format!("PublishedYear cannot be greater than {}", current_year).as_str()));
    }

    check_text(&mut violations, "genre", &req.genre, MAX_GENRE_LEN,
               "Genre must be filled out", "Genre cannot exceed 100 characters");

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

fn check_text(violations: &mut Vec<Violation>, field: &str, value: &str, max_len: usize,
              empty_msg: &str, too_long_msg: &str) {
    if value.trim().is_empty() {
        violations.push(Violation::new(field, empty_msg));
    }
    if value.chars().count() > max_len {
        violations.push(Violation::new(field, too_long_msg));
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, Utc};
    use crate::books::dto::BookRequest;
    use crate::books::validator::{validate, validate_for_year};
    use crate::core::library::Violation;

    #[tokio::test]
    async fn test_should_accept_valid_book() {
        assert_eq!(Ok(()), validate(&BookRequest::new("Dune", "Herbert", 1965, "SciFi")));
    }

    #[tokio::test]
    async fn test_should_collect_all_violations() {
        let violations = validate_for_year(&BookRequest::new("", "", -1, ""), 2024)
            .expect_err("should reject");
        assert_eq!(vec![
            Violation::new("title", "Title must be filled out."),
            Violation::new("author", "Author must be filled out."),
            Violation::new("published_year", "PublishedYear must be a positive number"),
            Violation::new("genre", "Genre must be filled out"),
        ], violations);
    }

    #[tokio::test]
    async fn test_should_reject_whitespace_only() {
        let violations = validate_for_year(&BookRequest::new("   ", "Herbert", 1965, "\t"), 2024)
            .expect_err("should reject");
        assert_eq!(vec!["title", "genre"], violations.iter().map(|v| v.field.as_str()).collect::<Vec<&str>>());
    }

    #[tokio::test]
    async fn test_should_reject_long_fields() {
        let req = BookRequest::new("t".repeat(201).as_str(), "a".repeat(101).as_str(), 1965, "g".repeat(101).as_str());
        let violations = validate_for_year(&req, 2024).expect_err("should reject");
        assert_eq!(vec![
            Violation::new("title", "Title must not exceed 200 characters."),
            Violation::new("author", "Author must not exceed 100 characters."),
            Violation::new("genre", "Genre cannot exceed 100 characters"),
        ], violations);

        let req = BookRequest::new("t".repeat(200).as_str(), "a".repeat(100).as_str(), 1965, "g".repeat(100).as_str());
        assert_eq!(Ok(()), validate_for_year(&req, 2024));
    }

    #[tokio::test]
    async fn test_should_count_characters_not_bytes() {
        let req = BookRequest::new("é".repeat(200).as_str(), "Herbert", 1965, "SciFi");
        assert_eq!(Ok(()), validate_for_year(&req, 2024));
    }

    #[tokio::test]
    async fn test_should_check_year_boundaries() {
        let year = Utc::now().year();
        assert_eq!(Ok(()), validate(&BookRequest::new("Dune", "Herbert", year, "SciFi")));
        assert_eq!(Ok(()), validate(&BookRequest::new("Dune", "Herbert", 0, "SciFi")));

        let violations = validate(&BookRequest::new("Dune", "Herbert", year + 1, "SciFi"))
            .expect_err("should reject next year");
        assert_eq!(vec![Violation::new("published_year",
                                       format!("PublishedYear cannot be greater than {}", year).as_str())], violations);
    }
}
