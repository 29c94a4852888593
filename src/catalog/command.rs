pub mod add_book_cmd;
pub mod get_book_cmd;
pub mod list_books_cmd;
pub mod purge_book_cmd;
pub mod remove_book_cmd;
pub mod search_books_cmd;
pub mod update_book_cmd;
