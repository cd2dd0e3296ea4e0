pub mod recommend_books_cmd;
