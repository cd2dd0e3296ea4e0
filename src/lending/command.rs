pub mod active_loans_cmd;
pub mod available_books_cmd;
pub mod cancel_reservation_cmd;
pub mod checkout_book_cmd;
pub mod list_reservations_cmd;
pub mod reserve_book_cmd;
pub mod return_book_cmd;
