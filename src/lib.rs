pub mod books;
pub mod catalog;
pub mod core;
pub mod gateway;
pub mod lending;
pub mod loans;
pub mod patrons;
pub mod recommendations;
pub mod reservations;
pub mod utils;
