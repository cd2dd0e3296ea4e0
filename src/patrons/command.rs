pub mod add_patron_cmd;
pub mod borrow_history_cmd;
pub mod get_patron_cmd;
pub mod list_patrons_cmd;
pub mod mark_read_cmd;
pub mod notifications_cmd;
pub mod update_patron_cmd;
