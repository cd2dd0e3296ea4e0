include!("../../lib.rs");
use std::net::SocketAddr;
use axum::{
    routing::{get, post},
    Router,
};
use tracing::info;
use crate::core::controller::AppState;
use crate::core::domain::Configuration;
use crate::utils::logging::setup_tracing;
use crate::catalog::controller::{add_book, find_book_by_isbn, remove_book, search_books, update_book};
use crate::lending::controller::{active_loans, available_books, cancel_reservation, checkout_book,
                                 patron_reservations, reserve_book, return_book};
use crate::patrons::controller::{add_patron, borrow_history, find_patron_by_id, list_patrons,
                                 mark_notification_read, notifications, update_patron};
use crate::recommendations::controller::recommend_books;

type Error = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), Error> {
    setup_tracing();

    let config = Configuration::from_env();
    let addr: SocketAddr = config.bind_addr.parse()?;
    let state = AppState::new(&config)?;

    let app = Router::new()
        .route("/catalog", post(add_book).get(search_books))
        .route("/catalog/available", get(available_books))
        .route("/catalog/:isbn",
               get(find_book_by_isbn).put(update_book).delete(remove_book))
        .route("/patrons", post(add_patron).get(list_patrons))
        .route("/patrons/:id", get(find_patron_by_id).put(update_patron))
        .route("/patrons/:id/history", get(borrow_history))
        .route("/patrons/:id/reservations", get(patron_reservations))
        .route("/patrons/:id/notifications", get(notifications))
        .route("/patrons/:id/recommendations", get(recommend_books))
        .route("/notifications/:id/read", post(mark_notification_read))
        .route("/lending/checkout", post(checkout_book))
        .route("/lending/return", post(return_book))
        .route("/lending/loans", get(active_loans))
        .route("/reservations", post(reserve_book))
        .route("/reservations/cancel", post(cancel_reservation))
        .with_state(state);

    info!(branch_id = config.branch_id.as_str(), addr = %addr, notifier = %config.notifier, "library server listening");
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await?;
    Ok(())
}
