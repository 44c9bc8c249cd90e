use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post, put}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/report", get(handlers::report_page))
        .route("/api/entries", get(handlers::list_entries).post(handlers::add_entry))
        .route("/api/entries/clear", post(handlers::clear_entries))
        .route(
            "/api/entries/:id",
            put(handlers::edit_entry).delete(handlers::delete_entry),
        )
        .route("/api/months", get(handlers::get_months))
        .route("/api/report", get(handlers::get_report))
        .with_state(state)
}
