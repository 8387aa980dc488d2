use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/today", get(handlers::get_today))
        .route("/api/entry", post(handlers::add_today))
        .route(
            "/api/entry/:date",
            get(handlers::get_entry)
                .put(handlers::replace_entry)
                .delete(handlers::delete_entry),
        )
        .route("/api/goals", get(handlers::get_goals).put(handlers::save_goals))
        .route("/api/summary", get(handlers::get_summary))
        .route("/api/calendar/:year/:month", get(handlers::get_calendar))
        .with_state(state)
}
