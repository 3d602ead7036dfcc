use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/reports", get(handlers::reports))
        .route("/api/dashboard", get(handlers::get_dashboard))
        .route("/api/ranges", get(handlers::get_ranges))
        .route("/api/tab", post(handlers::select_tab))
        .route("/api/range", post(handlers::select_range))
        .with_state(state)
}
