use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/state", get(handlers::get_state))
        .route("/api/session/reload", post(handlers::reload_session))
        .route("/api/login", post(handlers::login))
        .route("/api/register", post(handlers::register))
        .route("/api/logout", post(handlers::logout))
        .route("/api/mode", post(handlers::toggle_mode))
        .route("/api/shorten", post(handlers::shorten))
        .route("/api/select", post(handlers::select))
        .route("/api/refresh", post(handlers::refresh))
        .route("/api/remove", post(handlers::remove))
        .with_state(state)
}
