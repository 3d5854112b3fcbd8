use crate::errors::AppError;
use crate::models::{Credentials, DashboardView, SelectRequest, ShortenRequest};
use crate::state::AppState;
use crate::ui::render_index;
use axum::{extract::State, response::Html, Json};

type ViewResult = Result<Json<DashboardView>, AppError>;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let view = state.dashboard.view().await;
    Html(render_index(&view))
}

pub async fn get_state(State(state): State<AppState>) -> ViewResult {
    Ok(Json(state.dashboard.view().await))
}

pub async fn reload_session(State(state): State<AppState>) -> ViewResult {
    state.dashboard.load_session().await;
    get_state(State(state)).await
}

pub async fn login(
    State(state): State<AppState>,
    Json(credentials): Json<Credentials>,
) -> ViewResult {
    state.dashboard.login(credentials).await;
    get_state(State(state)).await
}

pub async fn register(
    State(state): State<AppState>,
    Json(credentials): Json<Credentials>,
) -> ViewResult {
    state.dashboard.register(credentials).await;
    get_state(State(state)).await
}

pub async fn logout(State(state): State<AppState>) -> ViewResult {
    state.dashboard.logout().await;
    get_state(State(state)).await
}

pub async fn toggle_mode(State(state): State<AppState>) -> ViewResult {
    state.dashboard.toggle_mode().await;
    get_state(State(state)).await
}

pub async fn shorten(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> ViewResult {
    if payload.long_url.is_empty() {
        return Err(AppError::bad_request("long_url must not be empty"));
    }

    state.dashboard.shorten(&payload.long_url).await;
    get_state(State(state)).await
}

pub async fn select(
    State(state): State<AppState>,
    Json(payload): Json<SelectRequest>,
) -> ViewResult {
    state.dashboard.select(payload.index).await;
    get_state(State(state)).await
}

pub async fn refresh(State(state): State<AppState>) -> ViewResult {
    state.dashboard.refresh().await;
    get_state(State(state)).await
}

pub async fn remove(State(state): State<AppState>) -> ViewResult {
    state.dashboard.remove_selected().await;
    get_state(State(state)).await
}
