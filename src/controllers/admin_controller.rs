use axum::{extract::Extension, response::Json};
use serde_json::json;

use crate::auth::AdminUser;
use crate::catalog::{self, DashboardStats};
use crate::models::user_model::User;
use crate::state::AppState;

pub async fn load_stats(
    _admin: AdminUser,
    Extension(state): Extension<AppState>,
) -> Json<DashboardStats> {
    let store = state.store.read().await;
    Json(catalog::dashboard_stats(
        &store.movies,
        store.board.theaters(),
        &store.users,
    ))
}

pub async fn load_users(
    _admin: AdminUser,
    Extension(state): Extension<AppState>,
) -> Json<Vec<User>> {
    let store = state.store.read().await;
    Json(store.users.clone())
}

pub async fn reset_catalog(
    _admin: AdminUser,
    Extension(state): Extension<AppState>,
) -> Json<String> {
    state.store.write().await.reset();
    tracing::info!("catalog reset to fixture data");
    state.notify("reset", json!({})).await;
    Json("Catalog reset".to_string())
}
