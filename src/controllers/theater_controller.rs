use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;
use serde_json::json;

use crate::auth::{AdminUser, AuthUser};
use crate::catalog::seat_grid::preview_labels;
use crate::error::{ApiError, CatalogError};
use crate::models::theater_model::{Screen, Theater, TheaterUpdate};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct TheaterQuery {
    pub text: Option<String>,
}

pub async fn load_theaters(
    _user: AuthUser,
    Extension(state): Extension<AppState>,
    Query(query): Query<TheaterQuery>,
) -> Json<Vec<Theater>> {
    let store = state.store.read().await;
    Json(store.get_theaters(query.text.as_deref()))
}

pub async fn load_theater(
    _user: AuthUser,
    Path(id): Path<String>,
    Extension(state): Extension<AppState>,
) -> Result<Json<Theater>, ApiError> {
    let store = state.store.read().await;
    let theater = store
        .board
        .get(&id)
        .cloned()
        .ok_or_else(|| CatalogError::not_found("Theater", &id))?;
    Ok(Json(theater))
}

pub async fn load_screen_preview(
    _admin: AdminUser,
    Path((theater_id, screen_id)): Path<(String, String)>,
    Extension(state): Extension<AppState>,
) -> Result<Json<Vec<String>>, ApiError> {
    let store = state.store.read().await;
    let theater = store
        .board
        .get(&theater_id)
        .ok_or_else(|| CatalogError::not_found("Theater", &theater_id))?;
    let screen = theater
        .screen(&screen_id)
        .ok_or_else(|| CatalogError::not_found("Screen", &screen_id))?;
    Ok(Json(preview_labels(screen)))
}

pub async fn add_theater(
    _admin: AdminUser,
    Extension(state): Extension<AppState>,
    Json(theater): Json<Theater>,
) -> Result<(StatusCode, Json<Theater>), ApiError> {
    let mut store = state.store.write().await;
    let created = store.board.add_theater(theater)?.clone();
    drop(store);
    tracing::info!(theater_id = %created.id, total_seats = created.total_seats, "theater added");
    state.notify("add_theater", json!(created)).await;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_theater(
    _admin: AdminUser,
    Extension(state): Extension<AppState>,
    Path(id): Path<String>,
    Json(update): Json<TheaterUpdate>,
) -> Result<Json<Theater>, ApiError> {
    let mut store = state.store.write().await;
    let updated = store.board.update_theater(&id, update)?.clone();
    drop(store);
    state.notify("update_theater", json!(updated)).await;
    Ok(Json(updated))
}

pub async fn remove_theater(state: &AppState, id: &str) -> Result<(), CatalogError> {
    let removed = state.store.write().await.board.delete_theater(id);
    if removed {
        tracing::info!(theater_id = %id, "theater deleted");
        Ok(())
    } else {
        Err(CatalogError::not_found("Theater", id))
    }
}

pub async fn delete_theater(
    _admin: AdminUser,
    Path(id): Path<String>,
    Extension(state): Extension<AppState>,
) -> Result<Json<String>, ApiError> {
    remove_theater(&state, &id).await?;
    state.notify("delete_theater", json!({ "id": id })).await;
    Ok(Json("Theater deleted successfully".to_string()))
}

pub async fn select_theater(
    _admin: AdminUser,
    Path(id): Path<String>,
    Extension(state): Extension<AppState>,
) -> Result<Json<Theater>, ApiError> {
    let mut store = state.store.write().await;
    if !store.board.select(&id) {
        return Err(CatalogError::not_found("Theater", &id).into());
    }
    let selected = store
        .board
        .selected()
        .cloned()
        .ok_or_else(|| CatalogError::not_found("Theater", &id))?;
    Ok(Json(selected))
}

pub async fn add_screen(
    _admin: AdminUser,
    Extension(state): Extension<AppState>,
    Path(theater_id): Path<String>,
    Json(screen): Json<Screen>,
) -> Result<(StatusCode, Json<Theater>), ApiError> {
    let mut store = state.store.write().await;
    let updated = store.board.add_screen(&theater_id, screen)?.clone();
    drop(store);
    tracing::info!(theater_id = %updated.id, total_seats = updated.total_seats, "screen added");
    state.notify("add_screen", json!(updated)).await;
    Ok((StatusCode::CREATED, Json(updated)))
}

/// Removes a screen from whichever theater is currently selected.
pub async fn remove_selected_screen(
    state: &AppState,
    screen_id: &str,
) -> Result<Theater, CatalogError> {
    let mut store = state.store.write().await;
    if store.board.selected().is_none() {
        return Err(CatalogError::Conflict("no theater is selected".into()));
    }
    let updated = store
        .board
        .delete_screen(screen_id)
        .cloned()
        .ok_or_else(|| CatalogError::not_found("Screen", screen_id))?;
    tracing::info!(
        theater_id = %updated.id,
        screen_id = %screen_id,
        total_seats = updated.total_seats,
        "screen deleted"
    );
    Ok(updated)
}

pub async fn delete_selected_screen(
    _admin: AdminUser,
    Path(screen_id): Path<String>,
    Extension(state): Extension<AppState>,
) -> Result<Json<Theater>, ApiError> {
    let updated = remove_selected_screen(&state, &screen_id).await?;
    state.notify("delete_screen", json!(updated)).await;
    Ok(Json(updated))
}
