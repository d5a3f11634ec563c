use std::collections::BTreeSet;

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::Json,
};
use serde_json::json;

use crate::auth::{AdminUser, AuthUser};
use crate::catalog::{self, filters::FEATURED_COUNT, MovieFilter};
use crate::error::{ApiError, CatalogError};
use crate::models::movie_model::{Movie, MovieDetail, MovieSummary};
use crate::state::AppState;

pub async fn load_movies(
    _user: AuthUser,
    Extension(state): Extension<AppState>,
    Query(filter): Query<MovieFilter>,
) -> Json<Vec<MovieSummary>> {
    let store = state.store.read().await;
    let movies = store.get_movies(&filter);
    tracing::debug!(?filter, matches = movies.len(), "filtered movies");
    Json(movies.into_iter().map(|movie| store.summarize(movie)).collect())
}

pub async fn load_genres(
    _user: AuthUser,
    Extension(state): Extension<AppState>,
) -> Json<BTreeSet<String>> {
    let store = state.store.read().await;
    Json(catalog::collect_genres(&store.movies))
}

pub async fn load_featured(
    _user: AuthUser,
    Extension(state): Extension<AppState>,
) -> Json<Vec<MovieSummary>> {
    let store = state.store.read().await;
    let featured = catalog::featured_movies(&store.movies, FEATURED_COUNT);
    Json(featured.into_iter().map(|movie| store.summarize(movie)).collect())
}

pub async fn load_movie_with_details(
    _user: AuthUser,
    Path(id): Path<String>,
    Extension(state): Extension<AppState>,
) -> Result<Json<MovieDetail>, ApiError> {
    let store = state.store.read().await;
    let movie = store
        .movie(&id)
        .cloned()
        .ok_or_else(|| CatalogError::not_found("Movie", &id))?;
    Ok(Json(store.detail(movie)))
}

pub async fn add_movie(
    _admin: AdminUser,
    Extension(state): Extension<AppState>,
    Json(movie): Json<Movie>,
) -> Result<(StatusCode, Json<Movie>), ApiError> {
    let mut store = state.store.write().await;
    let created = catalog::add_movie(&mut store.movies, movie)?.clone();
    drop(store);
    tracing::info!(movie_id = %created.id, "movie added");
    state.notify("add_movie", json!(created)).await;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_movie(
    _admin: AdminUser,
    Extension(state): Extension<AppState>,
    Path(id): Path<String>,
    Json(movie): Json<Movie>,
) -> Result<Json<Movie>, ApiError> {
    let mut store = state.store.write().await;
    let updated = catalog::update_movie(&mut store.movies, &id, movie)?.clone();
    drop(store);
    tracing::info!(movie_id = %id, "movie updated");
    state.notify("update_movie", json!(updated)).await;
    Ok(Json(updated))
}

pub async fn remove_movie(state: &AppState, id: &str) -> Result<(), CatalogError> {
    let mut store = state.store.write().await;
    let removed = catalog::delete_movie(&mut store.movies, id);
    drop(store);
    if removed {
        tracing::info!(movie_id = %id, "movie deleted");
        Ok(())
    } else {
        Err(CatalogError::not_found("Movie", id))
    }
}

pub async fn delete_movie(
    _admin: AdminUser,
    Path(id): Path<String>,
    Extension(state): Extension<AppState>,
) -> Result<Json<String>, ApiError> {
    remove_movie(&state, &id).await?;
    state.notify("delete_movie", json!({ "id": id })).await;
    Ok(Json("Movie deleted successfully".to_string()))
}
