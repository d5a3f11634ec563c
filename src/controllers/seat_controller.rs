use axum::{
    extract::{Extension, Path},
    response::Json,
};

use crate::auth::AuthUser;
use crate::catalog::seat_grid;
use crate::error::{ApiError, CatalogError};
use crate::models::seat_model::SeatGridResponse;
use crate::state::{AppState, Store};

/// A fresh booking grid for one showtime. Availability is re-drawn on every call.
pub fn seat_grid_for(
    store: &Store,
    movie_id: &str,
    show_time_id: &str,
    cells: usize,
) -> Result<SeatGridResponse, CatalogError> {
    let movie = store
        .movie(movie_id)
        .ok_or_else(|| CatalogError::not_found("Movie", movie_id))?;
    let show_time = movie
        .show_times
        .iter()
        .find(|show_time| show_time.id == show_time_id)
        .ok_or_else(|| CatalogError::not_found("Showtime", show_time_id))?;

    Ok(SeatGridResponse {
        movie_id: movie.id.clone(),
        show_time: show_time.clone(),
        cells: seat_grid::get_seat_grid(cells),
    })
}

pub async fn load_seat_grid(
    _user: AuthUser,
    Path((movie_id, show_time_id)): Path<(String, String)>,
    Extension(state): Extension<AppState>,
) -> Result<Json<SeatGridResponse>, ApiError> {
    let store = state.store.read().await;
    let grid = seat_grid_for(&store, &movie_id, &show_time_id, state.seat_grid_cells)?;
    Ok(Json(grid))
}
