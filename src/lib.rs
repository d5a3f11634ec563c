use axum::{
    extract::Extension,
    routing::{delete, get, patch, post, put},
    Router,
};

pub mod auth;
pub mod catalog;
pub mod config;
pub mod controllers;
pub mod error;
pub mod fixtures;
pub mod models;
pub mod state;
mod utils;
pub mod websockets;

use controllers::{
    admin_controller::*, home_controller, movie_controller::*, seat_controller::*,
    theater_controller::*,
};

pub use config::Config;
pub use state::{AppState, SharedStore, Store};

use crate::websockets::websocket_handler;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home_controller::index))
        .route("/ws", get(websocket_handler))
        .route("/genres", get(load_genres))
        .route("/featured", get(load_featured))
        .route("/movies", get(load_movies))
        .route("/movies", post(add_movie))
        .route("/movies/:id", get(load_movie_with_details))
        .route("/movies/:id", put(update_movie))
        .route("/movies/:id", delete(delete_movie))
        .route("/movies/:id/showtimes/:show_time_id/seats", get(load_seat_grid))
        .route("/theaters", get(load_theaters))
        .route("/theaters", post(add_theater))
        .route("/theaters/:id", get(load_theater))
        .route("/theaters/:id", patch(update_theater))
        .route("/theaters/:id", delete(delete_theater))
        .route("/theaters/:id/select", post(select_theater))
        .route("/theaters/:id/screens", post(add_screen))
        .route("/theaters/:id/screens/:screen_id/preview", get(load_screen_preview))
        .route("/admin/selection/screens/:screen_id", delete(delete_selected_screen))
        .route("/admin/stats", get(load_stats))
        .route("/admin/reset", post(reset_catalog))
        .route("/users", get(load_users))
        .layer(Extension(state))
}
