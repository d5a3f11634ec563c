pub mod admin;
pub mod filters;
pub mod seat_grid;

pub use admin::{add_movie, delete_movie, update_movie, TheaterBoard};
pub use filters::{
    collect_genres, count_showtimes, dashboard_stats, featured_movies, filter_movies,
    filter_theaters, min_price, resolve_theater_name, showtimes_for_movie, DashboardStats,
    MovieFilter,
};
pub use seat_grid::{generate_seat_grid, get_seat_grid, preview_labels};
