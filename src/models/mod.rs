pub mod movie_model;
pub mod seat_model;
pub mod theater_model;
pub mod user_model;
