pub mod admin_controller;
pub mod home_controller;
pub mod movie_controller;
pub mod seat_controller;
pub mod theater_controller;
