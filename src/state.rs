use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};

use crate::catalog::{self, MovieFilter, TheaterBoard};
use crate::fixtures;
use crate::models::{
    movie_model::{Movie, MovieDetail, MovieSummary},
    theater_model::Theater,
    user_model::User,
};
use crate::websockets::SharedState;

/// The service's working copy of the fixture.
#[derive(Debug, Clone)]
pub struct Store {
    pub movies: Vec<Movie>,
    pub board: TheaterBoard,
    pub users: Vec<User>,
}

pub type SharedStore = Arc<RwLock<Store>>;

impl Store {
    pub fn from_fixtures() -> Self {
        Store {
            movies: fixtures::movies(),
            board: TheaterBoard::new(fixtures::theaters()),
            users: fixtures::users(),
        }
    }

    pub fn reset(&mut self) {
        *self = Store::from_fixtures();
    }

    pub fn get_movies(&self, filter: &MovieFilter) -> Vec<Movie> {
        catalog::filter_movies(&self.movies, filter)
    }

    pub fn get_theaters(&self, text: Option<&str>) -> Vec<Theater> {
        catalog::filter_theaters(self.board.theaters(), text)
    }

    pub fn movie(&self, id: &str) -> Option<&Movie> {
        self.movies.iter().find(|movie| movie.id == id)
    }

    pub fn summarize(&self, movie: Movie) -> MovieSummary {
        MovieSummary {
            theater_name: catalog::resolve_theater_name(self.board.theaters(), &movie.theater_id)
                .to_string(),
            min_price: catalog::min_price(&movie.show_times).ok(),
            movie,
        }
    }

    pub fn detail(&self, movie: Movie) -> MovieDetail {
        let MovieSummary {
            movie,
            theater_name,
            min_price,
        } = self.summarize(movie);
        MovieDetail {
            showtime_count: catalog::showtimes_for_movie(&self.movies, &movie.id),
            movie,
            theater_name,
            min_price,
        }
    }
}

/// Everything the router hands to handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
    pub sockets: Arc<Mutex<SharedState>>,
    pub seat_grid_cells: usize,
}

impl AppState {
    pub fn new(seat_grid_cells: usize) -> Self {
        AppState {
            store: Arc::new(RwLock::new(Store::from_fixtures())),
            sockets: Arc::new(Mutex::new(SharedState::new())),
            seat_grid_cells,
        }
    }
}
