use std::collections::HashSet;

use crate::error::{CatalogError, Result};
use crate::models::{
    movie_model::Movie,
    theater_model::{Screen, Theater, TheaterUpdate},
};

/// Price assigned to seats when a screen's map is laid out on creation.
pub const BASE_SEAT_PRICE: f64 = 150.0;
/// One row per letter A..Z.
pub const MAX_SCREEN_ROWS: u32 = 26;
pub const MAX_SCREEN_COLUMNS: u32 = 50;

fn validate_movie(movie: &Movie) -> Result<()> {
    if movie.id.trim().is_empty() {
        return Err(CatalogError::Validation("movie id is required".into()));
    }
    if movie.title.trim().is_empty() {
        return Err(CatalogError::Validation("movie title is required".into()));
    }
    if movie.duration == 0 {
        return Err(CatalogError::Validation("duration must be positive".into()));
    }
    let mut seen = HashSet::new();
    for show_time in &movie.show_times {
        if !show_time.price.is_finite() || show_time.price < 0.0 {
            return Err(CatalogError::Validation(format!(
                "showtime {} has an invalid price",
                show_time.id
            )));
        }
        if !seen.insert(show_time.id.as_str()) {
            return Err(CatalogError::Validation(format!(
                "duplicate showtime id {}",
                show_time.id
            )));
        }
    }
    Ok(())
}

fn validate_screen(screen: &Screen) -> Result<()> {
    if screen.id.trim().is_empty() {
        return Err(CatalogError::Validation("screen id is required".into()));
    }
    if screen.rows == 0 || screen.columns == 0 {
        return Err(CatalogError::Validation(format!(
            "screen {} needs at least one row and column",
            screen.id
        )));
    }
    if screen.rows > MAX_SCREEN_ROWS || screen.columns > MAX_SCREEN_COLUMNS {
        return Err(CatalogError::Validation(format!(
            "screen {} exceeds {} rows by {} columns",
            screen.id, MAX_SCREEN_ROWS, MAX_SCREEN_COLUMNS
        )));
    }
    Ok(())
}

fn prepare_screen(mut screen: Screen) -> Result<Screen> {
    validate_screen(&screen)?;
    let capacity = screen.rows.checked_mul(screen.columns).ok_or_else(|| {
        CatalogError::Validation(format!("screen {} is too large", screen.id))
    })?;
    if screen.total_seats == 0 {
        screen.total_seats = capacity;
    } else if screen.total_seats > capacity {
        return Err(CatalogError::Validation(format!(
            "screen {} has {} seats but only {} positions",
            screen.id, screen.total_seats, capacity
        )));
    }
    if screen.seat_map.is_empty() {
        screen.seat_map = screen.build_seat_map(BASE_SEAT_PRICE);
    }
    Ok(screen)
}

pub fn add_movie(movies: &mut Vec<Movie>, movie: Movie) -> Result<&Movie> {
    validate_movie(&movie)?;
    if movies.iter().any(|existing| existing.id == movie.id) {
        return Err(CatalogError::Conflict(format!(
            "movie {} already exists",
            movie.id
        )));
    }
    movies.push(movie);
    Ok(&movies[movies.len() - 1])
}

/// Replaces the whole record, keeping its position and id.
pub fn update_movie<'a>(movies: &'a mut [Movie], id: &str, mut movie: Movie) -> Result<&'a Movie> {
    movie.id = id.to_string();
    validate_movie(&movie)?;
    let slot = movies
        .iter_mut()
        .find(|existing| existing.id == id)
        .ok_or_else(|| CatalogError::not_found("Movie", id))?;
    *slot = movie;
    Ok(&*slot)
}

pub fn delete_movie(movies: &mut Vec<Movie>, id: &str) -> bool {
    let before = movies.len();
    movies.retain(|movie| movie.id != id);
    movies.len() != before
}

/// The theater list together with the theater an admin is working on.
#[derive(Debug, Clone, Default)]
pub struct TheaterBoard {
    theaters: Vec<Theater>,
    selected: Option<String>,
}

impl TheaterBoard {
    pub fn new(theaters: Vec<Theater>) -> Self {
        TheaterBoard {
            theaters,
            selected: None,
        }
    }

    pub fn theaters(&self) -> &[Theater] {
        &self.theaters
    }

    pub fn get(&self, id: &str) -> Option<&Theater> {
        self.theaters.iter().find(|theater| theater.id == id)
    }

    pub fn select(&mut self, id: &str) -> bool {
        if self.get(id).is_some() {
            self.selected = Some(id.to_string());
            true
        } else {
            false
        }
    }

    pub fn selected(&self) -> Option<&Theater> {
        self.selected.as_deref().and_then(|id| self.get(id))
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn add_theater(&mut self, mut theater: Theater) -> Result<&Theater> {
        if theater.id.trim().is_empty() || theater.name.trim().is_empty() {
            return Err(CatalogError::Validation(
                "theater id and name are required".into(),
            ));
        }
        if self.get(&theater.id).is_some() {
            return Err(CatalogError::Conflict(format!(
                "theater {} already exists",
                theater.id
            )));
        }
        let mut seen = HashSet::new();
        for screen in &theater.screens {
            if !seen.insert(screen.id.clone()) {
                return Err(CatalogError::Validation(format!(
                    "duplicate screen id {}",
                    screen.id
                )));
            }
        }
        theater.screens = theater
            .screens
            .into_iter()
            .map(prepare_screen)
            .collect::<Result<_>>()?;
        theater.recompute_total_seats()?;
        self.theaters.push(theater);
        Ok(&self.theaters[self.theaters.len() - 1])
    }

    pub fn update_theater(&mut self, id: &str, update: TheaterUpdate) -> Result<&Theater> {
        let theater = self
            .theaters
            .iter_mut()
            .find(|theater| theater.id == id)
            .ok_or_else(|| CatalogError::not_found("Theater", id))?;
        if update
            .name
            .as_deref()
            .is_some_and(|name| name.trim().is_empty())
        {
            return Err(CatalogError::Validation("theater name cannot be blank".into()));
        }
        if let Some(name) = update.name {
            theater.name = name;
        }
        if let Some(location) = update.location {
            theater.location = location;
        }
        Ok(&*theater)
    }

    pub fn add_screen(&mut self, theater_id: &str, screen: Screen) -> Result<&Theater> {
        let screen = prepare_screen(screen)?;
        let theater = self
            .theaters
            .iter_mut()
            .find(|theater| theater.id == theater_id)
            .ok_or_else(|| CatalogError::not_found("Theater", theater_id))?;
        if theater.screen(&screen.id).is_some() {
            return Err(CatalogError::Conflict(format!(
                "screen {} already exists in theater {}",
                screen.id, theater_id
            )));
        }
        let total_seats = theater
            .total_seats
            .checked_add(screen.total_seats)
            .ok_or_else(|| {
                CatalogError::Validation(format!("theater {} has too many seats", theater_id))
            })?;
        theater.screens.push(screen);
        theater.total_seats = total_seats;
        Ok(&*theater)
    }

    /// Removes a screen from the selected theater. Returns the updated
    /// theater, or `None` when nothing is selected or the screen is unknown.
    pub fn delete_screen(&mut self, screen_id: &str) -> Option<&Theater> {
        let selected = self.selected.clone()?;
        let theater = self
            .theaters
            .iter_mut()
            .find(|theater| theater.id == selected)?;
        let before = theater.screens.len();
        theater.screens.retain(|screen| screen.id != screen_id);
        if theater.screens.len() == before {
            return None;
        }
        // A subset of screens that fit before still fits.
        theater.recompute_total_seats().ok()?;
        Some(&*theater)
    }

    pub fn delete_theater(&mut self, id: &str) -> bool {
        let before = self.theaters.len();
        self.theaters.retain(|theater| theater.id != id);
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        }
        self.theaters.len() != before
    }
}
