//! Booking and preview grids.
//!
//! Availability in the booking grid is drawn at random on every call and is
//! never stored; it is a placeholder until screens carry authoritative seat
//! state (see [`Screen::build_seat_map`]).

use rand::Rng;

use crate::models::{seat_model::SeatCell, theater_model::Screen};
use crate::utils::row_label;

pub const SEATS_PER_ROW: usize = 8;
pub const DEFAULT_GRID_CELLS: usize = 40;
/// Rows A..Z of a full booking grid.
pub const MAX_GRID_CELLS: usize = 26 * SEATS_PER_ROW;
pub const PREVIEW_LIMIT: usize = 40;
pub const RESERVED_PROBABILITY: f64 = 0.3;

pub fn cell_label(index: usize) -> String {
    format!(
        "{}{}",
        row_label(index / SEATS_PER_ROW),
        index % SEATS_PER_ROW + 1
    )
}

pub fn generate_seat_grid<R: Rng>(cell_count: usize, rng: &mut R) -> Vec<SeatCell> {
    (0..cell_count)
        .map(|index| SeatCell {
            label: cell_label(index),
            reserved: rng.gen_bool(RESERVED_PROBABILITY),
        })
        .collect()
}

pub fn get_seat_grid(cell_count: usize) -> Vec<SeatCell> {
    generate_seat_grid(cell_count, &mut rand::thread_rng())
}

/// Labels for the admin seat-map preview, capped at [`PREVIEW_LIMIT`].
pub fn preview_labels(screen: &Screen) -> Vec<String> {
    let cells = (screen.rows as usize * screen.columns as usize).min(PREVIEW_LIMIT);
    (0..cells).map(cell_label).collect()
}
