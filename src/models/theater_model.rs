use serde::{Deserialize, Serialize};

use super::seat_model::{Seat, SeatStatus, SeatType};
use crate::error::{CatalogError, Result};
use crate::utils::row_label;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Theater {
    pub id: String,
    pub name: String,
    pub location: String,
    /// Always the sum of the screens' seats; recomputed whenever screens change.
    #[serde(default)]
    pub total_seats: u32,
    #[serde(default)]
    pub screens: Vec<Screen>,
}

impl Theater {
    /// Sum of the screens' seats, `None` if it does not fit in a `u32`.
    pub fn seat_total(screens: &[Screen]) -> Option<u32> {
        screens
            .iter()
            .try_fold(0u32, |total, screen| total.checked_add(screen.total_seats))
    }

    pub fn recompute_total_seats(&mut self) -> Result<()> {
        self.total_seats = Self::seat_total(&self.screens).ok_or_else(|| {
            CatalogError::Validation(format!("theater {} has too many seats", self.id))
        })?;
        Ok(())
    }

    pub fn screen(&self, screen_id: &str) -> Option<&Screen> {
        self.screens.iter().find(|screen| screen.id == screen_id)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Screen {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub total_seats: u32,
    pub rows: u32,
    pub columns: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub seat_map: Vec<Vec<Seat>>,
}

impl Screen {
    /// Lays out a `rows` x `columns` grid of available standard seats.
    pub fn build_seat_map(&self, price: f64) -> Vec<Vec<Seat>> {
        (0..self.rows as usize)
            .map(|row| {
                let letter = row_label(row);
                (1..=self.columns)
                    .map(|column| Seat {
                        id: format!("{}{}", letter, column),
                        row: letter.clone(),
                        column,
                        status: SeatStatus::Available,
                        price,
                        seat_type: SeatType::Standard,
                    })
                    .collect()
            })
            .collect()
    }
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct TheaterUpdate {
    pub name: Option<String>,
    pub location: Option<String>,
}
