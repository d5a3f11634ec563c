use serde::{Deserialize, Serialize};

use crate::utils::serialize_price;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SeatStatus {
    Available,
    Booked,
    Reserved,
    Disabled,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SeatType {
    Standard,
    Premium,
    Vip,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Seat {
    pub id: String,
    pub row: String,
    pub column: u32,
    pub status: SeatStatus,
    #[serde(serialize_with = "serialize_price")]
    pub price: f64,
    #[serde(rename = "type")]
    pub seat_type: SeatType,
}

/// One cell of the booking grid. Availability is synthesized, not read from a `Seat`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SeatCell {
    pub label: String,
    pub reserved: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SeatGridResponse {
    pub movie_id: String,
    pub show_time: super::movie_model::ShowTime,
    pub cells: Vec<SeatCell>,
}
