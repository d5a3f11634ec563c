use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::utils::serialize_price;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Movie {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: String,
    /// Running time in minutes.
    pub duration: u32,
    pub genre: Vec<String>,
    pub release_date: NaiveDate,
    pub theater_id: String,
    #[serde(default)]
    pub show_times: Vec<ShowTime>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ShowTime {
    pub id: String,
    pub time: String,
    pub date: String,
    #[serde(serialize_with = "serialize_price")]
    pub price: f64,
}

/// A catalog card: the movie plus what the listing shows next to it.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MovieSummary {
    #[serde(flatten)]
    pub movie: Movie,
    pub theater_name: String,
    pub min_price: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MovieDetail {
    #[serde(flatten)]
    pub movie: Movie,
    pub theater_name: String,
    pub min_price: Option<f64>,
    pub showtime_count: usize,
}
