//! Read-only projections over the movie and theater collections.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};
use crate::models::{
    movie_model::{Movie, ShowTime},
    theater_model::Theater,
    user_model::User,
};
use crate::utils::contains_ignore_case;

pub const UNKNOWN_THEATER: &str = "Unknown Theater";
pub const FEATURED_COUNT: usize = 6;

/// Optional criteria combined with AND. Empty strings match everything.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MovieFilter {
    pub genre: Option<String>,
    pub theater_id: Option<String>,
    pub text: Option<String>,
}

impl MovieFilter {
    pub fn matches(&self, movie: &Movie) -> bool {
        let genre = match non_empty(&self.genre) {
            Some(genre) => movie.genre.iter().any(|g| g == genre),
            None => true,
        };
        let theater = match non_empty(&self.theater_id) {
            Some(theater_id) => movie.theater_id == theater_id,
            None => true,
        };
        let text = match non_empty(&self.text) {
            Some(text) => {
                contains_ignore_case(&movie.title, text)
                    || contains_ignore_case(&movie.description, text)
            }
            None => true,
        };
        genre && theater && text
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

pub fn filter_movies(movies: &[Movie], filter: &MovieFilter) -> Vec<Movie> {
    movies
        .iter()
        .filter(|movie| filter.matches(movie))
        .cloned()
        .collect()
}

pub fn collect_genres(movies: &[Movie]) -> BTreeSet<String> {
    movies
        .iter()
        .flat_map(|movie| movie.genre.iter().cloned())
        .collect()
}

pub fn filter_theaters(theaters: &[Theater], text: Option<&str>) -> Vec<Theater> {
    let text = text.filter(|t| !t.is_empty());
    theaters
        .iter()
        .filter(|theater| match text {
            Some(text) => {
                contains_ignore_case(&theater.name, text)
                    || contains_ignore_case(&theater.location, text)
            }
            None => true,
        })
        .cloned()
        .collect()
}

pub fn min_price(show_times: &[ShowTime]) -> Result<f64> {
    show_times
        .iter()
        .map(|show_time| show_time.price)
        .reduce(f64::min)
        .ok_or(CatalogError::EmptyInput)
}

pub fn resolve_theater_name<'a>(theaters: &'a [Theater], theater_id: &str) -> &'a str {
    theaters
        .iter()
        .find(|theater| theater.id == theater_id)
        .map(|theater| theater.name.as_str())
        .unwrap_or(UNKNOWN_THEATER)
}

pub fn count_showtimes(movies: &[Movie]) -> usize {
    movies.iter().map(|movie| movie.show_times.len()).sum()
}

pub fn showtimes_for_movie(movies: &[Movie], movie_id: &str) -> usize {
    movies
        .iter()
        .find(|movie| movie.id == movie_id)
        .map(|movie| movie.show_times.len())
        .unwrap_or(0)
}

pub fn featured_movies(movies: &[Movie], count: usize) -> Vec<Movie> {
    movies.iter().take(count).cloned().collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub movies: usize,
    pub theaters: usize,
    pub showtimes: usize,
    pub users: usize,
}

pub fn dashboard_stats(movies: &[Movie], theaters: &[Theater], users: &[User]) -> DashboardStats {
    DashboardStats {
        movies: movies.len(),
        theaters: theaters.len(),
        showtimes: count_showtimes(movies),
        users: users.len(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn show_time(id: &str, price: f64) -> ShowTime {
        ShowTime {
            id: id.to_string(),
            time: "18:00".to_string(),
            date: "2024-06-01".to_string(),
            price,
        }
    }

    fn movie(id: &str, title: &str, genre: &[&str], theater_id: &str) -> Movie {
        Movie {
            id: id.to_string(),
            title: title.to_string(),
            description: format!("About {}", title),
            image: String::new(),
            duration: 120,
            genre: genre.iter().map(|g| g.to_string()).collect(),
            release_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            theater_id: theater_id.to_string(),
            show_times: vec![show_time("s1", 250.0), show_time("s2", 180.0)],
        }
    }

    fn theater(id: &str, name: &str, location: &str) -> Theater {
        Theater {
            id: id.to_string(),
            name: name.to_string(),
            location: location.to_string(),
            total_seats: 0,
            screens: Vec::new(),
        }
    }

    fn sample() -> Vec<Movie> {
        vec![
            movie("m1", "Night Chase", &["Action", "Thriller"], "t1"),
            movie("m2", "Laugh Lines", &["Comedy"], "t2"),
            movie("m3", "Deep Orbit", &["Sci-Fi", "Action"], "t2"),
        ]
    }

    fn ids(movies: &[Movie]) -> Vec<&str> {
        movies.iter().map(|m| m.id.as_str()).collect()
    }

    #[test]
    fn empty_filter_returns_everything_in_order() {
        let movies = sample();
        assert_eq!(filter_movies(&movies, &MovieFilter::default()), movies);

        let blank = MovieFilter {
            genre: Some(String::new()),
            theater_id: Some(String::new()),
            text: Some(String::new()),
        };
        assert_eq!(filter_movies(&movies, &blank), movies);
    }

    #[test]
    fn filters_combine_and_preserve_order() {
        let movies = sample();
        let action = MovieFilter {
            genre: Some("Action".into()),
            ..Default::default()
        };
        assert_eq!(ids(&filter_movies(&movies, &action)), ["m1", "m3"]);

        let action_at_t2 = MovieFilter {
            theater_id: Some("t2".into()),
            ..action
        };
        assert_eq!(ids(&filter_movies(&movies, &action_at_t2)), ["m3"]);
    }

    #[test]
    fn text_search_covers_title_and_description() {
        let movies = sample();
        let by_title = MovieFilter {
            text: Some("ORBIT".into()),
            ..Default::default()
        };
        assert_eq!(ids(&filter_movies(&movies, &by_title)), ["m3"]);

        let by_description = MovieFilter {
            text: Some("about laugh".into()),
            ..Default::default()
        };
        assert_eq!(ids(&filter_movies(&movies, &by_description)), ["m2"]);
    }

    #[test]
    fn genres_are_deduplicated() {
        let genres = collect_genres(&sample());
        let genres: Vec<&str> = genres.iter().map(String::as_str).collect();
        assert_eq!(genres, ["Action", "Comedy", "Sci-Fi", "Thriller"]);
    }

    #[test]
    fn theaters_match_name_or_location() {
        let theaters = vec![
            theater("t1", "Grand Cinema", "Mumbai"),
            theater("t2", "Star Multiplex", "Pune"),
        ];
        assert_eq!(filter_theaters(&theaters, None).len(), 2);
        assert_eq!(filter_theaters(&theaters, Some("")).len(), 2);
        assert_eq!(filter_theaters(&theaters, Some("grand"))[0].id, "t1");
        assert_eq!(filter_theaters(&theaters, Some("PUNE"))[0].id, "t2");
        assert!(filter_theaters(&theaters, Some("Delhi")).is_empty());
    }

    #[test]
    fn min_price_rejects_empty_lists() {
        let prices = [show_time("a", 300.0), show_time("b", 120.5), show_time("c", 200.0)];
        assert_eq!(min_price(&prices), Ok(120.5));
        assert_eq!(min_price(&[]), Err(CatalogError::EmptyInput));
    }

    #[test]
    fn theater_names_fall_back() {
        let theaters = vec![theater("t1", "Grand", "Mumbai")];
        assert_eq!(resolve_theater_name(&theaters, "t1"), "Grand");
        assert_eq!(resolve_theater_name(&theaters, "t9"), UNKNOWN_THEATER);
    }

    #[test]
    fn showtime_counts() {
        let movies = sample();
        assert_eq!(count_showtimes(&movies), 6);
        assert_eq!(showtimes_for_movie(&movies, "m2"), 2);
        assert_eq!(showtimes_for_movie(&movies, "missing"), 0);
    }

    #[test]
    fn dashboard_counts_everything() {
        let stats = dashboard_stats(&sample(), &[theater("t1", "Grand", "Mumbai")], &[]);
        assert_eq!(
            stats,
            DashboardStats {
                movies: 3,
                theaters: 1,
                showtimes: 6,
                users: 0
            }
        );
        assert_eq!(ids(&featured_movies(&sample(), 2)), ["m1", "m2"]);
    }

    #[test]
    fn single_movie_scenario() {
        let mut m1 = movie("m1", "X", &["Action"], "t1");
        m1.show_times.clear();
        let movies = vec![m1];
        let theaters = vec![theater("t1", "Grand", "Mumbai")];

        let comedy = MovieFilter {
            genre: Some("Comedy".into()),
            ..Default::default()
        };
        assert!(filter_movies(&movies, &comedy).is_empty());

        let action = MovieFilter {
            genre: Some("Action".into()),
            ..Default::default()
        };
        assert_eq!(ids(&filter_movies(&movies, &action)), ["m1"]);
        assert_eq!(resolve_theater_name(&theaters, "t1"), "Grand");
        assert_eq!(resolve_theater_name(&theaters, "t9"), "Unknown Theater");
    }
}
