//! The built-in dataset the service starts from. Every accessor hands out a
//! fresh copy, so edits to a working copy never leak back here.

use chrono::NaiveDate;

use crate::models::{
    movie_model::{Movie, ShowTime},
    theater_model::{Screen, Theater},
    user_model::{Role, User},
};

fn show_time(id: &str, time: &str, date: &str, price: f64) -> ShowTime {
    ShowTime {
        id: id.to_string(),
        time: time.to_string(),
        date: date.to_string(),
        price,
    }
}

fn screen(id: &str, name: &str, rows: u32, columns: u32) -> Screen {
    Screen {
        id: id.to_string(),
        name: name.to_string(),
        total_seats: rows * columns,
        rows,
        columns,
        seat_map: Vec::new(),
    }
}

fn theater(id: &str, name: &str, location: &str, screens: Vec<Screen>) -> Theater {
    Theater {
        id: id.to_string(),
        name: name.to_string(),
        location: location.to_string(),
        total_seats: Theater::seat_total(&screens).unwrap_or_default(),
        screens,
    }
}

#[allow(clippy::too_many_arguments)]
fn movie(
    id: &str,
    title: &str,
    description: &str,
    duration: u32,
    genre: &[&str],
    release: (i32, u32, u32),
    theater_id: &str,
    show_times: Vec<ShowTime>,
) -> Movie {
    Movie {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        image: format!("https://images.cinemahub.example/posters/{}.jpg", id),
        duration,
        genre: genre.iter().map(|g| g.to_string()).collect(),
        release_date: NaiveDate::from_ymd_opt(release.0, release.1, release.2)
            .unwrap_or_default(),
        theater_id: theater_id.to_string(),
        show_times,
    }
}

pub fn theaters() -> Vec<Theater> {
    vec![
        theater(
            "t1",
            "PVR Grand Cinemas",
            "Phoenix Mall, Mumbai",
            vec![
                screen("t1-s1", "Audi 1", 10, 12),
                screen("t1-s2", "Audi 2", 8, 10),
                screen("t1-s3", "IMAX", 12, 16),
            ],
        ),
        theater(
            "t2",
            "INOX Starlight",
            "Koregaon Park, Pune",
            vec![
                screen("t2-s1", "Screen 1", 10, 10),
                screen("t2-s2", "Screen 2", 6, 8),
            ],
        ),
        theater(
            "t3",
            "Cinepolis Riverside",
            "Salt Lake, Kolkata",
            vec![screen("t3-s1", "Gold Class", 5, 8)],
        ),
    ]
}

pub fn movies() -> Vec<Movie> {
    vec![
        movie(
            "m1",
            "The Last Horizon",
            "A stranded crew races against a dying star to bring humanity home.",
            148,
            &["Sci-Fi", "Adventure"],
            (2024, 3, 15),
            "t1",
            vec![
                show_time("m1-st1", "10:00", "2024-06-01", 250.0),
                show_time("m1-st2", "14:30", "2024-06-01", 300.0),
                show_time("m1-st3", "21:00", "2024-06-01", 450.0),
            ],
        ),
        movie(
            "m2",
            "Monsoon Wedding Redux",
            "Three families, one wedding, and a week of relentless rain.",
            126,
            &["Comedy", "Drama"],
            (2024, 2, 9),
            "t2",
            vec![
                show_time("m2-st1", "12:00", "2024-06-01", 180.0),
                show_time("m2-st2", "18:45", "2024-06-01", 220.0),
            ],
        ),
        movie(
            "m3",
            "Shadow Protocol",
            "A disavowed agent uncovers a conspiracy inside her own agency.",
            132,
            &["Action", "Thriller"],
            (2024, 4, 26),
            "t1",
            vec![
                show_time("m3-st1", "11:15", "2024-06-01", 280.0),
                show_time("m3-st2", "16:00", "2024-06-01", 320.0),
                show_time("m3-st3", "22:30", "2024-06-02", 350.0),
            ],
        ),
        movie(
            "m4",
            "Paper Lanterns",
            "An animated journey of a young girl who follows a lantern to the spirit world.",
            98,
            &["Animation", "Family"],
            (2023, 12, 22),
            "t3",
            vec![show_time("m4-st1", "09:30", "2024-06-01", 150.0)],
        ),
        movie(
            "m5",
            "Midnight Express Line",
            "Strangers on the last train out of the city discover none of them bought a ticket.",
            110,
            &["Horror", "Thriller"],
            (2024, 5, 10),
            "t2",
            vec![
                show_time("m5-st1", "20:00", "2024-06-01", 240.0),
                show_time("m5-st2", "23:45", "2024-06-01", 200.0),
            ],
        ),
        movie(
            "m6",
            "Cricket Fever",
            "A small-town team gets one shot at the national championship.",
            141,
            &["Drama", "Sports"],
            (2024, 1, 26),
            "t3",
            vec![
                show_time("m6-st1", "13:00", "2024-06-01", 190.0),
                show_time("m6-st2", "19:30", "2024-06-02", 260.0),
            ],
        ),
        movie(
            "m7",
            "Circuit Breakers",
            "Two rival hackers team up when their code starts rewriting itself.",
            117,
            &["Action", "Sci-Fi"],
            (2024, 5, 31),
            "t1",
            vec![show_time("m7-st1", "17:15", "2024-06-02", 310.0)],
        ),
    ]
}

pub fn users() -> Vec<User> {
    vec![
        User {
            name: "Admin".to_string(),
            email: "admin@cinemahub.example".to_string(),
            role: Role::Admin,
        },
        User {
            name: "Regular User".to_string(),
            email: "user@cinemahub.example".to_string(),
            role: Role::User,
        },
    ]
}
