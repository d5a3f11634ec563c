use std::env;
use std::net::SocketAddr;

use anyhow::{anyhow, Context, Result};

use crate::catalog::seat_grid::{DEFAULT_GRID_CELLS, MAX_GRID_CELLS};

const DEFAULT_APP_URL: &str = "http://localhost:5173";
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:4000";

#[derive(Debug, Clone)]
pub struct Config {
    /// Origin allowed by CORS.
    pub app_url: String,
    pub bind_address: SocketAddr,
    /// Cells in the booking seat grid.
    pub seat_grid_cells: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let app_url = lookup("APP_URL").unwrap_or_else(|| DEFAULT_APP_URL.to_string());

        let bind_address = lookup("BIND_ADDRESS")
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string())
            .parse::<SocketAddr>()
            .context("BIND_ADDRESS must be a socket address")?;

        let seat_grid_cells = match lookup("SEAT_GRID_CELLS") {
            Some(raw) => raw
                .parse::<usize>()
                .context("SEAT_GRID_CELLS must be a number")?,
            None => DEFAULT_GRID_CELLS,
        };
        if seat_grid_cells == 0 || seat_grid_cells > MAX_GRID_CELLS {
            return Err(anyhow!(
                "SEAT_GRID_CELLS must be between 1 and {}",
                MAX_GRID_CELLS
            ));
        }

        Ok(Config {
            app_url,
            bind_address,
            seat_grid_cells,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.app_url, DEFAULT_APP_URL);
        assert_eq!(config.bind_address.port(), 4000);
        assert_eq!(config.seat_grid_cells, 40);
    }

    #[test]
    fn overrides_and_rejections() {
        let config = Config::from_lookup(lookup(&[
            ("APP_URL", "https://cinema.example"),
            ("BIND_ADDRESS", "127.0.0.1:8080"),
            ("SEAT_GRID_CELLS", "64"),
        ]))
        .unwrap();
        assert_eq!(config.app_url, "https://cinema.example");
        assert_eq!(config.bind_address.port(), 8080);
        assert_eq!(config.seat_grid_cells, 64);

        assert!(Config::from_lookup(lookup(&[("SEAT_GRID_CELLS", "0")])).is_err());
        assert!(Config::from_lookup(lookup(&[("SEAT_GRID_CELLS", "many")])).is_err());
        assert!(Config::from_lookup(lookup(&[("BIND_ADDRESS", "nowhere")])).is_err());
    }

    #[test]
    fn seat_grid_cells_are_capped() {
        let largest = MAX_GRID_CELLS.to_string();
        let config = Config::from_lookup(lookup(&[("SEAT_GRID_CELLS", largest.as_str())])).unwrap();
        assert_eq!(config.seat_grid_cells, 208);

        let too_many = (MAX_GRID_CELLS + 1).to_string();
        assert!(Config::from_lookup(lookup(&[("SEAT_GRID_CELLS", too_many.as_str())])).is_err());
        assert!(Config::from_lookup(lookup(&[("SEAT_GRID_CELLS", "18446744073709551615")])).is_err());
    }
}
