pub mod config;
pub mod controllers;
pub mod error;
pub mod models;
pub mod services;

use tracing::info;

use crate::error::CinemaError;
use crate::models::Hall;
use crate::services::{Cinema, Counter};

// Состояние приложения: конфиг и реестр залов
pub struct AppState {
    pub config: config::Config,
    pub cinema: Cinema,
}

impl AppState {
    /// Registers the configured hall and schedules its shows.
    pub fn new(config: config::Config) -> Result<Self, CinemaError> {
        let mut cinema = Cinema::new();

        let hall_cfg = &config.hall;
        let hall = cinema.add_hall(Hall::new(hall_cfg.rows, hall_cfg.cols, hall_cfg.name.clone()))?;
        for show in &hall_cfg.shows {
            hall.add_show(show.id.clone(), show.title.clone(), show.time.clone())?;
        }

        info!(
            hall = %hall_cfg.name,
            rows = hall_cfg.rows,
            cols = hall_cfg.cols,
            shows = hall_cfg.shows.len(),
            "hall ready"
        );

        Ok(Self { config, cinema })
    }

    /// Counter bound to the configured hall.
    pub fn counter(&mut self) -> Result<Counter<'_>, CinemaError> {
        self.cinema.counter(&self.config.hall.name)
    }
}
