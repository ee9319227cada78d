use std::collections::HashMap;
use tracing::debug;

use crate::error::CinemaError;
use crate::models::{SeatGrid, SeatLabel, SeatStatus, Show};

/// An auditorium with a fixed seat layout. Every show scheduled here gets
/// its own grid of that layout, and the hall is the only place seat state
/// changes.
#[derive(Debug, Clone)]
pub struct Hall {
    hall_no: String,
    rows: usize,
    cols: usize,
    seats: HashMap<String, SeatGrid>,
    shows: Vec<Show>,
}

impl Hall {
    pub fn new(rows: usize, cols: usize, hall_no: impl Into<String>) -> Self {
        Self {
            hall_no: hall_no.into(),
            rows,
            cols,
            seats: HashMap::new(),
            shows: Vec::new(),
        }
    }

    pub fn hall_no(&self) -> &str {
        &self.hall_no
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Schedules a show with a fresh all-free grid. A show id that is
    /// already scheduled is rejected and the existing grid is kept.
    pub fn add_show(
        &mut self,
        show_id: impl Into<String>,
        title: impl Into<String>,
        time: impl Into<String>,
    ) -> Result<(), CinemaError> {
        let show = Show::new(show_id, title, time);
        if self.seats.contains_key(&show.id) {
            return Err(CinemaError::DuplicateShow(show.id));
        }

        debug!(hall = %self.hall_no, show_id = %show.id, title = %show.title, "show scheduled");
        self.seats
            .insert(show.id.clone(), SeatGrid::new(self.rows, self.cols));
        self.shows.push(show);
        Ok(())
    }

    /// Shows in the order they were scheduled.
    pub fn list_shows(&self) -> &[Show] {
        &self.shows
    }

    pub fn available_seats(&self, show_id: &str) -> Result<Vec<Vec<SeatLabel>>, CinemaError> {
        Ok(self.grid(show_id)?.free_by_row())
    }

    pub fn seat_status(&self, show_id: &str, label: SeatLabel) -> Option<SeatStatus> {
        self.seats.get(show_id)?.status(label)
    }

    /// Books `seat` (`row-col`, 1-based) for a show.
    ///
    /// Checks run in a fixed order: show exists, seat text parses, seat
    /// lies inside the hall, seat is still free. Only the last step writes.
    pub fn book_seat(&mut self, show_id: &str, seat: &str) -> Result<SeatLabel, CinemaError> {
        let grid = self
            .seats
            .get_mut(show_id)
            .ok_or_else(|| CinemaError::ShowNotFound(show_id.to_string()))?;

        let label = SeatLabel::parse(seat)?;
        grid.book(label)?;
        Ok(label)
    }

    fn grid(&self, show_id: &str) -> Result<&SeatGrid, CinemaError> {
        self.seats
            .get(show_id)
            .ok_or_else(|| CinemaError::ShowNotFound(show_id.to_string()))
    }
}
