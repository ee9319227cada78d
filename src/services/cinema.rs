use tracing::debug;

use crate::error::CinemaError;
use crate::models::Hall;
use crate::services::counter::Counter;

/// Registry of every hall in the cinema, in registration order.
#[derive(Debug, Default)]
pub struct Cinema {
    halls: Vec<Hall>,
}

impl Cinema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a hall. Hall numbers must be unique.
    pub fn add_hall(&mut self, hall: Hall) -> Result<&mut Hall, CinemaError> {
        if self.hall(hall.hall_no()).is_some() {
            return Err(CinemaError::DuplicateHall(hall.hall_no().to_string()));
        }

        debug!(hall = %hall.hall_no(), rows = hall.rows(), cols = hall.cols(), "hall registered");
        self.halls.push(hall);
        let idx = self.halls.len() - 1;
        Ok(&mut self.halls[idx])
    }

    pub fn halls(&self) -> &[Hall] {
        &self.halls
    }

    pub fn hall(&self, hall_no: &str) -> Option<&Hall> {
        self.halls.iter().find(|h| h.hall_no() == hall_no)
    }

    pub fn hall_mut(&mut self, hall_no: &str) -> Option<&mut Hall> {
        self.halls.iter_mut().find(|h| h.hall_no() == hall_no)
    }

    /// Opens a counter bound to one registered hall.
    pub fn counter(&mut self, hall_no: &str) -> Result<Counter<'_>, CinemaError> {
        self.hall_mut(hall_no)
            .map(Counter::new)
            .ok_or_else(|| CinemaError::HallNotFound(hall_no.to_string()))
    }
}
