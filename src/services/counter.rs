use tracing::{debug, info};

use crate::error::CinemaError;
use crate::models::{Hall, SeatLabel, Show};

/// Booking front-end for a single hall. Goes through the hall's public
/// operations only; the hall decides what a booking means.
pub struct Counter<'a> {
    hall: &'a mut Hall,
}

impl<'a> Counter<'a> {
    pub fn new(hall: &'a mut Hall) -> Self {
        Self { hall }
    }

    pub fn hall_no(&self) -> &str {
        self.hall.hall_no()
    }

    pub fn view_shows(&self) -> &[Show] {
        self.hall.list_shows()
    }

    pub fn view_available_seats(&self, show_id: &str) -> Result<Vec<Vec<SeatLabel>>, CinemaError> {
        self.hall.available_seats(show_id)
    }

    pub fn book_ticket(&mut self, show_id: &str, seat: &str) -> Result<SeatLabel, CinemaError> {
        match self.hall.book_seat(show_id, seat) {
            Ok(label) => {
                info!(hall = %self.hall.hall_no(), show_id, seat = %label, "ticket booked");
                Ok(label)
            }
            Err(e) => {
                debug!(hall = %self.hall.hall_no(), show_id, seat, error = %e, "booking rejected");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SeatStatus;

    #[test]
    fn counter_passes_through_to_hall() {
        let mut hall = Hall::new(2, 3, "Hall 7");
        hall.add_show("101", "Movie A", "7:00 PM").unwrap();

        let counter = Counter::new(&mut hall);
        assert_eq!(counter.hall_no(), "Hall 7");
        assert_eq!(counter.view_shows(), &[Show::new("101", "Movie A", "7:00 PM")]);
        assert_eq!(counter.view_available_seats("101").unwrap()[1].len(), 3);
    }

    #[test]
    fn booking_through_counter_mutates_hall() {
        let mut hall = Hall::new(2, 2, "H1");
        hall.add_show("S1", "M", "7PM").unwrap();

        {
            let mut counter = Counter::new(&mut hall);
            assert_eq!(counter.book_ticket("S1", "2-1"), Ok(SeatLabel::new(2, 1)));
            assert_eq!(
                counter.book_ticket("S2", "2-1"),
                Err(CinemaError::ShowNotFound("S2".to_string()))
            );
        }

        assert_eq!(hall.seat_status("S1", SeatLabel::new(2, 1)), Some(SeatStatus::Booked));
    }
}
