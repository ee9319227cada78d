//! Property tests for seat grids of arbitrary size.

use cinema_booking::error::CinemaError;
use cinema_booking::models::{Hall, SeatStatus, SeatLabel};
use proptest::prelude::*;

fn hall_with_show(rows: usize, cols: usize) -> Hall {
    let mut hall = Hall::new(rows, cols, "P");
    hall.add_show("S", "Movie", "7PM").unwrap();
    hall
}

proptest! {
    #[test]
    fn new_show_has_rows_by_cols_free_seats(rows in 1usize..20, cols in 1usize..20) {
        let hall = hall_with_show(rows, cols);
        let free = hall.available_seats("S").unwrap();

        prop_assert_eq!(free.len(), rows);
        for (r, row) in free.iter().enumerate() {
            prop_assert_eq!(row.len(), cols);
            for (c, label) in row.iter().enumerate() {
                prop_assert_eq!(*label, SeatLabel::new(r + 1, c + 1));
            }
        }
    }

    #[test]
    fn second_booking_is_rejected_and_changes_nothing(
        (rows, cols, row, col) in (1usize..15, 1usize..15)
            .prop_flat_map(|(r, c)| (Just(r), Just(c), 1..=r, 1..=c))
    ) {
        let mut hall = hall_with_show(rows, cols);
        let seat = format!("{row}-{col}");

        prop_assert_eq!(hall.book_seat("S", &seat), Ok(SeatLabel::new(row, col)));
        prop_assert_eq!(hall.seat_status("S", SeatLabel::new(row, col)), Some(SeatStatus::Booked));

        let before = hall.available_seats("S").unwrap();
        prop_assert_eq!(hall.book_seat("S", &seat), Err(CinemaError::AlreadyBooked(seat.clone())));
        prop_assert_eq!(hall.available_seats("S").unwrap(), before);

        let free: usize = hall.available_seats("S").unwrap().iter().map(Vec::len).sum();
        prop_assert_eq!(free, rows * cols - 1);
    }

    #[test]
    fn coordinates_outside_the_hall_are_out_of_bounds(
        rows in 1usize..10,
        cols in 1usize..10,
        row in 0usize..25,
        col in 0usize..25,
    ) {
        prop_assume!(row == 0 || col == 0 || row > rows || col > cols);
        let mut hall = hall_with_show(rows, cols);
        let seat = format!("{row}-{col}");

        prop_assert_eq!(hall.book_seat("S", &seat), Err(CinemaError::OutOfBounds(seat.clone())));
        let free: usize = hall.available_seats("S").unwrap().iter().map(Vec::len).sum();
        prop_assert_eq!(free, rows * cols);
    }

    #[test]
    fn text_without_a_single_dash_is_invalid_format(seat in "[0-9a-z,. ]{0,8}") {
        let mut hall = hall_with_show(3, 3);
        prop_assert_eq!(hall.book_seat("S", &seat), Err(CinemaError::InvalidFormat(seat.clone())));
    }
}
