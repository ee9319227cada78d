use std::io::{self, Write};

use crate::services::Counter;

// 3: Book Ticket
pub fn book_ticket<W: Write>(
    counter: &mut Counter<'_>,
    show_id: &str,
    seat: &str,
    out: &mut W,
) -> io::Result<()> {
    match counter.book_ticket(show_id, seat) {
        Ok(label) => writeln!(out, "Ticket booked for show ID '{show_id}', seat {label}."),
        Err(e) => writeln!(out, "Error: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Hall;

    fn book(hall: &mut Hall, show_id: &str, seat: &str) -> String {
        let mut counter = Counter::new(hall);
        let mut out = Vec::new();
        book_ticket(&mut counter, show_id, seat, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn renders_success_and_every_rejection() {
        let mut hall = Hall::new(2, 2, "H1");
        hall.add_show("S1", "M", "7PM").unwrap();

        assert_eq!(book(&mut hall, "S1", " 1-2 "), "Ticket booked for show ID 'S1', seat 1-2.\n");
        assert_eq!(book(&mut hall, "S1", "1-2"), "Error: Seat 1-2 is already booked.\n");
        assert_eq!(book(&mut hall, "S9", "1-2"), "Error: No show found with ID 'S9'.\n");
        assert_eq!(
            book(&mut hall, "S1", "3-1"),
            "Error: Invalid seat number. Please provide a seat in 'row-col' format within hall dimensions.\n"
        );
        assert_eq!(
            book(&mut hall, "S1", "1,2"),
            "Error: Invalid seat format. Please use 'row-col' format (e.g., '1-2').\n"
        );
    }
}
