use std::io::{self, BufRead, Write};
use std::str::FromStr;
use tracing::debug;

use super::{bookings, seats, shows, Console};
use crate::services::Counter;

pub const MENU: &str = "\nOptions:\n\
                        1: View all Shows Today\n\
                        2: View all Available Tickets\n\
                        3: Book Ticket\n\
                        4: Exit\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    ViewShows,
    ViewSeats,
    BookTicket,
    Exit,
}

impl FromStr for MenuOption {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(MenuOption::ViewShows),
            "2" => Ok(MenuOption::ViewSeats),
            "3" => Ok(MenuOption::BookTicket),
            "4" => Ok(MenuOption::Exit),
            _ => Err(()),
        }
    }
}

/// Runs the counter menu until the user exits or input runs out.
pub fn run<R: BufRead, W: Write>(
    counter: &mut Counter<'_>,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    loop {
        write!(console.out(), "{MENU}")?;
        let Some(choice) = console.prompt("Choose an option (1-4): ")? else {
            return Ok(());
        };

        let option = match choice.parse::<MenuOption>() {
            Ok(option) => option,
            Err(()) => {
                debug!(choice = %choice, "unknown menu option");
                writeln!(console.out(), "Invalid option. Please choose a valid option (1-4).")?;
                continue;
            }
        };

        match option {
            MenuOption::ViewShows => shows::view_shows(counter, console.out())?,
            MenuOption::ViewSeats => {
                let Some(show_id) = console.prompt("Enter show ID to view available seats: ")? else {
                    return Ok(());
                };
                seats::view_available_seats(counter, &show_id, console.out())?;
            }
            MenuOption::BookTicket => {
                let Some(show_id) = console.prompt("Enter show ID to book a ticket: ")? else {
                    return Ok(());
                };
                let Some(seat) =
                    console.prompt("Enter seat to book (format: row-col, e.g., '1-2'): ")?
                else {
                    return Ok(());
                };
                bookings::book_ticket(counter, &show_id, &seat, console.out())?;
            }
            MenuOption::Exit => {
                writeln!(console.out(), "Exiting the system. Thank you!")?;
                return Ok(());
            }
        }
    }
}
