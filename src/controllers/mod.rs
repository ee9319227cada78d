pub mod bookings;
pub mod console;
pub mod menu;
pub mod seats;
pub mod shows;

pub use console::Console;
pub use menu::{run, MenuOption};
