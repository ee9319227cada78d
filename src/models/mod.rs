pub mod hall;
pub mod seat;
pub mod show;

pub use hall::Hall;
pub use seat::{SeatGrid, SeatLabel, SeatStatus};
pub use show::Show;
