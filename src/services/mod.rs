pub mod cinema;
pub mod counter;

pub use cinema::Cinema;
pub use counter::Counter;
