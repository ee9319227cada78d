use thiserror::Error;

// Ошибки домена: рендерятся в меню как есть, ни одна не фатальна
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CinemaError {
    #[error("No show found with ID '{0}'.")]
    ShowNotFound(String),

    #[error("Invalid seat format. Please use 'row-col' format (e.g., '1-2').")]
    InvalidFormat(String),

    #[error("Invalid seat number. Please provide a seat in 'row-col' format within hall dimensions.")]
    OutOfBounds(String),

    #[error("Seat {0} is already booked.")]
    AlreadyBooked(String),

    #[error("Show with ID '{0}' is already scheduled.")]
    DuplicateShow(String),

    #[error("Hall '{0}' is already registered.")]
    DuplicateHall(String),

    #[error("No hall found with number '{0}'.")]
    HallNotFound(String),
}

