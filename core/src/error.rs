use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board dimensions must be positive")]
    InvalidDimensions,
    #[error("Too many bombs, at least one cell must stay safe")]
    TooManyBombs,
    #[error("Coordinates out of bounds")]
    OutOfBounds,
}

impl GameError {
    /// Whether the error was raised while validating a board configuration.
    pub const fn is_configuration(self) -> bool {
        matches!(self, Self::InvalidDimensions | Self::TooManyBombs)
    }
}

pub type Result<T> = core::result::Result<T, GameError>;
