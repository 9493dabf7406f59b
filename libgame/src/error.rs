use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum GameError {
    #[error("invalid board size {size}: must be at least 1")]
    InvalidArgument { size: usize },

    #[error("seed probability {0} must be between 0.0 and 1.0")]
    InvalidProbability(f64),
}
