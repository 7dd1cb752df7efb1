//! Error type shared by the projection engine and the loaders

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PayoffError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Payoff date overflows the calendar after {months} months")]
    DateOverflow { months: u32 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PayoffError>;
