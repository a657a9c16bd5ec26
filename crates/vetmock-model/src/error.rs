use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("identifier must not be empty (got {0:?})")]
    EmptyId(String),
    #[error("invalid date {0:?}: expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("invalid time slot {0:?}: expected HH:MM")]
    InvalidTime(String),
    #[error("unknown appointment status: {0}")]
    InvalidStatus(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
