use thiserror::Error;

pub type ScaleResult<T> = Result<T, ScaleError>;

#[derive(Debug, Error, PartialEq)]
pub enum ScaleError {
    #[error("degenerate domain: start={start}, end={end}")]
    DegenerateDomain { start: f64, end: f64 },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
