use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error, PartialEq)]
pub enum ChartError {
    /// `max == min` leaves no span to normalize values against.
    #[error("degenerate value range: min={min}, max={max}")]
    DegenerateRange { min: f64, max: f64 },

    #[error("invalid value range: min={min} is greater than max={max}")]
    InvalidRange { min: f64, max: f64 },

    #[error("invalid drawable bounds: width={width}, height={height}")]
    InvalidBounds { width: f64, height: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("serialization failed: {0}")]
    Serialization(String),
}
