use alloc::string::String;

/// Errors from PBM/PGM/PPM decoding, encoding, and transforms.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum PnmError {
    #[cfg(feature = "std")]
    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid magic number: {0}")]
    InvalidMagicNumber(String),

    #[error("malformed dimensions: {0}")]
    MalformedDimensions(String),

    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),

    #[error("malformed max value: {0}")]
    MalformedMaxValue(String),

    #[error("truncated payload: need {needed} samples or bytes, got {actual}")]
    TruncatedPayload { needed: usize, actual: usize },

    #[error("invalid sample value: {0}")]
    InvalidSampleValue(String),

    #[error("invalid state: {0}")]
    InvalidState(String),

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("pixel ({row}, {col}) is outside the image")]
    OutOfBounds { row: usize, col: usize },
}
