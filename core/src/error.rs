use core::fmt;

/// Error type for packing and emitting operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The grid's sample buffer does not hold `width * height` samples.
    DimensionMismatch {
        width: usize,
        height: usize,
        samples: usize,
    },
    ThresholdOutOfRange(u32),
    InvalidThreshold,
    InvalidName,
    UnknownFormat,
    Format,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DimensionMismatch {
                width,
                height,
                samples,
            } => write!(f, "grid is {width}x{height} but holds {samples} samples"),
            Error::ThresholdOutOfRange(value) => {
                write!(f, "threshold {value} is outside 0..=255")
            }
            Error::InvalidThreshold => f.write_str("threshold is not a number"),
            Error::InvalidName => f.write_str("symbol name is not a valid C identifier"),
            Error::UnknownFormat => f.write_str("unknown output format (expected lvgl or rust)"),
            Error::Format => f.write_str("failed to format output"),
        }
    }
}

impl From<fmt::Error> for Error {
    fn from(_: fmt::Error) -> Self {
        Error::Format
    }
}

impl core::error::Error for Error {}

pub type Result<T> = core::result::Result<T, Error>;
