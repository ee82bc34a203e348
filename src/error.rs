use thiserror::Error;

/// Reasons an encoded grid description is rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("input must contain at least {min} bytes, got {len}")]
    TooShort { len: usize, min: usize },
    #[error("input must contain an odd number of bytes, got {len}")]
    EvenLength { len: usize },
}

/// Failure of a call through the byte interface. Nothing is written to the output when a call
/// fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] DecodeError),
    #[error("input of {len} bytes does not fit the {capacity} byte input buffer")]
    InputTooLarge { len: usize, capacity: usize },
    #[error("path needs {needed} bytes but the output buffer holds {capacity}")]
    OutputTooSmall { needed: usize, capacity: usize },
}
