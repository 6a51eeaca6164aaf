use thiserror::Error;

/// Result type for every validating stage of the link.
pub type LinkResult<T> = Result<T, LinkError>;

/// Validation failures raised by the link stages.
///
/// None of these are transient: they describe malformed input and are
/// returned immediately, without partial output.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LinkError {
    #[error("invalid bit value {value} at position {position} (expected 0 or 1)")]
    InvalidBit { position: usize, value: u8 },

    #[error("{scheme} needs an even number of bits, got {len}")]
    OddLength { scheme: &'static str, len: usize },

    #[error("length mismatch: transmitted {tx} bits, received {rx} bits")]
    LengthMismatch { tx: usize, rx: usize },

    #[error("length {len} is not a multiple of {multiple}")]
    InvalidLength { len: usize, multiple: usize },

    #[error("character {ch:?} at position {position} does not fit in 8 bits")]
    UnsupportedCharacter { position: usize, ch: char },

    #[error("bit error rate is undefined for an empty sequence")]
    EmptySequence,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
