use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A player coordinate was not set (or not yet positive) when a frame was decoded.
    #[error("player {field} must be positive before decoding, got {value}")]
    PositionUninitialized { field: &'static str, value: i32 },

    /// The memory snapshot does not cover the full working RAM.
    #[error("memory snapshot expected at least {expected} bytes, got {actual}")]
    MemoryTooShort { expected: usize, actual: usize },
}
