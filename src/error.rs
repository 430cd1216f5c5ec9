use thiserror::Error;

/// Errors caused by invalid caller-supplied input.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    #[error("text contains the reserved sentinel byte '$' at offset {offset}")]
    SentinelInText { offset: usize },

    #[error("empty patterns cannot be searched")]
    EmptyPattern,
}

/// Violations of internal index invariants.
///
/// Encountering one of these means the index is corrupted. Rebuilding the
/// index is the only recovery, retrying the query reproduces the error.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum IndexError {
    #[error("rank queried at limit {limit}, but the transform has length {len}")]
    RankLimitOutOfBounds { limit: usize, len: usize },

    #[error("row {row} did not reach a sampled suffix within {bound} LF steps")]
    LfChainTooLong { row: usize, bound: usize },
}

/// Any error this crate can produce.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Index(#[from] IndexError),
}
