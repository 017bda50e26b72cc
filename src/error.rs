//! Error taxonomy for the conversion pipeline.
//!
//! Everything here is fatal: the converter builds both output buffers fully
//! in memory and writes nothing to disk unless the whole run succeeds, so a
//! fatal error never leaves a partial bank or index file behind. Bank
//! truncation is deliberately NOT an error (see `bank`): it completes the
//! run and is surfaced as a warning instead.

/// Error type for the level conversion pipeline.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// A level row contained a character outside the tile alphabet.
    #[error("unrecognized tile character {0:?}")]
    UnrecognizedTile(char),

    /// A normalized grid was not exactly 256 tiles. Signals a normalizer
    /// bug (or an over-wide source row), not bad user data.
    #[error("normalized level has {actual} tiles, expected 256")]
    MalformedLevelSize { actual: usize },

    /// A password contained a character outside the control-code alphabet.
    #[error("invalid password character {0:?}, expected one of \"lrudabcs\"")]
    InvalidPasswordChar(char),

    /// A compressed grid does not fit the record's 1-byte length prefix.
    #[error("level compressed to {0} bytes, too large for the 1-byte record length")]
    RecordTooLarge(usize),

    /// More password entries than the index's 1-byte count can hold.
    #[error("{0} password entries exceed the 1-byte index entry count")]
    TooManyPasswords(usize),

    /// A password entry referenced a level that is not in the bank.
    /// Signals a caller bug: entries must be rebuilt against the packed
    /// (possibly truncated) level sequence.
    #[error("password on level {level_index} is outside the {level_count} packed levels")]
    PasswordLevelOutOfRange {
        level_index: usize,
        level_count: usize,
    },

    /// The deflate encoder's writer failed.
    #[error("deflate failed: {0}")]
    Deflate(#[from] std::io::Error),
}
