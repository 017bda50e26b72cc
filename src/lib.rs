//! sokopack library
//!
//! Packs Sokoban-style level sets into a fixed-capacity compressed level
//! bank plus a password jump index, both consumed by a resource-constrained
//! game runtime.
//!
//! Pipeline, per level: center the level into a 16×16 character grid with
//! its level number injected ([`level`]), encode characters to tile codes
//! and raw-DEFLATE the grid into a length-prefixed record ([`tile`],
//! [`compress`]), then pack records in order into the 16 KiB bank
//! ([`bank`]) and derive password jump offsets from the packed record
//! sizes ([`password`]).

pub mod bank;
pub mod compress;
pub mod document;
pub mod error;
pub mod level;
pub mod password;
pub mod tile;

pub use bank::{pack_bank, PackedBank, BANK_CAPACITY};
pub use compress::{compress_grid, CompressedRecord, MAX_RECORD_PAYLOAD};
pub use document::LevelSetDocument;
pub use error::ConvertError;
pub use level::{normalize_level, LevelRecord, GRID_TILES, MAX_LEVEL_HEIGHT, MAX_LEVEL_WIDTH};
pub use password::{build_password_index, PasswordEntry};
pub use tile::encode_tile;

/// Both output buffers plus run statistics.
#[derive(Debug)]
pub struct ConvertOutput {
    /// The packed level bank.
    pub bank: Vec<u8>,
    /// The serialized password jump index.
    pub password_index: Vec<u8>,
    /// Levels written to the bank.
    pub levels_written: usize,
    /// Trailing levels dropped because the bank was full.
    pub levels_dropped: usize,
    /// Entries in the password index.
    pub password_entries: usize,
}

/// Run the whole conversion over an ordered, size-filtered level sequence.
///
/// Purely in-memory: callers decide whether and where to persist the
/// buffers, so a failure here never leaves partial output behind. Levels
/// are processed independently in input order; record order (and therefore
/// every jump offset) matches the input exactly.
pub fn convert_levels(levels: &[LevelRecord]) -> Result<ConvertOutput, ConvertError> {
    let mut records = Vec::with_capacity(levels.len());
    for (index, level) in levels.iter().enumerate() {
        let grid = normalize_level(level, index);
        records.push(compress_grid(&grid)?);
    }

    let packed = pack_bank(&records, BANK_CAPACITY);

    // Passwords may only reference records actually present in the bank;
    // anything past the truncation point is dropped from the index.
    let mut passwords = Vec::new();
    for (index, level) in levels.iter().take(packed.level_count()).enumerate() {
        if let Some(password) = &level.password {
            passwords.push(PasswordEntry {
                level_index: index,
                password: password.clone(),
            });
        }
    }
    let dropped_passwords = levels
        .iter()
        .skip(packed.level_count())
        .filter(|level| level.password.is_some())
        .count();
    if dropped_passwords > 0 {
        tracing::warn!(
            "dropping {} password entries for levels that did not fit the bank",
            dropped_passwords
        );
    }

    let password_index = build_password_index(&passwords, &packed.record_sizes)?;

    let levels_written = packed.level_count();
    let levels_dropped = packed.dropped;
    Ok(ConvertOutput {
        bank: packed.bytes,
        password_index,
        levels_written,
        levels_dropped,
        password_entries: passwords.len(),
    })
}
