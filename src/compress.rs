//! Grid compression into length-prefixed records.
//!
//! Each normalized grid becomes one record in the bank:
//!
//! ```text
//! Record layout:
//!   0x00: compressed length n (u8)
//!   0x01: n bytes of raw DEFLATE data (no zlib/gzip container)
//! ```
//!
//! The runtime inflates each record back into the 256-byte tile grid. The
//! 1-byte length prefix is a format constraint of the consuming runtime,
//! which caps any record's compressed payload at 255 bytes. That bound is
//! enforced at [`CompressedRecord::new`]; a grid that compresses past it is
//! a hard failure, never a wrapped length byte.

use std::io::Write;

use flate2::write::DeflateEncoder;
use flate2::Compression;

use crate::error::ConvertError;
use crate::level::GRID_TILES;
use crate::tile::encode_tile;

/// Largest compressed payload the 1-byte length prefix can describe.
pub const MAX_RECORD_PAYLOAD: usize = 255;

/// One length-prefixed compressed tile grid.
///
/// Invariant: the payload is at most [`MAX_RECORD_PAYLOAD`] bytes, so the
/// length prefix always equals the payload length exactly.
#[derive(Debug, Clone)]
pub struct CompressedRecord {
    payload: Vec<u8>,
}

impl CompressedRecord {
    /// Wrap a compressed payload, rejecting anything the length prefix
    /// cannot represent.
    pub fn new(payload: Vec<u8>) -> Result<Self, ConvertError> {
        if payload.len() > MAX_RECORD_PAYLOAD {
            return Err(ConvertError::RecordTooLarge(payload.len()));
        }
        Ok(Self { payload })
    }

    /// Compressed payload length (the value of the length prefix).
    pub fn compressed_len(&self) -> u8 {
        self.payload.len() as u8
    }

    /// Total bytes this record occupies in the bank (prefix + payload).
    pub fn total_len(&self) -> usize {
        1 + self.payload.len()
    }

    /// Compressed payload bytes, without the length prefix.
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Append the record (length prefix, then payload) to `out`.
    pub fn write_to(&self, out: &mut Vec<u8>) {
        out.push(self.compressed_len());
        out.extend_from_slice(&self.payload);
    }
}

/// Encode a normalized 256-character grid to tile bytes and compress it.
///
/// Fails with `MalformedLevelSize` if the grid is not exactly 256 tiles
/// (a normalizer bug or an over-wide source row) and with
/// `UnrecognizedTile` on any character outside the tile alphabet.
pub fn compress_grid(grid: &str) -> Result<CompressedRecord, ConvertError> {
    let tile_count = grid.chars().count();
    if tile_count != GRID_TILES {
        return Err(ConvertError::MalformedLevelSize { actual: tile_count });
    }

    let mut tiles = Vec::with_capacity(GRID_TILES);
    for c in grid.chars() {
        tiles.push(encode_tile(c)?);
    }

    let mut encoder = DeflateEncoder::new(Vec::with_capacity(64), Compression::default());
    encoder.write_all(&tiles)?;
    let payload = encoder.finish()?;

    tracing::debug!("{} -> {}", tiles.len(), payload.len());

    CompressedRecord::new(payload)
}
