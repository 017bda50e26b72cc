//! Tile-code table for the runtime's fixed tileset.
//!
//! Level rows are plain text in the common Sokoban notation (`#` wall,
//! `.` goal, `$` barrel, `@` player, with the usual on-goal aliases).
//! The runtime indexes a fixed tileset, so each character maps to exactly
//! one tile code. This table is the single validation point for grid
//! content: every character of every normalized grid passes through
//! [`encode_tile`], and anything outside the alphabet aborts the run.

use crate::error::ConvertError;

// =============================================================================
// Tile codes
// =============================================================================

/// Open floor (also used for all padding).
pub const TILE_FLOOR: u8 = 0;
/// Goal square.
pub const TILE_GOAL: u8 = 16;
/// Player standing on a goal square.
pub const TILE_PLAYER_ON_GOAL: u8 = 24;
/// Player start position.
pub const TILE_PLAYER: u8 = 32;
/// Wall.
pub const TILE_WALL: u8 = 166;
/// Barrel (box).
pub const TILE_BARREL: u8 = 252;
/// Barrel resting on a goal square.
pub const TILE_BARREL_ON_GOAL: u8 = 253;

/// Digit glyphs `0`..`9`. Digits 0-7 sit in one tileset row (168..=175);
/// 8 and 9 continue on the next row (184, 185).
pub const GLYPH_DIGITS: [u8; 10] = [168, 169, 170, 171, 172, 173, 174, 175, 184, 185];

/// UI-action glyphs drawn in the footer row (arrows, buttons, start).
pub const GLYPH_LEFT: u8 = 200;
pub const GLYPH_RIGHT: u8 = 201;
pub const GLYPH_UP: u8 = 202;
pub const GLYPH_DOWN: u8 = 203;
pub const GLYPH_A: u8 = 204;
pub const GLYPH_B: u8 = 205;
pub const GLYPH_C: u8 = 206;
pub const GLYPH_START: u8 = 207;

/// Map one level character to its tile code.
///
/// Total over the closed tile alphabet; any other character fails with
/// [`ConvertError::UnrecognizedTile`]. Nothing is ever silently dropped or
/// defaulted.
pub fn encode_tile(c: char) -> Result<u8, ConvertError> {
    let code = match c {
        ' ' => TILE_FLOOR,
        '#' => TILE_WALL,
        '.' => TILE_GOAL,
        '$' => TILE_BARREL,
        'B' | '*' => TILE_BARREL_ON_GOAL,
        '@' | 'p' => TILE_PLAYER,
        'P' | '+' => TILE_PLAYER_ON_GOAL,
        '0'..='9' => GLYPH_DIGITS[c as usize - '0' as usize],
        'l' => GLYPH_LEFT,
        'r' => GLYPH_RIGHT,
        'u' => GLYPH_UP,
        'd' => GLYPH_DOWN,
        'a' => GLYPH_A,
        'b' => GLYPH_B,
        'c' => GLYPH_C,
        's' => GLYPH_START,
        other => return Err(ConvertError::UnrecognizedTile(other)),
    };
    Ok(code)
}
