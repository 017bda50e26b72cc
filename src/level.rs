//! Level normalization: variable-size levels into fixed 16×16 grids.
//!
//! The runtime renders every level from a 256-tile grid, so levels smaller
//! than 16×16 are centered with floor padding. The last grid row is a
//! reserved footer the level author fills with UI-action glyphs in the
//! source rows themselves; the decimal level number is injected immediately
//! before that footer so the runtime can display it without any side table.
//!
//! ```text
//! Normalized grid (row-major, 256 characters):
//!   rows  0..top_pad          blank (floor)
//!   rows  top_pad..+height    source rows, left-padded to center
//!   rows  ..15                blank (floor)
//!   tiles 240-len..240        ASCII digits of level_number (injected)
//!   tiles 240..256            footer, never touched
//! ```

/// Grid width in tiles.
pub const GRID_WIDTH: usize = 16;
/// Grid height in tiles.
pub const GRID_HEIGHT: usize = 16;
/// Total tiles per normalized grid.
pub const GRID_TILES: usize = GRID_WIDTH * GRID_HEIGHT;
/// Tiles reserved at the end of the grid for UI-action glyphs.
pub const FOOTER_TILES: usize = 16;

/// Widest level the grid can hold.
pub const MAX_LEVEL_WIDTH: usize = 16;
/// Tallest level the grid can hold. Two rows shorter than the grid so the
/// footer row always comes from padding, never from level geometry.
pub const MAX_LEVEL_HEIGHT: usize = 14;

/// One level as read from the input document.
///
/// Source of truth for the pipeline; the converter only reads it. `rows`
/// holds `height` strings of up to `width` characters each.
#[derive(Debug, Clone)]
pub struct LevelRecord {
    pub width: u32,
    pub height: u32,
    pub rows: Vec<String>,
    pub password: Option<String>,
}

/// Center a level into a 256-character row-major grid and inject the
/// decimal digits of `level_index + 1` before the footer.
///
/// Precondition: the caller has already filtered out levels wider than
/// [`MAX_LEVEL_WIDTH`] or taller than [`MAX_LEVEL_HEIGHT`]. Nothing is
/// truncated or invented here: all source rows are emitted, and padding is
/// derived from the declared size, so an over-wide row or a row count that
/// disagrees with `height` yields a grid of the wrong length and surfaces
/// as `MalformedLevelSize` when the grid is compressed.
pub fn normalize_level(level: &LevelRecord, level_index: usize) -> String {
    let width = level.width as usize;
    let height = level.height as usize;
    debug_assert!(width <= MAX_LEVEL_WIDTH);
    debug_assert!(height <= MAX_LEVEL_HEIGHT);

    let left_pad = GRID_WIDTH.saturating_sub(width) / 2;
    let top_pad = GRID_HEIGHT.saturating_sub(height) / 2;
    let bottom_pad = GRID_HEIGHT.saturating_sub(height + top_pad);

    let mut grid: Vec<char> = Vec::with_capacity(GRID_TILES);

    for _ in 0..top_pad * GRID_WIDTH {
        grid.push(' ');
    }
    for row in &level.rows {
        let mut tiles = 0;
        for _ in 0..left_pad {
            grid.push(' ');
            tiles += 1;
        }
        for c in row.chars() {
            grid.push(c);
            tiles += 1;
        }
        while tiles < GRID_WIDTH {
            grid.push(' ');
            tiles += 1;
        }
    }
    for _ in 0..bottom_pad * GRID_WIDTH {
        grid.push(' ');
    }

    write_level_number(&mut grid, level_index + 1);
    grid.into_iter().collect()
}

/// Overwrite the tiles immediately before the footer with the decimal
/// digits of `number`. Positions are taken relative to the end of the
/// grid; everything before the digits and the footer itself are untouched.
fn write_level_number(grid: &mut [char], number: usize) {
    let digits: Vec<char> = number.to_string().chars().collect();
    let end = grid.len() - FOOTER_TILES;
    let start = end - digits.len();
    grid[start..end].copy_from_slice(&digits);
}
