//! Level-set document parsing.
//!
//! Level sets are TOML documents of `[[collection]]` groups, each holding
//! `[[collection.level]]` entries:
//!
//! ```toml
//! [[collection]]
//! name = "Microban"
//!
//! [[collection.level]]
//! width = 5
//! height = 3
//! password = "lrud"
//! rows = ['#####', '#@$.#', '#####']
//! ```
//!
//! Parsing stays outside the conversion core: this module only turns the
//! document into [`LevelRecord`]s and applies the size filter. Levels wider
//! than 16 or taller than 14 tiles cannot be centered into the grid and are
//! dropped here, which shifts the 0-based indices of everything after them.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::level::{LevelRecord, MAX_LEVEL_HEIGHT, MAX_LEVEL_WIDTH};

/// Root of a level-set document.
#[derive(Debug, Deserialize)]
pub struct LevelSetDocument {
    #[serde(default, rename = "collection")]
    pub collections: Vec<CollectionSection>,
}

/// One `[[collection]]` group.
#[derive(Debug, Deserialize)]
pub struct CollectionSection {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "level")]
    pub levels: Vec<LevelEntry>,
}

/// One `[[collection.level]]` entry.
#[derive(Debug, Deserialize)]
pub struct LevelEntry {
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub password: Option<String>,
    pub rows: Vec<String>,
}

impl LevelSetDocument {
    /// Load a document from file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read level set: {}", path.display()))?;
        Self::parse(&content)
    }

    /// Parse a document from string.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse level set document")
    }

    /// Flatten all collections into one ordered level sequence, dropping
    /// levels that cannot fit the grid. Indices used for level numbers and
    /// password entries are positions in the returned sequence.
    pub fn flatten_and_filter(&self) -> Vec<LevelRecord> {
        let mut levels = Vec::new();
        let mut dropped = 0usize;

        for collection in &self.collections {
            for entry in &collection.levels {
                if entry.width as usize > MAX_LEVEL_WIDTH
                    || entry.height as usize > MAX_LEVEL_HEIGHT
                {
                    tracing::debug!(
                        "skipping {}x{} level in {:?} (larger than {}x{})",
                        entry.width,
                        entry.height,
                        collection.name.as_deref().unwrap_or("unnamed collection"),
                        MAX_LEVEL_WIDTH,
                        MAX_LEVEL_HEIGHT,
                    );
                    dropped += 1;
                    continue;
                }
                levels.push(LevelRecord {
                    width: entry.width,
                    height: entry.height,
                    rows: entry.rows.clone(),
                    password: entry.password.clone(),
                });
            }
        }

        if dropped > 0 {
            tracing::info!("skipped {} levels larger than the 16x14 playfield", dropped);
        }

        levels
    }
}
