//! sokopack - Sokoban level bank packer
//!
//! Converts a TOML level-set document into the runtime's compressed level
//! bank plus the password jump index consumed by the password screen.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use sokopack::{convert_levels, LevelSetDocument};

#[derive(Parser)]
#[command(name = "sokopack")]
#[command(about = "Packs Sokoban levels into a compressed level bank")]
#[command(version)]
struct Cli {
    /// Input level set document (TOML)
    input: PathBuf,

    /// Output level bank file
    bank: PathBuf,

    /// Output password jump index file
    passwords: PathBuf,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    let document = LevelSetDocument::load(&cli.input)?;
    let levels = document.flatten_and_filter();

    // Both buffers are built before anything touches disk, so a conversion
    // failure writes no partial output.
    let output = convert_levels(&levels)?;

    std::fs::write(&cli.bank, &output.bank)
        .with_context(|| format!("Failed to write level bank: {}", cli.bank.display()))?;
    tracing::info!(
        "wrote {} levels ({} bytes) to {}",
        output.levels_written,
        output.bank.len(),
        cli.bank.display()
    );
    if output.levels_dropped > 0 {
        tracing::warn!(
            "{} levels did not fit the bank and were dropped",
            output.levels_dropped
        );
    }

    std::fs::write(&cli.passwords, &output.password_index).with_context(|| {
        format!(
            "Failed to write password index: {}",
            cli.passwords.display()
        )
    })?;
    tracing::info!(
        "wrote {} password jump entries ({} bytes) to {}",
        output.password_entries,
        output.password_index.len(),
        cli.passwords.display()
    );

    Ok(())
}
