//! Command-line interface for gridtac.

use clap::Parser;
use std::path::PathBuf;

/// Gridtac - configurable N-by-N tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "gridtac")]
#[command(about = "Configurable N-by-N tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Board side length (3-100)
    #[arg(short = 's', long, default_value = "3")]
    pub field_size: usize,

    /// Marks in a row needed to win (3 to the field size; defaults to the
    /// field size)
    #[arg(short, long)]
    pub win_length: Option<usize>,

    /// File the score records are kept in
    #[arg(long, default_value = "gridtac_scores.json")]
    pub scores: PathBuf,

    /// Load game settings from a TOML file instead of the flags above
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
