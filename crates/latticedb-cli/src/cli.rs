use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "latticedb",
    about = "Build and query LatticeDB path stores",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable informational logs on stderr
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress all logs
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to config file (defaults to ./latticedb.toml when present)
    #[arg(long, global = true, env = "LATTICEDB_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Build the index and data files for every coordinate of the grid
    Build,

    /// Edge-use probabilities for paths ending at a coordinate
    Edges { x: u32, y: u32 },

    /// Number of monotone paths from the origin to a coordinate
    Paths { x: u32, y: u32 },

    /// Chance that a path to (X2, Y2) passes through (X1, Y1)
    Chance { x1: u32, y1: u32, x2: u32, y2: u32 },

    /// Path count and edge probabilities in one lookup
    Info { x: u32, y: u32 },

    /// Sizes of the store on disk
    Report,
}
