//! gamut - CIELAB gamut volume and coverage analysis
//!
//! Builds gamut boundary surfaces from colorimetric measurement files or
//! primaries descriptors and reports volumes and mutual coverage.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "gamut")]
#[command(author, version, about = "CIELAB gamut volume and coverage analysis")]
#[command(long_about = "
Builds triangulated gamut boundary surfaces in CIELAB from per-patch
colorimetric measurements or from 8-primary reference descriptors.

Measurement files are whitespace-separated rows:
  flag Rdev Gdev Bdev X Y Z

Files ending in .json are read as primaries descriptors; 'rec2020' names
the bundled Rec.2020 reference.

Examples:
  gamut info printer.txt                 # Sample and mesh statistics
  gamut volume printer.txt               # Enclosed CIELAB volume
  gamut compare rec2020 printer.txt      # Coverage of a reference
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show data set and boundary mesh statistics
    #[command(visible_alias = "i")]
    Info(commands::info::InfoArgs),

    /// Compute the enclosed CIELAB volume of a gamut
    #[command(visible_alias = "v")]
    Volume(commands::volume::VolumeArgs),

    /// Compare a test gamut against a reference gamut
    #[command(visible_alias = "c")]
    Compare(commands::compare::CompareArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if cli.verbose { "debug" } else { "info" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Info(args) => commands::info::run(args),
        Commands::Volume(args) => commands::volume::run(args),
        Commands::Compare(args) => commands::compare::run(args),
    }
}
