//! `gamut volume` - enclosed CIELAB volume of one gamut.

use anyhow::Result;
use clap::Args;

use super::{build_mesh, load_gamut};

#[derive(Args)]
pub struct VolumeArgs {
    /// Measurement file, primaries descriptor (.json), or 'rec2020'
    pub source: String,
}

pub fn run(args: VolumeArgs) -> Result<()> {
    let gamut = load_gamut(&args.source)?;
    let mesh = build_mesh(&gamut)?;
    println!("{:.1}", mesh.volume());
    Ok(())
}
