//! `gamut info` - data set and mesh statistics.

use anyhow::Result;
use clap::Args;

use super::{build_mesh, load_gamut};

#[derive(Args)]
pub struct InfoArgs {
    /// Measurement file, primaries descriptor (.json), or 'rec2020'
    pub source: String,
}

pub fn run(args: InfoArgs) -> Result<()> {
    let gamut = load_gamut(&args.source)?;
    let mesh = build_mesh(&gamut)?;

    println!("name:      {}", gamut.name());
    println!("vertices:  {}", mesh.mesh().vertex_count());
    println!("triangles: {}", mesh.mesh().topology().len());
    println!("volume:    {:.1} Lab^3", mesh.volume());
    Ok(())
}
