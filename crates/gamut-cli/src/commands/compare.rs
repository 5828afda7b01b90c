//! `gamut compare` - coverage of a reference gamut by a test gamut.

use anyhow::Result;
use clap::Args;
use gamut_mesh::intersect;

use super::{build_mesh, load_gamut};

#[derive(Args)]
pub struct CompareArgs {
    /// Reference gamut (measurements, .json descriptor, or 'rec2020')
    pub reference: String,

    /// Test gamut (measurements, .json descriptor, or 'rec2020')
    pub test: String,
}

pub fn run(args: CompareArgs) -> Result<()> {
    let reference = load_gamut(&args.reference)?;
    let test = load_gamut(&args.test)?;

    let ref_mesh = build_mesh(&reference)?;
    let test_mesh = build_mesh(&test)?;
    let inter = intersect(ref_mesh.mesh(), test_mesh.mesh())?;
    let inter_volume = inter.volume();

    println!("reference:    {:>12.1} Lab^3  ({})", ref_mesh.volume(), reference.name());
    println!("test:         {:>12.1} Lab^3  ({})", test_mesh.volume(), test.name());
    println!("intersection: {:>12.1} Lab^3", inter_volume);
    println!(
        "coverage:     {:>11.1}% of reference",
        100.0 * inter_volume / ref_mesh.volume()
    );
    Ok(())
}
