//! CLI subcommands.

pub mod compare;
pub mod info;
pub mod volume;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use gamut_core::{Gamut, LabMesh, PrimariesDescriptor, measurements};
use tracing::debug;

/// Loads a gamut from a source argument.
///
/// `rec2020` names the bundled reference descriptor; paths ending in
/// `.json` are primaries descriptors; everything else is measurement
/// text.
pub fn load_gamut(source: &str) -> Result<Gamut> {
    if source == "rec2020" {
        let desc = PrimariesDescriptor::rec2020()?;
        return Ok(Gamut::from_primaries(&desc, "rec2020")?);
    }

    let path = Path::new(source);
    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| source.to_string());
    let text = fs::read_to_string(path).with_context(|| format!("reading {source}"))?;

    if path.extension().is_some_and(|e| e == "json") {
        let desc = PrimariesDescriptor::from_json(&text)?;
        debug!(
            grey_levels = desc.grey_levels.len(),
            gamma = desc.gamma,
            "synthesizing gamut from primaries"
        );
        Ok(Gamut::from_primaries(&desc, name)?)
    } else {
        let samples: Vec<_> = measurements(&text).collect();
        debug!(samples = samples.len(), "parsed measurement rows");
        Ok(Gamut::from_measurements(samples, name)?)
    }
}

/// Builds the CIELAB boundary mesh for a loaded gamut.
pub fn build_mesh(gamut: &Gamut) -> Result<LabMesh> {
    let mesh = LabMesh::from_gamut(gamut)?;
    debug!(
        vertices = mesh.mesh().vertex_count(),
        triangles = mesh.mesh().topology().len(),
        volume = mesh.volume(),
        "built CIELAB boundary"
    );
    Ok(mesh)
}
