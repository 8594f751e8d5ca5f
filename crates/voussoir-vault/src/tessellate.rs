//! Barrel vault to voussoir tessellation.

use tracing::debug;
use voussoir_math::{Frame, Point3, Transform, Vec3};

use crate::arch::ArchGeometry;
use crate::block::{Bounds, Voussoir};
use crate::course::{course_plan, Placement};
use crate::error::{Result, VaultError};
use crate::params::VaultParameters;

/// The blocks of a vault with one reference frame per block.
///
/// `voussoirs[i]` and `frames[i]` describe the same block.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vault {
    /// Block meshes in emission order.
    pub voussoirs: Vec<Voussoir>,
    /// Reference frame of each block.
    pub frames: Vec<Frame>,
}

impl Vault {
    /// Number of blocks.
    pub fn len(&self) -> usize {
        self.voussoirs.len()
    }

    /// True when the vault has no blocks.
    pub fn is_empty(&self) -> bool {
        self.voussoirs.is_empty()
    }

    /// Blocks paired with their frames.
    pub fn iter(&self) -> impl Iterator<Item = (&Voussoir, &Frame)> {
        self.voussoirs.iter().zip(&self.frames)
    }

    /// Blocks bearing on a support.
    pub fn supports(&self) -> impl Iterator<Item = &Voussoir> {
        self.voussoirs.iter().filter(|v| v.is_support)
    }

    /// Bounds of all blocks, `None` when empty.
    pub fn bounds(&self) -> Option<Bounds> {
        self.voussoirs
            .iter()
            .map(Voussoir::bounds)
            .reduce(|a, b| a.union(&b))
    }

    /// Lowest z-coordinate over all blocks.
    pub fn min_z(&self) -> Option<f64> {
        self.bounds().map(|b| b.min.z)
    }

    /// Summed block volume.
    pub fn total_volume(&self) -> f64 {
        self.voussoirs.iter().map(Voussoir::volume).sum()
    }

    /// A copy of the vault with every block and frame transformed.
    pub fn transformed(&self, t: &Transform) -> Self {
        Self {
            voussoirs: self.voussoirs.iter().map(|v| v.transformed(t)).collect(),
            frames: self.frames.iter().map(|f| f.transformed(t)).collect(),
        }
    }

    /// A copy of the vault moved by `offset`, e.g. onto a floor level.
    pub fn placed(&self, offset: Vec3) -> Self {
        self.transformed(&Transform::translation_vec(&offset))
    }
}

/// Split a barrel vault into voussoirs.
///
/// Blocks are emitted course by course (see [`course_plan`]). Unless
/// `zero_is_centerline_or_lowestpoint` is set, the whole vault is lifted so
/// that its lowest vertex rests on z = 0.
pub fn tessellate(params: &VaultParameters) -> Result<Vault> {
    params.validate()?;

    let arch = ArchGeometry::new(params);
    debug!(
        radius = arch.radius,
        sector_deg = arch.sector.to_degrees(),
        ribs = arch.ribs.len(),
        "arch geometry"
    );

    let plan = course_plan(params.voussoirs_span, params.voussoirs_length);
    let mut voussoirs = build_blocks(&arch, params, &plan);

    if !params.zero_is_centerline_or_lowestpoint {
        let min_z = voussoirs
            .iter()
            .map(Voussoir::min_z)
            .fold(f64::INFINITY, f64::min);
        let offset = Vec3::new(0.0, 0.0, -min_z);
        for block in &mut voussoirs {
            block.translate(&offset);
        }
        debug!(lift = -min_z, "vault rested on z = 0");
    }

    let frames = voussoirs
        .iter()
        .enumerate()
        .map(|(i, block)| {
            block.frame().ok_or_else(|| {
                VaultError::Configuration(format!("block {i} is degenerate and has no frame"))
            })
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(
        blocks = voussoirs.len(),
        supports = voussoirs.iter().filter(|v| v.is_support).count(),
        "vault tessellated"
    );

    Ok(Vault { voussoirs, frames })
}

#[cfg(not(feature = "parallel"))]
fn build_blocks(arch: &ArchGeometry, params: &VaultParameters, plan: &[Placement]) -> Vec<Voussoir> {
    plan.iter().map(|p| build_block(arch, params, p)).collect()
}

#[cfg(feature = "parallel")]
fn build_blocks(arch: &ArchGeometry, params: &VaultParameters, plan: &[Placement]) -> Vec<Voussoir> {
    use rayon::prelude::*;
    plan.par_iter().map(|p| build_block(arch, params, p)).collect()
}

/// Sweep the rib pair's cross-section over the course's extent.
fn build_block(arch: &ArchGeometry, params: &VaultParameters, placement: &Placement) -> Voussoir {
    let (a, b) = (
        &arch.ribs[placement.rib_pair],
        &arch.ribs[placement.rib_pair + 1],
    );
    let section = [a.intrados, a.extrados, b.intrados, b.extrados];
    let (start, end) = placement
        .course
        .extent(params.length, params.voussoirs_length);

    let mut vertices = [Point3::origin(); 8];
    for (j, p) in section.iter().enumerate() {
        vertices[j] = *p + Vec3::new(0.0, start, 0.0);
        vertices[j + 4] = *p + Vec3::new(0.0, end, 0.0);
    }

    let last = params.voussoirs_span - 1;
    let is_support = placement.rib_pair == 0 || placement.rib_pair == last;
    Voussoir::new(vertices, is_support)
}
