//! JSON interchange format for generated vaults.
//!
//! A document is a mapping with a `"meshes"` list and a `"frames"` list of
//! equal length, consumed positionally by assembly code that places the
//! blocks into a larger model.

use std::path::Path;

use serde::{Deserialize, Serialize};
use voussoir_math::{Frame, Point3, Vec3};

use crate::block::{Voussoir, BLOCK_FACES};
use crate::error::{Result, VaultError};
use crate::tessellate::Vault;

/// A block mesh as stored in a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshRecord {
    /// Vertex positions as `[x, y, z]`.
    pub vertices: Vec<[f64; 3]>,
    /// Quad faces as vertex indices.
    pub faces: Vec<[usize; 4]>,
    /// Whether the block bears on a support.
    #[serde(default)]
    pub is_support: bool,
}

/// A reference frame as stored in a document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameRecord {
    /// Frame origin.
    pub point: [f64; 3],
    /// Unit x-axis.
    pub xaxis: [f64; 3],
    /// Unit y-axis.
    pub yaxis: [f64; 3],
}

/// Serialized form of a [`Vault`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VaultDocument {
    /// Block meshes in emission order.
    pub meshes: Vec<MeshRecord>,
    /// Frame of each block.
    pub frames: Vec<FrameRecord>,
}

impl VaultDocument {
    /// Build a document from generated blocks.
    pub fn from_vault(vault: &Vault) -> Self {
        let meshes = vault
            .voussoirs
            .iter()
            .map(|v| MeshRecord {
                vertices: v.vertices.iter().map(|p| [p.x, p.y, p.z]).collect(),
                faces: BLOCK_FACES.to_vec(),
                is_support: v.is_support,
            })
            .collect();
        let frames = vault
            .frames
            .iter()
            .map(|f| FrameRecord {
                point: [f.origin.x, f.origin.y, f.origin.z],
                xaxis: [f.x_axis.x, f.x_axis.y, f.x_axis.z],
                yaxis: [f.y_axis.x, f.y_axis.y, f.y_axis.z],
            })
            .collect();
        Self { meshes, frames }
    }

    /// Rebuild the blocks, checking that every mesh is a voussoir hexahedron.
    pub fn into_vault(self) -> Result<Vault> {
        if self.meshes.len() != self.frames.len() {
            return Err(VaultError::InvalidDocument(format!(
                "{} meshes but {} frames",
                self.meshes.len(),
                self.frames.len()
            )));
        }

        let voussoirs = self
            .meshes
            .into_iter()
            .enumerate()
            .map(|(i, mesh)| {
                let vertices: [[f64; 3]; 8] = mesh.vertices.try_into().map_err(|v: Vec<_>| {
                    VaultError::InvalidDocument(format!(
                        "mesh {i} has {} vertices, expected 8",
                        v.len()
                    ))
                })?;
                if mesh.faces.as_slice() != BLOCK_FACES.as_slice() {
                    return Err(VaultError::InvalidDocument(format!(
                        "mesh {i} does not use the voussoir face layout"
                    )));
                }
                Ok(Voussoir::new(
                    vertices.map(|[x, y, z]| Point3::new(x, y, z)),
                    mesh.is_support,
                ))
            })
            .collect::<Result<Vec<_>>>()?;

        let frames = self
            .frames
            .iter()
            .enumerate()
            .map(|(i, f)| {
                Frame::new(
                    Point3::from(f.point),
                    Vec3::from(f.xaxis),
                    Vec3::from(f.yaxis),
                )
                .ok_or_else(|| VaultError::InvalidDocument(format!("frame {i} is degenerate")))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Vault { voussoirs, frames })
    }

    /// Serialize to a pretty-printed JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a document from disk.
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Write the document to disk.
    pub fn write(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}
