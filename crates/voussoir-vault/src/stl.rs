//! Binary STL export of voussoir meshes.

use std::path::Path;

use voussoir_math::Point3;

use crate::block::Voussoir;
use crate::error::Result;

const HEADER: &[u8; 80] =
    b"voussoir STL export                                                             ";

/// Encode blocks as binary STL, splitting each quad into two triangles.
pub fn to_stl_bytes(blocks: &[Voussoir]) -> Vec<u8> {
    let num_triangles = blocks.len() * 12;
    let mut data = Vec::with_capacity(84 + num_triangles * 50);

    data.extend_from_slice(HEADER);
    data.extend_from_slice(&(num_triangles as u32).to_le_bytes());

    for block in blocks {
        for face in block.faces() {
            let [a, b, c, d] = face.map(|i| block.vertices[i]);
            write_triangle(&mut data, [a, b, c]);
            write_triangle(&mut data, [a, c, d]);
        }
    }

    data
}

/// Write blocks to a binary STL file.
pub fn write_stl(blocks: &[Voussoir], path: impl AsRef<Path>) -> Result<()> {
    std::fs::write(path, to_stl_bytes(blocks))?;
    Ok(())
}

fn write_triangle(data: &mut Vec<u8>, [v0, v1, v2]: [Point3; 3]) {
    let n = (v1 - v0).cross(&(v2 - v0));
    let len = n.norm();
    let n = if len > 1e-10 { n / len } else { n.map(|_| 0.0) };

    for c in n.iter() {
        data.extend_from_slice(&(*c as f32).to_le_bytes());
    }
    for v in [v0, v1, v2] {
        for c in v.coords.iter() {
            data.extend_from_slice(&(*c as f32).to_le_bytes());
        }
    }
    // Attribute byte count
    data.extend_from_slice(&0u16.to_le_bytes());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::VaultParameters;
    use crate::tessellate::tessellate;

    fn read_f32(data: &[u8], offset: usize) -> f32 {
        f32::from_le_bytes(data[offset..offset + 4].try_into().unwrap())
    }

    #[test]
    fn test_stl_layout() {
        let params = VaultParameters::default().with_voussoirs(3, 2);
        let vault = tessellate(&params).unwrap();
        let bytes = to_stl_bytes(&vault.voussoirs);

        let count = u32::from_le_bytes(bytes[80..84].try_into().unwrap()) as usize;
        assert_eq!(count, vault.len() * 12);
        assert_eq!(bytes.len(), 84 + count * 50);
        assert!(bytes.starts_with(b"voussoir STL"));
    }

    #[test]
    fn test_stl_normals_are_unit() {
        let params = VaultParameters::default().with_voussoirs(3, 2);
        let vault = tessellate(&params).unwrap();
        let bytes = to_stl_bytes(&vault.voussoirs[..1]);
        for t in 0..12 {
            let base = 84 + t * 50;
            let n: Vec<f32> = (0..3).map(|k| read_f32(&bytes, base + k * 4)).collect();
            let len = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
            assert!((len - 1.0).abs() < 1e-4, "triangle {t} normal length {len}");
        }
    }

    #[test]
    fn test_empty() {
        let bytes = to_stl_bytes(&[]);
        assert_eq!(bytes.len(), 84);
    }
}
