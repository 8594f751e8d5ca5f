#![warn(missing_docs)]

//! Barrel-vault voussoir tessellation.
//!
//! Splits a circular barrel vault into hexahedral masonry blocks laid in a
//! running bond, and derives a reference frame per block so that assembly
//! code can re-orient each block into a larger model.
//!
//! # Example
//!
//! ```
//! use voussoir_vault::{tessellate, VaultDocument, VaultParameters};
//!
//! let params = VaultParameters::new(6000.0, 6000.0, 250.0, 600.0).with_voussoirs(5, 5);
//! let vault = tessellate(&params)?;
//! assert_eq!(vault.len(), 27);
//!
//! let json = VaultDocument::from_vault(&vault).to_json()?;
//! assert!(json.contains("\"meshes\""));
//! # Ok::<(), voussoir_vault::VaultError>(())
//! ```

pub mod arch;
pub mod block;
pub mod course;
pub mod document;
pub mod error;
pub mod params;
pub mod stl;
pub mod tessellate;

pub use arch::{ArchGeometry, Rib};
pub use block::{Bounds, Voussoir, BLOCK_FACES, FRAME_FACE};
pub use course::{block_count, course_plan, BoundaryEnd, Course, Placement};
pub use document::{FrameRecord, MeshRecord, VaultDocument};
pub use error::{Result, VaultError};
pub use params::{VaultParameters, MAX_BLOCKS};
pub use stl::{to_stl_bytes, write_stl};
pub use tessellate::{tessellate, Vault};

pub use voussoir_math::{Frame, Point3, Transform, Vec3};
