//! Region-wise aggregation and Laplacian smoothing of per-vertex data on brain surface meshes.
//!
//! The focus of this package is on surface-based MRI and PET data as produced by FreeSurfer. Reading the
//! meshes, parcellations and overlays from files is left to a file format library.

pub mod error;
pub mod mesh;
pub mod neighbors;
pub mod overlay;
pub mod region;
pub mod scalar;
pub mod smooth;

pub use error::{NeuroSmoothError, Result};
pub use mesh::BrainMesh;
pub use neighbors::VertexNeighbors;
pub use overlay::SurfaceOverlay;
pub use region::{aggregate_by_region, region_key, Parcellation, RegionTable, BACKGROUND_LABEL};
pub use scalar::{clip_scalars, scalar_range, DEFAULT_CLIP_MAX, DEFAULT_CLIP_MIN};
pub use smooth::{laplacian_smoothing, smooth_with_neighbors, SmoothParams};
