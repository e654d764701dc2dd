#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod block;
pub mod blocks;
pub mod camera;
pub mod centroid;
pub mod components;
pub mod config;
pub mod diagnostics;
pub mod occupancy;
pub mod pooling;
pub mod prep;
pub mod volume;

// --- High-level re-exports -------------------------------------------------

// Main entry points: pipeline + results.
pub use crate::prep::{PrepError, PrepParams, PrepReport, VolumePrep};
pub use crate::volume::{VolumeBatch, VolumeF32, VolumeMask};

// Stage functions that are generally useful on their own.
pub use crate::centroid::center_of_mass;
pub use crate::components::largest_component;
pub use crate::occupancy::sigmoid;
pub use crate::pooling::{downsample, downsample_batch, PoolMethod};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use voxel_prep::prelude::*;
///
/// let mut volume = VolumeF32::new(16, 16, 16);
/// volume.set(8, 8, 8, 0.9);
///
/// let prep = VolumePrep::new(PrepParams::default());
/// let report = prep.process(&volume).expect("valid params");
/// assert!(!report.diagnostics.degenerate_centroid);
/// ```
pub mod prelude {
    pub use crate::block::{BoxCenter, BoxSides};
    pub use crate::blocks::{block_layout, Block, BlockOptions};
    pub use crate::camera::{aim_camera, CameraPose};
    pub use crate::centroid::center_of_mass;
    pub use crate::components::largest_component;
    pub use crate::occupancy::{sigmoid, threshold_mask};
    pub use crate::pooling::{downsample, downsample_batch, PoolMethod};
    pub use crate::prep::{PrepParams, PrepReport, VolumePrep};
    pub use crate::volume::{VolumeBatch, VolumeF32, VolumeMask, VolumeView};
}
