//! Volume prep pipeline orchestrating the render-preparation stages.
//!
//! Overview
//! - Thresholds raw occupancy confidences into a boolean mask.
//! - Keeps only the largest connected component (configurable connectivity
//!   radius, `0` disables the stage) and zeroes every other voxel while
//!   preserving the survivors' confidences.
//! - Optionally pools the grid down by an integer factor.
//! - Computes the mass-weighted centroid and aims the render camera at it.
//!
//! Modules
//! - [`params`] – configuration types used by the pipeline and demo binary.
//! - `pipeline` – the main [`VolumePrep`] implementation.

pub mod params;
mod pipeline;

pub use params::PrepParams;
pub use pipeline::{PrepError, PrepReport, VolumePrep};
