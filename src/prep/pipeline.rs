//! Prep pipeline driving volume preparation end-to-end.
//!
//! [`VolumePrep`] exposes a simple API: feed a raw occupancy volume and get
//! back the cleaned volume, the centroid, a camera pose aimed at it, and
//! per-stage diagnostics. Internally it coordinates thresholding,
//! largest-component masking, optional pooling, and the center-of-mass
//! computation.
//!
//! Typical usage:
//! ```no_run
//! use voxel_prep::prep::{PrepParams, VolumePrep};
//! use voxel_prep::volume::VolumeF32;
//!
//! # fn example(volume: VolumeF32) {
//! let prep = VolumePrep::new(PrepParams::default());
//! let report = prep.process(&volume).expect("valid params");
//! println!("centroid: {:?}", report.centroid);
//! # }
//! ```
use super::params::PrepParams;
use crate::camera::{aim_camera, CameraPose};
use crate::centroid::center_of_mass_report;
use crate::components::{largest_component, ComponentError};
use crate::diagnostics::{ComponentStage, PoolingStage, PrepDiagnostics};
use crate::occupancy::threshold_mask;
use crate::pooling::{downsample, DownsampleError};
use crate::volume::{VolumeF32, VolumeView};
use log::debug;
use nalgebra::Vector3;
use std::time::Instant;

/// Reasons why a prep run cannot start. Parameter validation only; the
/// stages themselves are total over well-formed volumes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrepError {
    Component(ComponentError),
    Downsample(DownsampleError),
}

impl std::fmt::Display for PrepError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Component(e) => write!(f, "component extraction: {e}"),
            Self::Downsample(e) => write!(f, "downsampling: {e}"),
        }
    }
}

impl std::error::Error for PrepError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Component(e) => Some(e),
            Self::Downsample(e) => Some(e),
        }
    }
}

impl From<ComponentError> for PrepError {
    fn from(e: ComponentError) -> Self {
        Self::Component(e)
    }
}

impl From<DownsampleError> for PrepError {
    fn from(e: DownsampleError) -> Self {
        Self::Downsample(e)
    }
}

/// Output of one prep run.
#[derive(Clone, Debug)]
pub struct PrepReport {
    /// Cleaned (and possibly downsampled) occupancy volume.
    pub volume: VolumeF32,
    /// Mass-weighted centroid of the cleaned volume, in its index space.
    pub centroid: Vector3<f32>,
    /// Camera pose aimed at the centroid.
    pub camera: CameraPose,
    pub diagnostics: PrepDiagnostics,
}

/// Pipeline orchestrating threshold → largest component → pooling →
/// center of mass → camera aiming.
pub struct VolumePrep {
    params: PrepParams,
}

impl VolumePrep {
    pub fn new(params: PrepParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &PrepParams {
        &self.params
    }

    /// Run the pipeline on a raw occupancy volume.
    ///
    /// The input is never mutated; all stages work on copies. Fails only on
    /// invalid parameters (zero-radius connectivity cannot occur here since
    /// `connectivity == 0` disables the stage, but a downsample step that
    /// does not divide the extents does).
    pub fn process(&self, volume: &VolumeF32) -> Result<PrepReport, PrepError> {
        let input_dims = volume.dims();
        debug!(
            "VolumePrep::process start dims=({}, {}, {}) threshold={} connectivity={} step={}",
            input_dims.0,
            input_dims.1,
            input_dims.2,
            self.params.threshold,
            self.params.connectivity,
            self.params.downsample_step,
        );
        let total_start = Instant::now();
        let mut working = volume.clone();

        let component_stage = if self.params.connectivity > 0 {
            let stage_start = Instant::now();
            let occupancy = threshold_mask(&working, self.params.threshold);
            let occupied = occupancy.count_set();
            let component = largest_component(&occupancy, self.params.connectivity)?;
            let kept = component.count_set();
            working.retain_masked(&component);
            let elapsed_ms = stage_start.elapsed().as_secs_f64() * 1000.0;
            debug!(
                "VolumePrep::process component occupied={occupied} kept={kept} ({elapsed_ms:.3} ms)"
            );
            Some(ComponentStage {
                distance: self.params.connectivity,
                occupied_voxels: occupied,
                component_voxels: kept,
                elapsed_ms,
            })
        } else {
            None
        };

        let pooling_stage = if self.params.downsample_step > 1 {
            let stage_start = Instant::now();
            working = downsample(
                &working,
                self.params.downsample_step,
                self.params.downsample_method,
            )?;
            let elapsed_ms = stage_start.elapsed().as_secs_f64() * 1000.0;
            debug!(
                "VolumePrep::process pooled to ({}, {}, {}) ({elapsed_ms:.3} ms)",
                working.dx, working.dy, working.dz
            );
            Some(PoolingStage {
                step: self.params.downsample_step,
                method: self.params.downsample_method,
                output_dims: [working.dx, working.dy, working.dz],
                elapsed_ms,
            })
        } else {
            None
        };

        let centroid_start = Instant::now();
        let centroid = center_of_mass_report(&working, self.params.threshold);
        let centroid_ms = centroid_start.elapsed().as_secs_f64() * 1000.0;
        let camera = aim_camera(&working, centroid.center);

        let kept_voxels = working
            .data
            .iter()
            .filter(|&&v| v >= self.params.threshold)
            .count();
        let diagnostics = PrepDiagnostics {
            input_dims: [input_dims.0, input_dims.1, input_dims.2],
            output_dims: [working.dx, working.dy, working.dz],
            kept_voxels,
            component: component_stage,
            pooling: pooling_stage,
            degenerate_centroid: centroid.degenerate,
            centroid_ms,
            total_latency_ms: total_start.elapsed().as_secs_f64() * 1000.0,
        };
        debug!(
            "VolumePrep::process done kept={} total={:.3} ms",
            diagnostics.kept_voxels, diagnostics.total_latency_ms
        );

        Ok(PrepReport {
            volume: working,
            centroid: centroid.center,
            camera,
            diagnostics,
        })
    }
}
