//! Per-stage diagnostics emitted by the prep pipeline.
//!
//! Everything is serializable so demo binaries can dump a JSON report next to
//! the render output.
use serde::Serialize;

#[derive(Clone, Copy, Debug, Serialize)]
pub struct ComponentStage {
    /// Connectivity radius used by the flood fill.
    pub distance: u32,
    /// Occupied voxels before component filtering.
    pub occupied_voxels: usize,
    /// Voxels belonging to the largest component.
    pub component_voxels: usize,
    pub elapsed_ms: f64,
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct PoolingStage {
    pub step: usize,
    pub method: crate::pooling::PoolMethod,
    pub output_dims: [usize; 3],
    pub elapsed_ms: f64,
}

/// Full trace of one [`VolumePrep::process`] call.
///
/// [`VolumePrep::process`]: crate::prep::VolumePrep::process
#[derive(Clone, Debug, Serialize)]
pub struct PrepDiagnostics {
    pub input_dims: [usize; 3],
    pub output_dims: [usize; 3],
    /// Voxels still above the threshold in the returned volume.
    pub kept_voxels: usize,
    /// `None` when component filtering was disabled.
    pub component: Option<ComponentStage>,
    /// `None` when the downsample step was 1.
    pub pooling: Option<PoolingStage>,
    /// True when the centroid degenerated to the geometric center.
    pub degenerate_centroid: bool,
    pub centroid_ms: f64,
    pub total_latency_ms: f64,
}
