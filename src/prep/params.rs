//! Parameter types configuring the prep pipeline stages.
//!
//! Defaults match the original viewer: display threshold 0.1, connectivity
//! radius 3, no downsampling.
use crate::pooling::PoolMethod;
use serde::Deserialize;

/// Pipeline-wide parameters controlling the prep stages.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct PrepParams {
    /// Voxels with confidence below this value are treated as empty.
    pub threshold: f32,
    /// Connectivity radius for largest-component extraction. Voxels within
    /// this Euclidean distance count as neighbors; `0` disables the stage.
    pub connectivity: u32,
    /// Pooling factor applied after component filtering. `1` keeps the grid
    /// at full resolution.
    pub downsample_step: usize,
    /// Block-reduction operator used when downsampling.
    pub downsample_method: PoolMethod,
}

impl Default for PrepParams {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            connectivity: 3,
            downsample_step: 1,
            downsample_method: PoolMethod::Max,
        }
    }
}
