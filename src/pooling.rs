//! Resolution reduction via pooling over non-overlapping cubic blocks.
//!
//! Each axis is partitioned into contiguous runs of `step` cells and every
//! `step³` block collapses to a single value, either its maximum or its
//! arithmetic mean. A batch variant reduces the elements of a leading object
//! axis independently (and in parallel, since they share no state).
use crate::volume::{VolumeBatch, VolumeF32};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Block-reduction operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PoolMethod {
    /// Keep the maximum of each block (preserves thin occupied structures).
    Max,
    /// Keep the arithmetic mean of each block.
    Mean,
}

impl FromStr for PoolMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "max" => Ok(Self::Max),
            "mean" => Ok(Self::Mean),
            other => Err(format!("unknown pooling method '{other}', expected max or mean")),
        }
    }
}

/// Reasons why a pooling request is invalid. Checked before any work starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DownsampleError {
    /// `step` must be at least 1.
    ZeroStep,
    /// An axis extent is not evenly divisible by `step`.
    UnevenAxis {
        axis: char,
        extent: usize,
        step: usize,
    },
}

impl std::fmt::Display for DownsampleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroStep => write!(f, "downsample step must be at least 1"),
            Self::UnevenAxis { axis, extent, step } => write!(
                f,
                "axis {axis} extent {extent} is not divisible by step {step}"
            ),
        }
    }
}

impl std::error::Error for DownsampleError {}

fn check_divisible(volume: &VolumeF32, step: usize) -> Result<(), DownsampleError> {
    for (axis, extent) in [('x', volume.dx), ('y', volume.dy), ('z', volume.dz)] {
        if extent % step != 0 {
            return Err(DownsampleError::UnevenAxis { axis, extent, step });
        }
    }
    Ok(())
}

/// Downsample a volume by an integer factor.
///
/// `step == 1` returns the input unchanged. Output extents are the input
/// extents divided by `step`.
pub fn downsample(
    volume: &VolumeF32,
    step: usize,
    method: PoolMethod,
) -> Result<VolumeF32, DownsampleError> {
    if step == 0 {
        return Err(DownsampleError::ZeroStep);
    }
    if step == 1 {
        return Ok(volume.clone());
    }
    check_divisible(volume, step)?;

    let (nx, ny, nz) = (volume.dx / step, volume.dy / step, volume.dz / step);
    let mut out = VolumeF32::new(nx, ny, nz);
    let block_cells = (step * step * step) as f64;

    for ox in 0..nx {
        for oy in 0..ny {
            for oz in 0..nz {
                let (bx, by, bz) = (ox * step, oy * step, oz * step);
                let reduced = match method {
                    PoolMethod::Max => {
                        let mut best = f32::NEG_INFINITY;
                        for x in bx..bx + step {
                            for y in by..by + step {
                                for z in bz..bz + step {
                                    best = best.max(volume.get(x, y, z));
                                }
                            }
                        }
                        best
                    }
                    PoolMethod::Mean => {
                        let mut sum = 0.0f64;
                        for x in bx..bx + step {
                            for y in by..by + step {
                                for z in bz..bz + step {
                                    sum += volume.get(x, y, z) as f64;
                                }
                            }
                        }
                        (sum / block_cells) as f32
                    }
                };
                out.set(ox, oy, oz, reduced);
            }
        }
    }
    Ok(out)
}

/// Downsample every element of a batch independently, preserving batch order.
///
/// Validation failures surface before any element is materialized.
pub fn downsample_batch(
    batch: &VolumeBatch,
    step: usize,
    method: PoolMethod,
) -> Result<VolumeBatch, DownsampleError> {
    let volumes = batch
        .volumes()
        .par_iter()
        .map(|vol| downsample(vol, step, method))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(VolumeBatch::from_volumes(volumes))
}
