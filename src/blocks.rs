//! Per-voxel cubic block layout handed to the renderer.
//!
//! Every voxel clearing the display threshold becomes a cube centered on the
//! voxel's cell. Cube size is either a fixed edge length in `(0, 1]` or, when
//! disabled, proportional to the voxel's occupancy so confident voxels render
//! larger.
use crate::block::BoxCenter;
use crate::volume::VolumeF32;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Controls which voxels produce blocks and how large they are.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct BlockOptions {
    /// Voxels below this confidence produce no block.
    pub threshold: f32,
    /// Fixed cube edge length. Values outside `(0, 1]` disable the uniform
    /// size and fall back to occupancy-proportional edges.
    pub uniform_size: f32,
}

impl Default for BlockOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            uniform_size: 0.9,
        }
    }
}

/// One renderable cube plus the occupancy that produced it.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Block {
    pub bounds: BoxCenter,
    pub occupancy: f32,
}

/// Generate one block per voxel above the threshold, z-outer / x-fastest, so
/// render order matches the original viewer.
pub fn block_layout(volume: &VolumeF32, options: &BlockOptions) -> Vec<Block> {
    let uniform = options.uniform_size > 0.0 && options.uniform_size <= 1.0;
    let mut blocks = Vec::new();
    for z in 0..volume.dz {
        for y in 0..volume.dy {
            for x in 0..volume.dx {
                let occupancy = volume.get(x, y, z);
                if occupancy < options.threshold {
                    continue;
                }
                let edge = if uniform {
                    options.uniform_size
                } else {
                    occupancy
                };
                blocks.push(Block {
                    bounds: BoxCenter::new(
                        Vector3::new(x as f32 + 0.5, y as f32 + 0.5, z as f32 + 0.5),
                        Vector3::new(edge, edge, edge),
                    ),
                    occupancy,
                });
            }
        }
    }
    blocks
}
