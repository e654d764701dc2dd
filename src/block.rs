//! Rectangular-box representation conversions used for block geometry.
//!
//! Renderers want boxes as lower/upper corners; the block layout is easier to
//! express as center plus size. Both representations carry 6 floats and are
//! losslessly interconvertible as long as sizes are non-negative.
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Axis-aligned box as center coordinates plus per-axis size.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoxCenter {
    pub center: Vector3<f32>,
    pub size: Vector3<f32>,
}

/// Axis-aligned box as lower and upper corner coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoxSides {
    pub lower: Vector3<f32>,
    pub upper: Vector3<f32>,
}

impl BoxCenter {
    pub fn new(center: Vector3<f32>, size: Vector3<f32>) -> Self {
        Self { center, size }
    }

    /// Interpret 6 floats as (center_x, center_y, center_z, size_x, size_y,
    /// size_z).
    pub fn from_array(v: [f32; 6]) -> Self {
        Self {
            center: Vector3::new(v[0], v[1], v[2]),
            size: Vector3::new(v[3], v[4], v[5]),
        }
    }

    pub fn to_array(self) -> [f32; 6] {
        [
            self.center.x,
            self.center.y,
            self.center.z,
            self.size.x,
            self.size.y,
            self.size.z,
        ]
    }

    /// Convert to the corner representation. Accepts any real inputs; a
    /// negative size produces `lower > upper` on that axis, which is left to
    /// the caller.
    pub fn to_sides(self) -> BoxSides {
        let half = self.size * 0.5;
        BoxSides {
            lower: self.center - half,
            upper: self.center + half,
        }
    }
}

impl BoxSides {
    pub fn new(lower: Vector3<f32>, upper: Vector3<f32>) -> Self {
        Self { lower, upper }
    }

    /// Interpret 6 floats as (lower_x, lower_y, lower_z, upper_x, upper_y,
    /// upper_z).
    pub fn from_array(v: [f32; 6]) -> Self {
        Self {
            lower: Vector3::new(v[0], v[1], v[2]),
            upper: Vector3::new(v[3], v[4], v[5]),
        }
    }

    pub fn to_array(self) -> [f32; 6] {
        [
            self.lower.x,
            self.lower.y,
            self.lower.z,
            self.upper.x,
            self.upper.y,
            self.upper.z,
        ]
    }

    /// Convert to the center representation. Sizes come out as absolute
    /// differences, so the round trip through [`BoxCenter::to_sides`] only
    /// recovers the original when its sizes were non-negative.
    pub fn to_center(self) -> BoxCenter {
        BoxCenter {
            center: (self.lower + self.upper) * 0.5,
            size: (self.upper - self.lower).abs(),
        }
    }
}
