//! Owned dense 3D f32 occupancy volume in x-major layout (z varies fastest).
//!
//! Suited for numeric processing in the pipeline. Cells hold occupancy
//! confidence values, typically in `[0, 1]` but not restricted to it.
use super::mask::VolumeMask;
use super::traits::VolumeView;

#[derive(Clone, Debug, PartialEq)]
pub struct VolumeF32 {
    /// Extent along x
    pub dx: usize,
    /// Extent along y
    pub dy: usize,
    /// Extent along z
    pub dz: usize,
    /// Backing storage, `dx * dy * dz` elements, z fastest
    pub data: Vec<f32>,
}

impl VolumeF32 {
    /// Construct a zero-initialized volume of size `dx × dy × dz`.
    pub fn new(dx: usize, dy: usize, dz: usize) -> Self {
        Self {
            dx,
            dy,
            dz,
            data: vec![0.0; dx * dy * dz],
        }
    }

    /// Wrap an existing buffer. Returns `None` when the element count does
    /// not match the extents.
    pub fn from_vec(dx: usize, dy: usize, dz: usize, data: Vec<f32>) -> Option<Self> {
        (data.len() == dx * dy * dz).then_some(Self { dx, dy, dz, data })
    }

    #[inline]
    /// Convert (x, y, z) to a linear index into `data`.
    pub fn idx(&self, x: usize, y: usize, z: usize) -> usize {
        (x * self.dy + y) * self.dz + z
    }

    #[inline]
    /// Get the occupancy value at (x, y, z).
    pub fn get(&self, x: usize, y: usize, z: usize) -> f32 {
        self.data[self.idx(x, y, z)]
    }

    #[inline]
    /// Set the occupancy value at (x, y, z).
    pub fn set(&mut self, x: usize, y: usize, z: usize, v: f32) {
        let i = self.idx(x, y, z);
        self.data[i] = v;
    }

    /// Bounds-checked lookup over signed coordinates.
    ///
    /// Returns `None` when any component is negative or at/beyond the extent
    /// on its axis, so callers never have to pre-validate neighbor offsets.
    #[inline]
    pub fn get_checked(&self, x: i64, y: i64, z: i64) -> Option<f32> {
        self.in_bounds(x, y, z)
            .then(|| self.get(x as usize, y as usize, z as usize))
    }

    /// Zero every cell where `keep` is false. Extents must match.
    pub fn retain_masked(&mut self, keep: &VolumeMask) {
        assert_eq!(
            self.dims(),
            keep.dims(),
            "mask extents must match the volume"
        );
        for (v, k) in self.data.iter_mut().zip(keep.data.iter()) {
            if !*k {
                *v = 0.0;
            }
        }
    }
}

impl VolumeView for VolumeF32 {
    type Voxel = f32;

    #[inline]
    fn dim_x(&self) -> usize {
        self.dx
    }
    #[inline]
    fn dim_y(&self) -> usize {
        self.dy
    }
    #[inline]
    fn dim_z(&self) -> usize {
        self.dz
    }
}
