//! Boolean occupancy mask sharing the layout of [`VolumeF32`].
//!
//! [`VolumeF32`]: super::VolumeF32
use super::traits::VolumeView;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VolumeMask {
    pub dx: usize,
    pub dy: usize,
    pub dz: usize,
    /// Backing storage, `dx * dy * dz` elements, z fastest
    pub data: Vec<bool>,
}

impl VolumeMask {
    /// Construct an all-false mask of size `dx × dy × dz`.
    pub fn new(dx: usize, dy: usize, dz: usize) -> Self {
        Self {
            dx,
            dy,
            dz,
            data: vec![false; dx * dy * dz],
        }
    }

    #[inline]
    pub fn idx(&self, x: usize, y: usize, z: usize) -> usize {
        (x * self.dy + y) * self.dz + z
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize, z: usize) -> bool {
        self.data[self.idx(x, y, z)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, z: usize, v: bool) {
        let i = self.idx(x, y, z);
        self.data[i] = v;
    }

    /// Bounds-tolerant membership test over signed coordinates.
    ///
    /// Out-of-bounds coordinates read as unoccupied, which lets the flood
    /// fill probe neighbor offsets without clamping.
    #[inline]
    pub fn is_set(&self, x: i64, y: i64, z: i64) -> bool {
        self.in_bounds(x, y, z) && self.get(x as usize, y as usize, z as usize)
    }

    /// Number of set cells.
    pub fn count_set(&self) -> usize {
        self.data.iter().filter(|&&b| b).count()
    }
}

impl VolumeView for VolumeMask {
    type Voxel = bool;

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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_set_is_false_outside_bounds() {
        let mut mask = VolumeMask::new(3, 3, 3);
        mask.set(2, 2, 2, true);

        assert!(mask.is_set(2, 2, 2));
        assert!(!mask.is_set(3, 2, 2));
        assert!(!mask.is_set(2, 3, 2));
        assert!(!mask.is_set(2, 2, 3));
        assert!(!mask.is_set(-1, 2, 2));
    }

    #[test]
    fn count_set_counts_true_cells() {
        let mut mask = VolumeMask::new(2, 2, 2);
        assert_eq!(mask.count_set(), 0);
        mask.set(0, 0, 0, true);
        mask.set(1, 0, 1, true);
        assert_eq!(mask.count_set(), 2);
    }
}
