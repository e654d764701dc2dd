pub trait VolumeView {
    type Voxel: Copy;

    fn dim_x(&self) -> usize;
    fn dim_y(&self) -> usize;
    fn dim_z(&self) -> usize;

    fn dims(&self) -> (usize, usize, usize) {
        (self.dim_x(), self.dim_y(), self.dim_z())
    }

    fn voxel_count(&self) -> usize {
        self.dim_x() * self.dim_y() * self.dim_z()
    }

    /// Whether a signed coordinate triple addresses a cell of this volume.
    ///
    /// Negative components and components at or beyond the extent on their
    /// axis are out of bounds.
    fn in_bounds(&self, x: i64, y: i64, z: i64) -> bool {
        x >= 0
            && y >= 0
            && z >= 0
            && (x as usize) < self.dim_x()
            && (y as usize) < self.dim_y()
            && (z as usize) < self.dim_z()
    }
}
