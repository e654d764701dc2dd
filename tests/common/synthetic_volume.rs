use voxel_prep::volume::VolumeF32;

/// Generates a volume with solid axis-aligned boxes of constant occupancy.
///
/// Each blob is (lower corner, upper corner exclusive, occupancy).
pub fn blob_volume(
    dx: usize,
    dy: usize,
    dz: usize,
    blobs: &[([usize; 3], [usize; 3], f32)],
) -> VolumeF32 {
    assert!(dx > 0 && dy > 0 && dz > 0, "volume extents must be positive");
    let mut vol = VolumeF32::new(dx, dy, dz);
    for &(lower, upper, occupancy) in blobs {
        assert!(
            upper[0] <= dx && upper[1] <= dy && upper[2] <= dz,
            "blob exceeds the volume extents"
        );
        for x in lower[0]..upper[0] {
            for y in lower[1]..upper[1] {
                for z in lower[2]..upper[2] {
                    vol.set(x, y, z, occupancy);
                }
            }
        }
    }
    vol
}

/// Constant-valued volume.
pub fn uniform_volume(dx: usize, dy: usize, dz: usize, occupancy: f32) -> VolumeF32 {
    blob_volume(dx, dy, dz, &[([0, 0, 0], [dx, dy, dz], occupancy)])
}
