//! Mass-weighted centroid of an occupancy volume.
//!
//! Used to aim the render camera at the object. Voxels below the confidence
//! threshold contribute nothing; when no voxel clears it at all the centroid
//! degenerates to the geometric center of the grid.
use crate::volume::VolumeF32;
use log::warn;
use nalgebra::Vector3;

/// Centroid plus the degenerate-input flag, for callers that report
/// diagnostics.
#[derive(Clone, Copy, Debug)]
pub struct CentroidReport {
    pub center: Vector3<f32>,
    /// True when no voxel cleared the threshold and the geometric center was
    /// returned instead of a weighted mean.
    pub degenerate: bool,
}

/// Occupancy-weighted mean position in grid-index space.
///
/// Cells below `threshold` are treated as empty. Falls back to the geometric
/// center `(dx/2, dy/2, dz/2)` when the filtered volume carries zero total
/// weight; that condition is logged but is not an error.
pub fn center_of_mass(volume: &VolumeF32, threshold: f32) -> Vector3<f32> {
    center_of_mass_report(volume, threshold).center
}

/// Same as [`center_of_mass`], exposing whether the fallback fired.
pub fn center_of_mass_report(volume: &VolumeF32, threshold: f32) -> CentroidReport {
    let mut total = 0.0f64;
    let mut acc = [0.0f64; 3];
    for x in 0..volume.dx {
        for y in 0..volume.dy {
            for z in 0..volume.dz {
                let v = volume.get(x, y, z);
                if v < threshold {
                    continue;
                }
                let w = v as f64;
                total += w;
                acc[0] += w * x as f64;
                acc[1] += w * y as f64;
                acc[2] += w * z as f64;
            }
        }
    }

    if total == 0.0 {
        warn!(
            "center_of_mass: threshold {threshold} removed every voxel, \
             falling back to the geometric center"
        );
        return CentroidReport {
            center: Vector3::new(
                volume.dx as f32 / 2.0,
                volume.dy as f32 / 2.0,
                volume.dz as f32 / 2.0,
            ),
            degenerate: true,
        };
    }

    CentroidReport {
        center: Vector3::new(
            (acc[0] / total) as f32,
            (acc[1] / total) as f32,
            (acc[2] / total) as f32,
        ),
        degenerate: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: Vector3<f32>, b: Vector3<f32>) -> bool {
        (a - b).norm() < 1e-5
    }

    #[test]
    fn empty_volume_falls_back_to_geometric_center() {
        let vol = VolumeF32::new(4, 4, 4);
        let report = center_of_mass_report(&vol, 0.1);
        assert!(report.degenerate);
        assert!(approx_eq(report.center, Vector3::new(2.0, 2.0, 2.0)));
        // threshold does not change the fallback
        assert!(approx_eq(
            center_of_mass(&vol, 0.9),
            Vector3::new(2.0, 2.0, 2.0)
        ));
    }

    #[test]
    fn single_voxel_centroid_is_its_coordinate() {
        let mut vol = VolumeF32::new(5, 5, 5);
        vol.set(1, 2, 3, 0.7);
        let report = center_of_mass_report(&vol, 0.1);
        assert!(!report.degenerate);
        assert!(approx_eq(report.center, Vector3::new(1.0, 2.0, 3.0)));
    }

    #[test]
    fn centroid_weights_by_occupancy() {
        let mut vol = VolumeF32::new(4, 1, 1);
        vol.set(0, 0, 0, 1.0);
        vol.set(3, 0, 0, 3.0);
        // weighted mean along x: (0*1 + 3*3) / 4 = 2.25
        let c = center_of_mass(&vol, 0.1);
        assert!(approx_eq(c, Vector3::new(2.25, 0.0, 0.0)));
    }

    #[test]
    fn sub_threshold_voxels_do_not_contribute() {
        let mut vol = VolumeF32::new(4, 1, 1);
        vol.set(0, 0, 0, 0.05);
        vol.set(2, 0, 0, 0.5);
        let c = center_of_mass(&vol, 0.1);
        assert!(approx_eq(c, Vector3::new(2.0, 0.0, 0.0)));
    }
}
