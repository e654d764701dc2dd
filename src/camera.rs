//! Camera placement aimed at the object centroid.
//!
//! The renderer orbits the object from a fixed azimuth: the camera sits at a
//! distance proportional to the grid's x extent, raised by a fraction of the
//! z extent, looking at the centroid with z up.
use crate::volume::VolumeView;
use nalgebra::Vector3;
use serde::Serialize;

/// Camera distance as a multiple of the grid's x extent.
const DISTANCE_FACTOR: f32 = 2.8;
/// Camera elevation as a multiple of the grid's z extent.
const HEIGHT_FACTOR: f32 = 0.85;
/// Orbit azimuth in radians.
const AZIMUTH: f32 = std::f32::consts::PI * 0.43;

/// A complete look-at pose for the render camera.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct CameraPose {
    pub position: Vector3<f32>,
    pub focal_point: Vector3<f32>,
    pub view_up: Vector3<f32>,
}

/// Place the camera on its orbit around `centroid`, scaled to the extents of
/// `volume`.
pub fn aim_camera<V: VolumeView>(volume: &V, centroid: Vector3<f32>) -> CameraPose {
    let distance = volume.dim_x() as f32 * DISTANCE_FACTOR;
    let height = volume.dim_z() as f32 * HEIGHT_FACTOR;
    let position = Vector3::new(
        centroid.x + distance * AZIMUTH.cos(),
        centroid.y + distance * AZIMUTH.sin(),
        centroid.z + height,
    );
    CameraPose {
        position,
        focal_point: centroid,
        view_up: Vector3::new(0.0, 0.0, 1.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::volume::VolumeF32;

    #[test]
    fn camera_looks_at_the_centroid_with_z_up() {
        let vol = VolumeF32::new(32, 32, 32);
        let centroid = Vector3::new(16.0, 15.0, 14.0);
        let pose = aim_camera(&vol, centroid);
        assert_eq!(pose.focal_point, centroid);
        assert_eq!(pose.view_up, Vector3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn orbit_scales_with_grid_extents() {
        let centroid = Vector3::new(0.0, 0.0, 0.0);
        let near = aim_camera(&VolumeF32::new(16, 16, 16), centroid);
        let far = aim_camera(&VolumeF32::new(64, 64, 64), centroid);
        let near_range = (near.position - centroid).norm();
        let far_range = (far.position - centroid).norm();
        assert!(far_range > near_range * 3.0);

        // elevation above the focal point follows the z extent
        assert!((near.position.z - 16.0 * 0.85).abs() < 1e-4);
        assert!((far.position.z - 64.0 * 0.85).abs() < 1e-4);
    }
}
