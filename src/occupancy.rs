//! Occupancy scoring helpers shared across the pipeline.
use crate::volume::{VolumeF32, VolumeMask};

/// Parametrized logistic transform `1 / (1 + exp(-(z - offset) * ratio))`.
///
/// Maps a raw model score into `(0, 1)`. Runs in double precision: in f32
/// the tail already rounds to exactly 1.0 around `(z - offset) * ratio ≈ 17`,
/// well inside the range of scores models emit. `ratio = 0` yields exactly
/// `0.5` for any finite input.
#[inline]
pub fn sigmoid(z: f64, offset: f64, ratio: f64) -> f64 {
    1.0 / (1.0 + (-(z - offset) * ratio).exp())
}

/// Boolean occupancy mask: true wherever the confidence clears `threshold`.
pub fn threshold_mask(volume: &VolumeF32, threshold: f32) -> VolumeMask {
    let mut mask = VolumeMask::new(volume.dx, volume.dy, volume.dz);
    for (out, &v) in mask.data.iter_mut().zip(volume.data.iter()) {
        *out = v >= threshold;
    }
    mask
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn sigmoid_is_half_at_the_offset() {
        assert!(approx_eq(sigmoid(0.0, 0.0, 1.0), 0.5));
        assert!(approx_eq(sigmoid(-5.0, -5.0, 2.5), 0.5));
        assert!(approx_eq(sigmoid(3.25, 3.25, 100.0), 0.5));
    }

    #[test]
    fn sigmoid_matches_reference_values() {
        assert!(approx_eq(
            sigmoid(1.0, -5.0, 2.5),
            1.0 / (1.0 + (-15.0f64).exp())
        ));
        assert!(approx_eq(sigmoid(1.0, 0.0, 1.0), 1.0 / (1.0 + (-1.0f64).exp())));
    }

    #[test]
    fn zero_ratio_flattens_to_half() {
        assert!(approx_eq(sigmoid(std::f64::consts::PI, 0.0, 0.0), 0.5));
        assert!(approx_eq(sigmoid(-1e6, 12.0, 0.0), 0.5));
    }

    #[test]
    fn sigmoid_stays_in_open_unit_interval() {
        for &z in &[-20.0f64, -1.0, 0.0, 0.5, 7.0, 20.0] {
            let v = sigmoid(z, 0.3, 1.7);
            assert!(v > 0.0 && v < 1.0, "sigmoid({z}) = {v}");
        }
    }

    #[test]
    fn large_scores_do_not_round_up_to_one() {
        // (20 - 0.3) * 1.7 ≈ 33.5; exp(-33.5) is below f32 resolution at 1.0
        // but comfortably above f64's
        let v = sigmoid(20.0, 0.3, 1.7);
        assert!(v < 1.0, "sigmoid(20.0, 0.3, 1.7) = {v}");
        assert!(v > 0.999_999);
    }

    #[test]
    fn threshold_mask_uses_inclusive_cut() {
        let mut vol = VolumeF32::new(2, 1, 1);
        vol.set(0, 0, 0, 0.1);
        vol.set(1, 0, 0, 0.0999);
        let mask = threshold_mask(&vol, 0.1);
        assert!(mask.get(0, 0, 0));
        assert!(!mask.get(1, 0, 0));
    }
}
