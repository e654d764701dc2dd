//! Largest-connected-component extraction over boolean occupancy masks.
//!
//! Generative models leave speckle: small disconnected clumps of occupied
//! voxels around the dominant shape. This module keeps only the largest
//! connected region. Connectivity is distance-generalized: two occupied
//! voxels are neighbors when their Euclidean offset is within a configurable
//! radius, so a radius above 1 bridges one-voxel holes.
//!
//! The fill is an explicit-stack traversal rather than call recursion; worst
//! case the stack holds one entry per voxel and never touches the call-stack
//! depth limit on large grids.
use crate::volume::VolumeMask;

/// Reasons why component extraction cannot run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ComponentError {
    /// The connectivity radius must be at least 1.
    ZeroDistance,
}

impl std::fmt::Display for ComponentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroDistance => write!(f, "connectivity distance must be at least 1"),
        }
    }
}

impl std::error::Error for ComponentError {}

/// Integer offsets inside the closed Euclidean ball of radius `distance`,
/// excluding the zero offset (the seed cell is already consumed when its
/// neighbors are probed).
fn ball_offsets(distance: u32) -> Vec<(i64, i64, i64)> {
    let d = distance as i64;
    let limit = d * d;
    let mut offsets = Vec::new();
    for di in -d..=d {
        for dj in -d..=d {
            for dk in -d..=d {
                if (di, dj, dk) == (0, 0, 0) {
                    continue;
                }
                if di * di + dj * dj + dk * dk <= limit {
                    offsets.push((di, dj, dk));
                }
            }
        }
    }
    offsets
}

/// Extract the largest connected set of occupied cells.
///
/// Scans seeds in a fixed x-outer / z-fastest order and flood-fills from each
/// unconsumed occupied cell over a working copy, so the caller's mask is
/// never mutated. Ties between equally sized components go to the component
/// discovered first (strict `>` comparison). An all-false input yields an
/// all-false output.
pub fn largest_component(
    occupancy: &VolumeMask,
    distance: u32,
) -> Result<VolumeMask, ComponentError> {
    if distance == 0 {
        return Err(ComponentError::ZeroDistance);
    }
    let offsets = ball_offsets(distance);

    let mut work = occupancy.clone();
    let mut best = VolumeMask::new(work.dx, work.dy, work.dz);
    let mut best_count = 0usize;
    let mut stack: Vec<(i64, i64, i64)> = Vec::new();

    for start_x in 0..work.dx {
        for start_y in 0..work.dy {
            for start_z in 0..work.dz {
                if !work.get(start_x, start_y, start_z) {
                    continue;
                }
                // new component seeded at the first unconsumed occupied cell
                let mut component = VolumeMask::new(work.dx, work.dy, work.dz);
                let mut count = 1usize;
                work.set(start_x, start_y, start_z, false);
                component.set(start_x, start_y, start_z, true);
                stack.push((start_x as i64, start_y as i64, start_z as i64));

                while let Some((cx, cy, cz)) = stack.pop() {
                    for &(di, dj, dk) in &offsets {
                        let (nx, ny, nz) = (cx + di, cy + dj, cz + dk);
                        if work.is_set(nx, ny, nz) {
                            work.set(nx as usize, ny as usize, nz as usize, false);
                            component.set(nx as usize, ny as usize, nz as usize, true);
                            count += 1;
                            stack.push((nx, ny, nz));
                        }
                    }
                }

                if count > best_count {
                    best_count = count;
                    best = component;
                }
            }
        }
    }
    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mask_from(dx: usize, dy: usize, dz: usize, cells: &[(usize, usize, usize)]) -> VolumeMask {
        let mut mask = VolumeMask::new(dx, dy, dz);
        for &(x, y, z) in cells {
            mask.set(x, y, z, true);
        }
        mask
    }

    #[test]
    fn zero_distance_is_rejected() {
        let mask = VolumeMask::new(2, 2, 2);
        assert_eq!(largest_component(&mask, 0), Err(ComponentError::ZeroDistance));
    }

    #[test]
    fn empty_mask_yields_empty_component() {
        let mask = VolumeMask::new(3, 3, 3);
        let out = largest_component(&mask, 1).unwrap();
        assert_eq!(out.count_set(), 0);
    }

    #[test]
    fn larger_blob_wins_and_smaller_is_dropped() {
        // 3-cell bar along z vs a 2-cell bar, well separated
        let mask = mask_from(
            8,
            8,
            8,
            &[(1, 1, 1), (1, 1, 2), (1, 1, 3), (6, 6, 6), (6, 6, 7)],
        );
        let out = largest_component(&mask, 1).unwrap();
        assert_eq!(out.count_set(), 3);
        assert!(out.get(1, 1, 1) && out.get(1, 1, 2) && out.get(1, 1, 3));
        assert!(!out.get(6, 6, 6) && !out.get(6, 6, 7));
    }

    #[test]
    fn distance_two_bridges_a_one_voxel_gap() {
        // cells at z = 0 and z = 2 with a hole in between
        let mask = mask_from(1, 1, 5, &[(0, 0, 0), (0, 0, 2)]);

        let separate = largest_component(&mask, 1).unwrap();
        assert_eq!(separate.count_set(), 1);

        let bridged = largest_component(&mask, 2).unwrap();
        assert_eq!(bridged.count_set(), 2);
    }

    #[test]
    fn connectivity_radius_is_euclidean_not_chebyshev() {
        // offset (1, 1, 1) has length sqrt(3) > 1, so distance 1 does not
        // connect across a full diagonal
        let diagonal = mask_from(2, 2, 2, &[(0, 0, 0), (1, 1, 1)]);
        let out = largest_component(&diagonal, 1).unwrap();
        assert_eq!(out.count_set(), 1);

        // sqrt(3) <= 2, so radius 2 does
        let out2 = largest_component(&diagonal, 2).unwrap();
        assert_eq!(out2.count_set(), 2);
    }

    #[test]
    fn tie_goes_to_first_component() {
        // two single cells, equal size: the one reached first in
        // x-outer scan order must win
        let mask = mask_from(4, 4, 4, &[(0, 0, 0), (3, 3, 3)]);
        let out = largest_component(&mask, 1).unwrap();
        assert_eq!(out.count_set(), 1);
        assert!(out.get(0, 0, 0));
        assert!(!out.get(3, 3, 3));
    }

    #[test]
    fn input_mask_is_not_mutated() {
        let mask = mask_from(3, 3, 3, &[(0, 0, 0), (0, 0, 1)]);
        let before = mask.clone();
        let _ = largest_component(&mask, 1).unwrap();
        assert_eq!(mask, before);
    }

    #[test]
    fn ball_offsets_respect_the_radius() {
        // radius 1: the 6 axis-aligned unit offsets only
        assert_eq!(ball_offsets(1).len(), 6);
        // radius 2 additionally admits face diagonals and 2-steps
        let offsets = ball_offsets(2);
        assert!(offsets.contains(&(1, 1, 0)));
        assert!(offsets.contains(&(0, 0, 2)));
        assert!(!offsets.contains(&(1, 1, 2)));
        assert!(!offsets.contains(&(0, 0, 0)));
    }
}
