//! Batch of independent volumes along a leading object axis.
//!
//! Model output containers usually hold several objects in one 4D array
//! (object, x, y, z), sometimes with a spurious unit channel axis. The batch
//! type normalizes those shapes and hands out per-object [`VolumeF32`]
//! slices.
use super::f32::VolumeF32;

/// Reasons why a flat buffer cannot be interpreted as a volume batch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BatchShapeError {
    /// The shape has an unsupported number of axes (3, 4, or a 5-axis shape
    /// with a unit second axis are accepted).
    UnsupportedRank { rank: usize },
    /// A 5-axis shape whose second axis is not 1.
    NonUnitChannel { channel: usize },
    /// Buffer length does not match the product of the extents.
    LengthMismatch { expected: usize, actual: usize },
}

impl std::fmt::Display for BatchShapeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedRank { rank } => {
                write!(f, "unsupported volume rank {rank}, expected 3, 4, or 5")
            }
            Self::NonUnitChannel { channel } => {
                write!(f, "5-axis volume must have a unit channel axis, got {channel}")
            }
            Self::LengthMismatch { expected, actual } => {
                write!(f, "buffer holds {actual} elements, shape requires {expected}")
            }
        }
    }
}

impl std::error::Error for BatchShapeError {}

/// Sequence of equally-shaped volumes sharing all grid operations.
#[derive(Clone, Debug)]
pub struct VolumeBatch {
    volumes: Vec<VolumeF32>,
}

impl VolumeBatch {
    /// Interpret a flat buffer under `shape`, normalizing the leading axes:
    /// a bare 3D shape becomes a batch of one, a 4D shape is taken as
    /// (object, x, y, z), and a 5D shape must carry a unit second axis which
    /// is squeezed away.
    pub fn from_flat(shape: &[usize], data: Vec<f32>) -> Result<Self, BatchShapeError> {
        let (n, dx, dy, dz) = match *shape {
            [dx, dy, dz] => (1, dx, dy, dz),
            [n, dx, dy, dz] => (n, dx, dy, dz),
            [n, 1, dx, dy, dz] => (n, dx, dy, dz),
            [_, c, _, _, _] => return Err(BatchShapeError::NonUnitChannel { channel: c }),
            _ => return Err(BatchShapeError::UnsupportedRank { rank: shape.len() }),
        };
        let per_volume = dx * dy * dz;
        let expected = n * per_volume;
        if data.len() != expected {
            return Err(BatchShapeError::LengthMismatch {
                expected,
                actual: data.len(),
            });
        }

        let mut volumes = Vec::with_capacity(n);
        let mut rest = data;
        for _ in 0..n {
            let tail = rest.split_off(per_volume);
            let vol = VolumeF32::from_vec(dx, dy, dz, rest)
                .ok_or(BatchShapeError::LengthMismatch {
                    expected: per_volume,
                    actual: 0,
                })?;
            volumes.push(vol);
            rest = tail;
        }
        Ok(Self { volumes })
    }

    pub fn from_volumes(volumes: Vec<VolumeF32>) -> Self {
        Self { volumes }
    }

    pub fn len(&self) -> usize {
        self.volumes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.volumes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&VolumeF32> {
        self.volumes.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, VolumeF32> {
        self.volumes.iter()
    }

    pub fn volumes(&self) -> &[VolumeF32] {
        &self.volumes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::volume::VolumeView;

    #[test]
    fn bare_3d_becomes_batch_of_one() {
        let batch = VolumeBatch::from_flat(&[2, 2, 2], vec![0.0; 8]).unwrap();
        assert_eq!(batch.len(), 1);
        assert_eq!(batch.get(0).unwrap().dims(), (2, 2, 2));
    }

    #[test]
    fn unit_channel_axis_is_squeezed() {
        let batch = VolumeBatch::from_flat(&[3, 1, 2, 2, 2], vec![0.0; 24]).unwrap();
        assert_eq!(batch.len(), 3);
        assert!(matches!(
            VolumeBatch::from_flat(&[3, 2, 2, 2, 2], vec![0.0; 48]),
            Err(BatchShapeError::NonUnitChannel { channel: 2 })
        ));
    }

    #[test]
    fn batch_elements_carve_the_buffer_in_order() {
        let mut data = vec![0.0f32; 16];
        data[0] = 1.0; // first volume, cell (0,0,0)
        data[8] = 2.0; // second volume, cell (0,0,0)
        let batch = VolumeBatch::from_flat(&[2, 2, 2, 2], data).unwrap();
        assert_eq!(batch.get(0).unwrap().get(0, 0, 0), 1.0);
        assert_eq!(batch.get(1).unwrap().get(0, 0, 0), 2.0);
    }

    #[test]
    fn length_mismatch_is_rejected() {
        assert!(matches!(
            VolumeBatch::from_flat(&[2, 2, 2], vec![0.0; 9]),
            Err(BatchShapeError::LengthMismatch {
                expected: 8,
                actual: 9
            })
        ));
    }
}
