pub mod batch;
pub mod f32;
pub mod mask;
pub mod traits;

pub use self::batch::{BatchShapeError, VolumeBatch};
pub use self::f32::VolumeF32;
pub use self::mask::VolumeMask;
pub use self::traits::VolumeView;
