use nalgebra::UnitQuaternion;

use crate::matrix::RotationMatrix;

/// Supplies fused device orientation, one sample per tick.
///
/// Returns `None` while the sensor has not produced a sample yet.
pub trait OrientationSource {
    fn rotation_matrix(&mut self) -> Option<RotationMatrix>;
}

impl<F> OrientationSource for F
where
    F: FnMut() -> Option<RotationMatrix>,
{
    fn rotation_matrix(&mut self) -> Option<RotationMatrix> {
        self()
    }
}

/// Adapts a source that reports unit quaternions.
#[derive(Debug, Clone)]
pub struct QuaternionSource<F>(pub F);

impl<F> OrientationSource for QuaternionSource<F>
where
    F: FnMut() -> Option<UnitQuaternion<f64>>,
{
    fn rotation_matrix(&mut self) -> Option<RotationMatrix> {
        (self.0)().map(|q| RotationMatrix::from_quaternion(&q))
    }
}
