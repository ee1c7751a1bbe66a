use nalgebra::UnitQuaternion;
use tracing::{debug, error, trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::attitude::{Attitude, extract};
use crate::axis::AxisAssignment;
use crate::error::Result;
use crate::horizon::{AffineTransform2D, HorizonLayout, Size};
use crate::matrix::RotationMatrix;
use crate::params::IndicatorParams;
use crate::traits::OrientationSource;

/// Everything the renderer needs for one tick.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IndicatorFrame {
    pub attitude: Attitude,
    /// Placement of the world bitmap inside the view.
    pub world_transform: AffineTransform2D,
}

/// Remap, extract and place the horizon for each sensor sample.
///
/// Holds only validated configuration: every call computes its frame from
/// the given sample alone.
#[derive(Debug, Clone)]
pub struct AttitudeIndicator {
    axes: AxisAssignment,
    layout: HorizonLayout,
}

impl Default for AttitudeIndicator {
    fn default() -> AttitudeIndicator {
        AttitudeIndicator {
            axes: IndicatorParams::default().axes,
            layout: HorizonLayout::default(),
        }
    }
}

impl AttitudeIndicator {
    pub fn new(params: IndicatorParams) -> Result<Self> {
        if let Err(err) = params.layout.validate() {
            error!(%err, "rejecting horizon layout");
            return Err(err);
        }
        debug!(
            axes = %params.axes,
            degree_distance = params.layout.degree_distance,
            "attitude indicator configured"
        );
        Ok(AttitudeIndicator {
            axes: params.axes,
            layout: params.layout,
        })
    }

    /// Builds an indicator from raw sensor axis identifiers.
    pub fn with_raw_axes(x: u8, y: u8, layout: HorizonLayout) -> Result<Self> {
        let axes = AxisAssignment::from_raw(x, y).inspect_err(|err| {
            error!(%err, "rejecting axis assignment");
        })?;
        Self::new(IndicatorParams { axes, layout })
    }

    pub fn axes(&self) -> AxisAssignment {
        self.axes
    }

    pub fn layout(&self) -> &HorizonLayout {
        &self.layout
    }

    pub fn attitude(&self, matrix: &RotationMatrix) -> Attitude {
        extract(&self.axes.remap(matrix))
    }

    pub fn update(&self, matrix: &RotationMatrix, view: Size) -> IndicatorFrame {
        let attitude = self.attitude(matrix);
        trace!(pitch = attitude.pitch, roll = attitude.roll, "attitude sample");
        IndicatorFrame {
            attitude,
            world_transform: self.layout.transform_for(&attitude, view),
        }
    }

    pub fn update_quaternion(
        &self,
        quaternion: &UnitQuaternion<f64>,
        view: Size,
    ) -> IndicatorFrame {
        self.update(&RotationMatrix::from_quaternion(quaternion), view)
    }

    /// Pulls one sample from `source`; `None` when it has nothing yet.
    pub fn sample<S>(&self, source: &mut S, view: Size) -> Option<IndicatorFrame>
    where
        S: OrientationSource + ?Sized,
    {
        let matrix = source.rotation_matrix()?;
        Some(self.update(&matrix, view))
    }
}
