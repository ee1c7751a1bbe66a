#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::axis::AxisAssignment;
use crate::error::Result;
use crate::horizon::HorizonLayout;

/// Startup configuration of an [`AttitudeIndicator`](crate::AttitudeIndicator).
///
/// The default axes ([`AxisAssignment::DEVICE_UPRIGHT`]) read a phone held
/// upright, screen towards the pilot, as level flight.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct IndicatorParams {
    pub axes: AxisAssignment,
    pub layout: HorizonLayout,
}

impl Default for IndicatorParams {
    fn default() -> Self {
        Self {
            axes: AxisAssignment::DEVICE_UPRIGHT,
            layout: HorizonLayout::default(),
        }
    }
}

impl IndicatorParams {
    /// Parameters with axes given in the raw sensor encoding.
    pub fn from_raw_axes(x: u8, y: u8) -> Result<Self> {
        Ok(Self {
            axes: AxisAssignment::from_raw(x, y)?,
            layout: HorizonLayout::default(),
        })
    }

    #[must_use]
    pub fn with_degree_distance(mut self, degree_distance: f64) -> Self {
        self.layout.degree_distance = degree_distance;
        self
    }
}
