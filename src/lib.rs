#![cfg_attr(not(feature = "std"), no_std)]
#![allow(clippy::needless_doctest_main)]
#![doc = include_str!("../README.md")]

mod attitude;
mod axis;
mod error;
mod horizon;
mod indicator;
mod matrix;
mod params;
#[cfg(feature = "std")]
mod publish;
mod traits;

pub use attitude::{Attitude, extract};
pub use axis::{Axis, AxisAssignment, AxisSpec, remap_coordinate_system};
pub use error::{IndicatorError, Result};
pub use horizon::{
    AffineTransform2D, DEFAULT_DEGREE_DISTANCE, HORIZON_LINE_WIDTH, HorizonLayout,
    LADDER_HALF_WIDTH, LADDER_LINE_WIDTH, LADDER_MARKS_PER_SIDE, LADDER_STEP_DEGREES, LadderMark,
    RETICLE_DOT_DIAMETER, RETICLE_STROKE, RETICLE_WING_GAP, ReticleGeometry, Rgb, Segment, Size,
    build_horizon_transform, palette,
};
pub use indicator::{AttitudeIndicator, IndicatorFrame};
pub use matrix::RotationMatrix;
pub use params::IndicatorParams;
#[cfg(feature = "std")]
pub use publish::FrameSlot;
pub use traits::{OrientationSource, QuaternionSource};
