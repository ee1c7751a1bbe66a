use core::f64::consts::PI;

use libm::{asin, atan2};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::matrix::RotationMatrix;

/// Pitch and roll in degrees for one sample.
///
/// Nose-up pitch and right-wing-down roll are positive. Pitch lies in
/// `[-90, 90]` and roll in `(-180, 180]`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Attitude {
    pub pitch: f64,
    pub roll: f64,
}

impl Attitude {
    pub const LEVEL: Attitude = Attitude {
        pitch: 0.0,
        roll: 0.0,
    };

    pub const fn new(pitch: f64, roll: f64) -> Self {
        Self { pitch, roll }
    }

    pub fn pitch_radians(&self) -> f64 {
        self.pitch.to_radians()
    }

    pub fn roll_radians(&self) -> f64 {
        self.roll.to_radians()
    }
}

/// Extracts pitch and roll from a remapped rotation matrix.
///
/// The third row of the remapped matrix is the vertical axis expressed in the
/// aircraft frame (X lateral, Y forward, Z up):
///
/// - `pitch = asin(m32)`, with `m32` clamped to `[-1, 1]` so slight drift from
///   orthonormality cannot produce NaN.
/// - `roll = atan2(-m31, m33)`.
///
/// At `|m32| = 1` (gimbal lock) both `atan2` arguments vanish and roll is
/// meaningless. The result stays finite (`atan2(0, 0) = 0`); callers should
/// not trust roll at that boundary.
pub fn extract(matrix: &RotationMatrix) -> Attitude {
    let sin_pitch = matrix.m32().clamp(-1.0, 1.0);
    let pitch = asin(sin_pitch);
    let roll = atan2(-matrix.m31(), matrix.m33());

    Attitude {
        pitch: pitch.to_degrees(),
        roll: wrap_half_open(roll).to_degrees(),
    }
}

// atan2 returns -π for a negative-zero sine; report it as +π.
fn wrap_half_open(radians: f64) -> f64 {
    if radians <= -PI { radians + 2.0 * PI } else { radians }
}
