//! Coordinate system remapping.
//!
//! A device reports its orientation relative to its own axes. The indicator
//! needs the orientation relative to the aircraft axes it draws: which
//! physical axis reads as the lateral (pitch) axis, which one points forward
//! (roll axis), and which way each of them faces. [`AxisAssignment`] captures
//! that choice and re-expresses sensor matrices in the chosen frame by
//! right-multiplying them with a signed permutation matrix.
//!
//! Axis identifiers keep the raw sensor encoding at the API boundary:
//! `1`, `2`, `3` for X, Y, Z, with `0x80` added for the negated axis
//! (`0x81` is minus X). They are decoded once into [`AxisSpec`].

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{IndicatorError, Result};
use crate::matrix::RotationMatrix;

const AXIS_MASK: u8 = 0x03;
const NEGATED: u8 = 0x80;

/// One of the three source axes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Zero-based axis index.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    #[inline]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Axis::X),
            1 => Some(Axis::Y),
            2 => Some(Axis::Z),
            _ => None,
        }
    }
}

/// A source axis mapped onto a target axis, optionally negated.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AxisSpec {
    pub axis: Axis,
    pub negated: bool,
}

impl AxisSpec {
    pub const X: AxisSpec = AxisSpec::positive(Axis::X);
    pub const Y: AxisSpec = AxisSpec::positive(Axis::Y);
    pub const Z: AxisSpec = AxisSpec::positive(Axis::Z);
    pub const MINUS_X: AxisSpec = AxisSpec::negative(Axis::X);
    pub const MINUS_Y: AxisSpec = AxisSpec::negative(Axis::Y);
    pub const MINUS_Z: AxisSpec = AxisSpec::negative(Axis::Z);

    pub const fn positive(axis: Axis) -> Self {
        Self {
            axis,
            negated: false,
        }
    }

    pub const fn negative(axis: Axis) -> Self {
        Self {
            axis,
            negated: true,
        }
    }

    /// Decodes a raw sensor axis identifier.
    ///
    /// The low two bits select axis 1, 2 or 3; values `>= 0x80` are negated.
    /// A zero axis field is rejected; `(x, y)` is the pair being configured
    /// and only ends up in the error.
    fn decode(raw: u8, x: u8, y: u8) -> Result<Self> {
        let axis = usize::from(raw & AXIS_MASK)
            .checked_sub(1)
            .and_then(Axis::from_index)
            .ok_or(IndicatorError::invalid_axes(x, y))?;
        Ok(Self {
            axis,
            negated: raw >= NEGATED,
        })
    }

    /// Decodes a single raw sensor axis identifier.
    pub fn from_raw(raw: u8) -> Result<Self> {
        Self::decode(raw, raw, raw)
    }

    /// Encodes back into the raw sensor form.
    pub const fn to_raw(self) -> u8 {
        let id = self.axis.index() as u8 + 1;
        if self.negated { id | NEGATED } else { id }
    }

    #[inline]
    fn sign(self) -> f64 {
        if self.negated { -1.0 } else { 1.0 }
    }
}

impl fmt::Display for AxisSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.negated { "-" } else { "+" };
        let name = match self.axis {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        };
        write!(f, "{sign}{name}")
    }
}

/// A validated pair of target axes. Target Z is derived from the pair.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawAxes", into = "RawAxes"))]
pub struct AxisAssignment {
    x: AxisSpec,
    y: AxisSpec,
    z: AxisSpec,
}

impl Default for AxisAssignment {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl AxisAssignment {
    /// Leaves matrices unchanged.
    pub const IDENTITY: AxisAssignment = AxisAssignment {
        x: AxisSpec::X,
        y: AxisSpec::Y,
        z: AxisSpec::Z,
    };

    /// Raw pair `(1, 3)`: device Y becomes the vertical axis and the back of
    /// the device (minus Z) the forward axis.
    pub const DEVICE_UPRIGHT: AxisAssignment = AxisAssignment {
        x: AxisSpec::X,
        y: AxisSpec::Z,
        z: AxisSpec::MINUS_Y,
    };

    pub fn new(x: AxisSpec, y: AxisSpec) -> Result<Self> {
        if x.axis == y.axis {
            return Err(IndicatorError::invalid_axes(x.to_raw(), y.to_raw()));
        }
        Ok(Self {
            x,
            y,
            z: derive_z(x, y),
        })
    }

    /// Validates a pair of raw sensor axis identifiers.
    pub fn from_raw(x: u8, y: u8) -> Result<Self> {
        let target_x = AxisSpec::decode(x, x, y)?;
        let target_y = AxisSpec::decode(y, x, y)?;
        if target_x.axis == target_y.axis {
            return Err(IndicatorError::invalid_axes(x, y));
        }
        Self::new(target_x, target_y)
    }

    pub fn x(&self) -> AxisSpec {
        self.x
    }

    pub fn y(&self) -> AxisSpec {
        self.y
    }

    pub fn z(&self) -> AxisSpec {
        self.z
    }

    /// Re-expresses `matrix` in the target frame.
    ///
    /// Output column `x` is source column 0, column `y` is source column 1
    /// and column `z` is source column 2, each negated as its spec requires.
    pub fn remap(&self, matrix: &RotationMatrix) -> RotationMatrix {
        let source = matrix.as_matrix();
        let mut out = *source;
        for (spec, col) in [(self.x, 0), (self.y, 1), (self.z, 2)] {
            out.set_column(spec.axis.index(), &(source.column(col) * spec.sign()));
        }
        RotationMatrix::from_matrix(out)
    }
}

impl fmt::Display for AxisAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Completes the frame with the remaining axis.
///
/// The one-based identifiers of the three axes XOR to zero, so Z is the XOR
/// of X and Y. Its sign starts as the XOR of the X and Y signs and is flipped
/// again unless `(x, y, z)` is a cyclic order, which keeps the frame
/// right-handed.
fn derive_z(x: AxisSpec, y: AxisSpec) -> AxisSpec {
    let (xi, yi) = (x.axis.index(), y.axis.index());
    let zi = ((xi + 1) ^ (yi + 1)) - 1;

    let cyclic = xi == (zi + 1) % 3 && yi == (zi + 2) % 3;
    let negated = x.negated ^ y.negated ^ !cyclic;

    AxisSpec {
        axis: Axis::from_index(zi).unwrap_or(Axis::Z),
        negated,
    }
}

/// Remaps `matrix` so that source axes `target_x` and `target_y` become the
/// new X and Y axes.
///
/// Fails with [`IndicatorError::InvalidAxisConfiguration`] when both targets
/// name the same axis. Prefer building an [`AxisAssignment`] once at startup
/// and calling [`AxisAssignment::remap`] per tick.
pub fn remap_coordinate_system(
    matrix: &RotationMatrix,
    target_x: AxisSpec,
    target_y: AxisSpec,
) -> Result<RotationMatrix> {
    Ok(AxisAssignment::new(target_x, target_y)?.remap(matrix))
}

#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct RawAxes {
    x: u8,
    y: u8,
}

#[cfg(feature = "serde")]
impl TryFrom<RawAxes> for AxisAssignment {
    type Error = IndicatorError;

    fn try_from(raw: RawAxes) -> Result<Self> {
        AxisAssignment::from_raw(raw.x, raw.y)
    }
}

#[cfg(feature = "serde")]
impl From<AxisAssignment> for RawAxes {
    fn from(axes: AxisAssignment) -> Self {
        RawAxes {
            x: axes.x.to_raw(),
            y: axes.y.to_raw(),
        }
    }
}
