//! Placement of the sky/ground bitmap behind the fixed reticle.
//!
//! The renderer draws one large pre-rendered world bitmap and moves it with an
//! affine transform instead of redrawing it every tick. The transform is built
//! in three steps, each right-multiplying the running transform:
//!
//! 1. translate to the world origin (view center minus half the bitmap),
//! 2. rotate by `-roll`,
//! 3. translate vertically by `pitch * degree_distance`.
//!
//! The screen banks with the device, so the bitmap counter-rotates: a right
//! bank turns it counter-clockwise on screen and the drawn horizon stays
//! parallel to the real one. The pitch shift runs along the rolled vertical
//! axis, like the pitch ladder of a real attitude indicator.

use core::ops::Mul;

use libm::{cos, fabs, sin};
use nalgebra::{Matrix2, Matrix2x3, Matrix3, Point2, Vector2};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::attitude::Attitude;
use crate::error::{IndicatorError, Result};

/// Pixels of vertical shift per degree of pitch.
pub const DEFAULT_DEGREE_DISTANCE: f64 = 5.0;

/// Ladder marks are drawn every this many degrees.
pub const LADDER_STEP_DEGREES: i32 = 10;

/// Number of ladder marks on each side of the horizon.
pub const LADDER_MARKS_PER_SIDE: i32 = 6;

/// Half of the horizontal length of a ladder mark.
pub const LADDER_HALF_WIDTH: f64 = 40.0;

/// Horizontal gap between the reticle wing tips and the view center.
pub const RETICLE_WING_GAP: f64 = 45.0;

/// Diameter of the reticle center dot.
pub const RETICLE_DOT_DIAMETER: f64 = 8.0;

/// Stroke width of the reticle wings.
pub const RETICLE_STROKE: f64 = 8.0;

/// Stroke width of the horizon line.
pub const HORIZON_LINE_WIDTH: f64 = 3.0;

/// Stroke width of the ladder marks.
pub const LADDER_LINE_WIDTH: f64 = 1.0;

/// Width and height in pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Point2<f64> {
        Point2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// An 8-bit RGB color.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Colors used by the renderer for the world and reticle bitmaps.
pub mod palette {
    use super::Rgb;

    pub const SKY: Rgb = Rgb::new(72, 121, 202);
    pub const GROUND: Rgb = Rgb::new(90, 83, 75);
    pub const HORIZON_LINE: Rgb = Rgb::new(255, 255, 255);
    pub const LADDER: Rgb = Rgb::new(255, 255, 255);
    pub const RETICLE: Rgb = Rgb::new(255, 253, 93);
}

/// A 2-D affine transform: a 2×2 linear part plus a translation.
///
/// Points map as `p' = linear * p + translation`. Composition follows the
/// Core Graphics convention used by view layers: [`translated`](Self::translated)
/// and [`rotated`](Self::rotated) right-multiply, so the newest step is applied
/// to points first.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AffineTransform2D {
    pub linear: Matrix2<f64>,
    pub translation: Vector2<f64>,
}

impl Default for AffineTransform2D {
    fn default() -> Self {
        Self::identity()
    }
}

impl AffineTransform2D {
    pub fn identity() -> Self {
        Self {
            linear: Matrix2::identity(),
            translation: Vector2::zeros(),
        }
    }

    pub fn from_translation(tx: f64, ty: f64) -> Self {
        Self {
            linear: Matrix2::identity(),
            translation: Vector2::new(tx, ty),
        }
    }

    /// Rotation about the origin by `angle` radians, clockwise on a y-down
    /// screen.
    pub fn from_rotation(angle: f64) -> Self {
        let (s, c) = (sin(angle), cos(angle));
        Self {
            linear: Matrix2::new(c, -s, s, c),
            translation: Vector2::zeros(),
        }
    }

    /// Returns `self * other`: `other` is applied to points first.
    #[must_use]
    pub fn then(&self, other: &Self) -> Self {
        Self {
            linear: self.linear * other.linear,
            translation: self.linear * other.translation + self.translation,
        }
    }

    #[must_use]
    pub fn translated(&self, tx: f64, ty: f64) -> Self {
        self.then(&Self::from_translation(tx, ty))
    }

    #[must_use]
    pub fn rotated(&self, angle: f64) -> Self {
        self.then(&Self::from_rotation(angle))
    }

    pub fn apply_point(&self, point: Point2<f64>) -> Point2<f64> {
        Point2::from(self.linear * point.coords + self.translation)
    }

    /// True when the linear part is the identity within `tolerance`.
    pub fn is_translation(&self, tolerance: f64) -> bool {
        (self.linear - Matrix2::identity())
            .iter()
            .all(|e| fabs(*e) <= tolerance)
    }

    /// The 2×3 matrix `[linear | translation]`.
    pub fn to_matrix(&self) -> Matrix2x3<f64> {
        let mut m = Matrix2x3::zeros();
        m.fixed_view_mut::<2, 2>(0, 0).copy_from(&self.linear);
        m.set_column(2, &self.translation);
        m
    }

    pub fn to_homogeneous(&self) -> Matrix3<f64> {
        let mut m = Matrix3::identity();
        m.fixed_view_mut::<2, 2>(0, 0).copy_from(&self.linear);
        m.fixed_view_mut::<2, 1>(0, 2).copy_from(&self.translation);
        m
    }
}

impl Mul for AffineTransform2D {
    type Output = AffineTransform2D;

    fn mul(self, rhs: AffineTransform2D) -> AffineTransform2D {
        self.then(&rhs)
    }
}

/// Builds the transform of the world bitmap for one attitude sample.
///
/// `world_center` is where the bitmap origin sits when level (see
/// [`HorizonLayout::world_center`]). Positive roll turns the bitmap
/// counter-clockwise.
pub fn build_horizon_transform(
    attitude: &Attitude,
    degree_distance: f64,
    world_center: Point2<f64>,
) -> AffineTransform2D {
    AffineTransform2D::from_translation(world_center.x, world_center.y)
        .rotated(-attitude.roll_radians())
        .translated(0.0, attitude.pitch * degree_distance)
}

/// One horizontal mark of the pitch ladder, in world bitmap coordinates.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LadderMark {
    /// Positive above the horizon.
    pub degrees: i32,
    pub from: Point2<f64>,
    pub to: Point2<f64>,
}

/// A straight stroke in reticle bitmap coordinates.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Segment {
    pub from: Point2<f64>,
    pub to: Point2<f64>,
}

/// Geometry of the fixed reticle bitmap.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ReticleGeometry {
    pub left_wing: Segment,
    pub right_wing: Segment,
    /// Top-left corner of the center dot's bounding box.
    pub dot_origin: Point2<f64>,
    pub dot_diameter: f64,
    pub stroke_width: f64,
}

/// Static geometry shared by the transform builder and the renderer.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HorizonLayout {
    /// Pixels per degree of pitch.
    pub degree_distance: f64,
    /// Size of the world (sky/ground) bitmap.
    pub world_size: Size,
    /// Size of the reticle bitmap.
    pub reticle_size: Size,
}

impl Default for HorizonLayout {
    fn default() -> Self {
        Self {
            degree_distance: DEFAULT_DEGREE_DISTANCE,
            world_size: Size::new(1600.0, 1600.0),
            reticle_size: Size::new(220.0, 8.0),
        }
    }
}

impl HorizonLayout {
    /// Rejects non-finite or non-positive distances and sizes.
    pub fn validate(&self) -> Result<()> {
        let checks = [
            ("degree_distance", self.degree_distance),
            ("world_size.width", self.world_size.width),
            ("world_size.height", self.world_size.height),
            ("reticle_size.width", self.reticle_size.width),
            ("reticle_size.height", self.reticle_size.height),
        ];
        for (name, value) in checks {
            if !value.is_finite() || value <= 0.0 {
                return Err(IndicatorError::invalid_parameter(name, value));
            }
        }
        Ok(())
    }

    /// Origin of the world bitmap that centers it in `view`.
    pub fn world_center(&self, view: Size) -> Point2<f64> {
        Point2::new(
            view.width / 2.0 - self.world_size.width / 2.0,
            view.height / 2.0 - self.world_size.height / 2.0,
        )
    }

    pub fn transform_for(&self, attitude: &Attitude, view: Size) -> AffineTransform2D {
        build_horizon_transform(attitude, self.degree_distance, self.world_center(view))
    }

    /// Vertical position of the horizon line in the world bitmap.
    pub fn horizon_y(&self) -> f64 {
        self.world_size.height / 2.0
    }

    /// Ladder marks from +60° down to -60°, skipping the horizon itself.
    pub fn pitch_ladder(&self) -> impl Iterator<Item = LadderMark> + '_ {
        let center_x = self.world_size.width / 2.0;
        let horizon = self.horizon_y();
        (-LADDER_MARKS_PER_SIDE..=LADDER_MARKS_PER_SIDE)
            .rev()
            .filter(|step| *step != 0)
            .map(move |step| {
                let degrees = step * LADDER_STEP_DEGREES;
                let y = horizon - f64::from(degrees) * self.degree_distance;
                LadderMark {
                    degrees,
                    from: Point2::new(center_x - LADDER_HALF_WIDTH, y),
                    to: Point2::new(center_x + LADDER_HALF_WIDTH, y),
                }
            })
    }

    pub fn reticle(&self) -> ReticleGeometry {
        let Size { width, height } = self.reticle_size;
        let mid_x = width / 2.0;
        let mid_y = height / 2.0;
        ReticleGeometry {
            left_wing: Segment {
                from: Point2::new(0.0, mid_y),
                to: Point2::new(mid_x - RETICLE_WING_GAP, mid_y),
            },
            right_wing: Segment {
                from: Point2::new(mid_x + RETICLE_WING_GAP, mid_y),
                to: Point2::new(width, mid_y),
            },
            dot_origin: Point2::new(mid_x - RETICLE_DOT_DIAMETER / 2.0, 0.0),
            dot_diameter: RETICLE_DOT_DIAMETER,
            stroke_width: RETICLE_STROKE,
        }
    }
}
