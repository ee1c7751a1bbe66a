//! Error types for the attitude indicator core.

use thiserror::Error;

/// Configuration errors raised while setting up the indicator.
///
/// Every variant describes a startup defect. Once an
/// [`AttitudeIndicator`](crate::AttitudeIndicator) exists, per-tick processing
/// cannot fail.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum IndicatorError {
    /// The target axes collide or one of them is not axis 1, 2 or 3.
    ///
    /// Values are in the raw sensor encoding (`0x80` marks a negated axis).
    #[error("invalid axis configuration: target X {x:#04x}, target Y {y:#04x}")]
    InvalidAxisConfiguration {
        /// Raw identifier requested for target X.
        x: u8,
        /// Raw identifier requested for target Y.
        y: u8,
    },

    /// A layout parameter is not finite or not strictly positive.
    #[error("invalid parameter {name}: {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Rejected value.
        value: f64,
    },
}

impl IndicatorError {
    /// Creates an invalid axis configuration error.
    #[must_use]
    pub const fn invalid_axes(x: u8, y: u8) -> Self {
        Self::InvalidAxisConfiguration { x, y }
    }

    /// Creates an invalid parameter error.
    #[must_use]
    pub const fn invalid_parameter(name: &'static str, value: f64) -> Self {
        Self::InvalidParameter { name, value }
    }
}

/// Result type for indicator configuration.
pub type Result<T> = core::result::Result<T, IndicatorError>;
