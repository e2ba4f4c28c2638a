//! Geographic coordinate pairs with exact decimal arithmetic
//!
//! Coordinates are held as [`Decimal`] so that subtracting the cell size
//! thousands of times never drifts. Output is cut, not rounded, to
//! [`OUTPUT_PRECISION`] places.

use crate::io::configuration::OUTPUT_PRECISION;
use crate::io::error::{ArtError, Result};
use num_traits::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::str::FromStr;

/// Default cell size and stride, 0.0001 degrees
pub const DEFAULT_SHIFT: Decimal = Decimal::from_parts(1, 0, 0, false, 4);

/// A (longitude, latitude) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    longitude: Decimal,
    latitude: Decimal,
}

impl Point {
    /// Create a point from decimal longitude and latitude
    pub const fn new(longitude: Decimal, latitude: Decimal) -> Self {
        Self {
            longitude,
            latitude,
        }
    }

    /// Create a point from coordinate literals such as `"-104.945"`
    ///
    /// # Errors
    ///
    /// Returns [`ArtError::InvalidCoordinate`] if either literal is not a decimal number
    pub fn parse(longitude: &str, latitude: &str) -> Result<Self> {
        Ok(Self::new(parse_decimal(longitude)?, parse_decimal(latitude)?))
    }

    /// Longitude at full precision
    pub const fn longitude(&self) -> Decimal {
        self.longitude
    }

    /// Latitude at full precision
    pub const fn latitude(&self) -> Decimal {
        self.latitude
    }

    /// Longitude one default cell to the west
    pub fn shifted_longitude(&self) -> Decimal {
        self.shifted_longitude_by(DEFAULT_SHIFT)
    }

    /// Latitude one default cell to the south
    pub fn shifted_latitude(&self) -> Decimal {
        self.shifted_latitude_by(DEFAULT_SHIFT)
    }

    /// Longitude decreased by `shift`
    pub fn shifted_longitude_by(&self, shift: Decimal) -> Decimal {
        self.longitude - shift
    }

    /// Latitude decreased by `shift`
    pub fn shifted_latitude_by(&self, shift: Decimal) -> Decimal {
        self.latitude - shift
    }

    /// `[longitude, latitude]` truncated to output precision, ready for JSON
    pub fn as_json(&self) -> [f64; 2] {
        [to_output_f64(self.longitude), to_output_f64(self.latitude)]
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{},{}]",
            fixed_point_text(self.longitude),
            fixed_point_text(self.latitude)
        )
    }
}

/// Parse a decimal literal, keeping the literal in the error
///
/// # Errors
///
/// Returns [`ArtError::InvalidCoordinate`] if `text` is not a decimal number
pub fn parse_decimal(text: &str) -> Result<Decimal> {
    Decimal::from_str(text.trim()).map_err(|source| ArtError::InvalidCoordinate {
        value: text.to_string(),
        source,
    })
}

/// Cut `value` at the output precision without rounding
pub fn truncate(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(OUTPUT_PRECISION, RoundingStrategy::ToZero)
}

fn to_output_f64(value: Decimal) -> f64 {
    // Any Decimal is within f64 range, so the conversion cannot fail
    truncate(value).to_f64().unwrap_or_default()
}

fn fixed_point_text(value: Decimal) -> String {
    let normalized = truncate(value).normalize();
    if normalized.scale() == 0 {
        format!("{normalized}.0")
    } else {
        normalized.to_string()
    }
}
