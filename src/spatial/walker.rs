//! Row-major scan turning marked cells into polygon features
//!
//! The walker keeps a longitude cursor that starts at the origin for every
//! row and steps by the shift for every glyph, marked or not. Each new row
//! starts one shift further south. Columns advance towards decreasing
//! longitude, so the art comes out mirrored east-west on a map.

use crate::geo::point::{DEFAULT_SHIFT, parse_decimal};
use crate::geo::{Block, Point};
use crate::geojson::{Feature, FeatureCollection};
use crate::io::configuration::{LATITUDE_LIMIT, LONGITUDE_LIMIT, MARKER_GLYPH, MAX_SHIFT_DEGREES};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::grid::ArtGrid;
use rust_decimal::Decimal;

/// Placement parameters for a walk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalkerConfig {
    /// North-west corner of the first cell
    pub origin: Point,
    /// Cell size and stride in degrees
    pub shift: Decimal,
    /// Glyph that produces a feature
    pub marker: char,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            origin: Point::new(
                Decimal::from_parts(104_945, 0, 0, true, 3),
                Decimal::from_parts(39_837, 0, 0, false, 3),
            ),
            shift: DEFAULT_SHIFT,
            marker: MARKER_GLYPH,
        }
    }
}

impl WalkerConfig {
    /// Build a configuration from coordinate and shift literals
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A literal is not a decimal number
    /// - The origin lies outside `[-180, 180]` x `[-90, 90]`
    /// - The shift is zero, negative, or above [`MAX_SHIFT_DEGREES`]
    pub fn parse(longitude: &str, latitude: &str, shift: &str, marker: char) -> Result<Self> {
        let origin = Point::parse(longitude, latitude)?;
        if origin.longitude().abs() > Decimal::from(LONGITUDE_LIMIT) {
            return Err(invalid_parameter(
                "longitude",
                &longitude,
                &format!("must be within ±{LONGITUDE_LIMIT} degrees"),
            ));
        }
        if origin.latitude().abs() > Decimal::from(LATITUDE_LIMIT) {
            return Err(invalid_parameter(
                "latitude",
                &latitude,
                &format!("must be within ±{LATITUDE_LIMIT} degrees"),
            ));
        }

        let shift_value = parse_decimal(shift)?;
        if shift_value <= Decimal::ZERO {
            return Err(invalid_parameter("shift", &shift, &"must be positive"));
        }
        if shift_value > Decimal::from(MAX_SHIFT_DEGREES) {
            return Err(invalid_parameter(
                "shift",
                &shift,
                &format!("must not exceed {MAX_SHIFT_DEGREES} degrees"),
            ));
        }

        Ok(Self {
            origin,
            shift: shift_value,
            marker,
        })
    }
}

/// Converts glyph grids into feature collections
#[derive(Debug, Clone, Copy, Default)]
pub struct GridWalker {
    config: WalkerConfig,
}

impl GridWalker {
    /// Create a walker with the given placement
    pub const fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    /// Placement this walker uses
    pub const fn config(&self) -> &WalkerConfig {
        &self.config
    }

    /// Scan every cell and collect a feature per marked glyph
    pub fn walk(&self, grid: &ArtGrid) -> FeatureCollection {
        self.walk_with_progress(grid, |_| {})
    }

    /// Like [`GridWalker::walk`], reporting the number of finished rows after each row
    pub fn walk_with_progress<F>(&self, grid: &ArtGrid, mut on_row: F) -> FeatureCollection
    where
        F: FnMut(usize),
    {
        let WalkerConfig {
            origin,
            shift,
            marker,
        } = self.config;

        let mut collection = FeatureCollection::new();
        let mut line_latitude = origin.latitude();

        for (row_index, row) in grid.row_iter().enumerate() {
            let mut current_longitude = origin.longitude();

            for &glyph in &row {
                let current_point = Point::new(current_longitude, line_latitude);
                let block = Block::with_shift(current_point, shift);

                if glyph == marker {
                    Feature::new(block).add_to(&mut collection);
                }

                current_longitude = current_point.shifted_longitude_by(shift);
            }

            line_latitude =
                Point::new(origin.longitude(), line_latitude).shifted_latitude_by(shift);
            on_row(row_index + 1);
        }

        collection
    }
}
