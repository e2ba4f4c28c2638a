//! Square cells anchored at their north-west corner

use crate::geo::point::{DEFAULT_SHIFT, Point};
use rust_decimal::Decimal;
use std::fmt;

/// One grid cell, described by its north-west corner and side length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    starting_point: Point,
    shift: Decimal,
}

impl Block {
    /// Create a block of the default cell size with `starting_point` as its NW corner
    pub const fn new(starting_point: Point) -> Self {
        Self::with_shift(starting_point, DEFAULT_SHIFT)
    }

    /// Create a block of side `shift` degrees
    pub const fn with_shift(starting_point: Point, shift: Decimal) -> Self {
        Self {
            starting_point,
            shift,
        }
    }

    /// The NW corner the block was built from
    pub const fn starting_point(&self) -> Point {
        self.starting_point
    }

    /// Closed ring NW, NE, SE, SW, NW
    pub fn coordinates(&self) -> [Point; 5] {
        let nw = self.starting_point;
        let next_longitude = nw.shifted_longitude_by(self.shift);
        let next_latitude = nw.shifted_latitude_by(self.shift);

        let ne = Point::new(next_longitude, nw.latitude());
        let se = Point::new(next_longitude, next_latitude);
        let sw = Point::new(nw.longitude(), next_latitude);

        [nw, ne, se, sw, nw]
    }

    /// The ring as JSON-ready coordinate pairs
    pub fn as_json(&self) -> Vec<[f64; 2]> {
        self.coordinates().iter().map(Point::as_json).collect()
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ring = self
            .coordinates()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");
        write!(f, "[{ring}]")
    }
}
