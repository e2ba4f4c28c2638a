//! Converts ASCII art into GeoJSON, one square polygon per marked character
//!
//! Each character of the art is a cell on a regular latitude/longitude grid.
//! Cells holding the marker glyph become `Polygon` features, collected in
//! scan order into a single `FeatureCollection`.

#![forbid(unsafe_code)]

/// Decimal coordinates and square cells
pub mod geo;
/// GeoJSON features and collections
pub mod geojson;
/// Input/output operations and error handling
pub mod io;
/// Glyph grids and the scan that converts them
pub mod spatial;

pub use io::error::{ArtError, Result};
