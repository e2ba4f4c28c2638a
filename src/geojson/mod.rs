//! GeoJSON wrappers for blocks

/// Feature collections and their encoding
pub mod collection;
/// Polygon features
pub mod feature;

pub use collection::FeatureCollection;
pub use feature::Feature;
