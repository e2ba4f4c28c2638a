//! Ordered feature collections and their JSON encoding

use crate::geojson::feature::{Feature, FeatureObject};
use serde::Serialize;

/// Serialized form of a feature collection
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct FeatureCollectionObject {
    /// Always `"FeatureCollection"`
    #[serde(rename = "type")]
    pub ty: &'static str,
    /// Features in insertion order
    pub features: Vec<FeatureObject>,
}

/// Append-only sequence of features
///
/// Features are kept exactly as appended: no deduplication and no
/// validation, so output order is scan order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureCollection {
    features: Vec<Feature>,
}

impl FeatureCollection {
    /// Create an empty collection
    pub const fn new() -> Self {
        Self {
            features: Vec::new(),
        }
    }

    /// Append a feature
    pub fn push(&mut self, feature: Feature) {
        self.features.push(feature);
    }

    /// Number of features collected
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Whether no feature has been collected
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Iterate over features in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Feature> {
        self.features.iter()
    }

    /// Build the GeoJSON structure for the whole collection
    pub fn geojson(&self) -> FeatureCollectionObject {
        FeatureCollectionObject {
            ty: "FeatureCollection",
            features: self.features.iter().map(Feature::geojson).collect(),
        }
    }

    /// Encode the collection as compact JSON text
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.geojson())
    }
}

impl<'a> IntoIterator for &'a FeatureCollection {
    type Item = &'a Feature;
    type IntoIter = std::slice::Iter<'a, Feature>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
