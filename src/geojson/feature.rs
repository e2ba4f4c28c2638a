//! Single polygon features

use crate::geo::{Block, Point};
use crate::geojson::collection::FeatureCollection;
use serde::Serialize;
use serde_json::{Map, Value};

/// Serialized form of a polygon geometry
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PolygonGeometry {
    /// Always `"Polygon"`
    #[serde(rename = "type")]
    pub ty: &'static str,
    /// Rings of the polygon, outer ring first
    pub coordinates: Vec<Vec<[f64; 2]>>,
}

/// Serialized form of a feature
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct FeatureObject {
    /// Always `"Feature"`
    #[serde(rename = "type")]
    pub ty: &'static str,
    /// Feature properties, always empty
    pub properties: Map<String, Value>,
    /// The polygon geometry
    pub geometry: PolygonGeometry,
}

/// A GeoJSON feature wrapping one block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    block: Block,
}

impl Feature {
    /// Wrap a block
    pub const fn new(block: Block) -> Self {
        Self { block }
    }

    /// The wrapped block
    pub const fn block(&self) -> &Block {
        &self.block
    }

    /// The block's closed ring
    pub fn coordinates(&self) -> [Point; 5] {
        self.block.coordinates()
    }

    /// Append this feature to `collection`
    pub fn add_to(self, collection: &mut FeatureCollection) {
        collection.push(self);
    }

    /// Build the GeoJSON structure for this feature
    pub fn geojson(&self) -> FeatureObject {
        FeatureObject {
            ty: "Feature",
            properties: Map::new(),
            geometry: PolygonGeometry {
                ty: "Polygon",
                coordinates: vec![self.block.as_json()],
            },
        }
    }

    /// Encode the feature as compact JSON text
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.geojson())
    }
}
