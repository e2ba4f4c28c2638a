//! Tests for feature collections and compact JSON encoding

#[cfg(test)]
mod tests {
    use geojson_art::geo::{Block, Point};
    use geojson_art::geojson::{Feature, FeatureCollection};

    fn feature_at(longitude: &str, latitude: &str) -> Feature {
        Feature::new(Block::new(Point::parse(longitude, latitude).unwrap()))
    }

    // Tests empty collection encoding
    // Verified by omitting empty feature arrays
    #[test]
    fn test_empty_collection_json() {
        let collection = FeatureCollection::new();

        assert!(collection.is_empty());
        assert_eq!(
            collection.to_json().unwrap(),
            r#"{"type":"FeatureCollection","features":[]}"#
        );
    }

    // Tests default matches new
    // Verified by seeding default with a feature
    #[test]
    fn test_default_is_empty() {
        assert_eq!(FeatureCollection::default(), FeatureCollection::new());
    }

    // Tests insertion order is kept in output
    // Verified by sorting features by coordinate
    #[test]
    fn test_insertion_order() {
        let mut collection = FeatureCollection::new();
        collection.push(feature_at("5", "5"));
        collection.push(feature_at("1", "1"));

        let object = collection.geojson();
        assert_eq!(object.ty, "FeatureCollection");
        assert_eq!(object.features.len(), 2);
        assert_eq!(object.features[0].geometry.coordinates[0][0], [5.0, 5.0]);
        assert_eq!(object.features[1].geometry.coordinates[0][0], [1.0, 1.0]);
    }

    // Tests duplicates are kept verbatim
    // Verified by deduplicating on push
    #[test]
    fn test_duplicates_kept() {
        let mut collection = FeatureCollection::new();
        collection.push(feature_at("1", "1"));
        collection.push(feature_at("1", "1"));

        assert_eq!(collection.len(), 2);
        assert_eq!((&collection).into_iter().count(), 2);
    }

    // Tests JSON is compact
    // Verified by switching to pretty printing
    #[test]
    fn test_json_is_compact() {
        let mut collection = FeatureCollection::new();
        collection.push(feature_at("-104.945", "39.837"));

        let json = collection.to_json().unwrap();
        assert!(json.starts_with(r#"{"type":"FeatureCollection","features":[{"type":"Feature""#));
        assert!(!json.contains(' '));
        assert!(!json.contains('\n'));
    }
}
