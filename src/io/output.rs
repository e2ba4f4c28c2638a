//! GeoJSON document writing

use crate::geojson::FeatureCollection;
use crate::io::error::{ArtError, Result, WithPath};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write `collection` as compact GeoJSON, replacing any existing file
///
/// The file is written in place, so a failure part way through can leave
/// a truncated document behind.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be created or written
/// - Serialization fails
pub fn write_geojson(collection: &FeatureCollection, output_path: &Path) -> Result<()> {
    let file = File::create(output_path).with_path(output_path, "create")?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer(&mut writer, &collection.geojson()).map_err(|source| {
        ArtError::Serialization {
            path: output_path.to_path_buf(),
            source,
        }
    })?;

    writer.flush().with_path(output_path, "write")?;
    Ok(())
}
