//! Command-line interface for batch converting ASCII art files to GeoJSON

use crate::io::configuration::{
    IMAGE_EXTENSION, MARKER_GLYPH, ORIGIN_LATITUDE, ORIGIN_LONGITUDE, OUTPUT_EXTENSION,
    PREVIEW_SUFFIX, SHIFT_AMOUNT, TEXT_EXTENSION,
};
use crate::io::error::{Result, WithPath, invalid_target};
use crate::io::image::{export_preview_png, grid_from_png};
use crate::io::output::write_geojson;
use crate::io::progress::ProgressManager;
use crate::spatial::{ArtGrid, GridWalker, WalkerConfig};
use clap::Parser;
use log::{debug, info};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "geojson-art")]
#[command(
    author,
    version,
    about = "Turn ASCII art into a GeoJSON collection of square polygons"
)]
/// Command-line arguments for the converter
pub struct Cli {
    /// Art file (.txt or .png) or directory of art files to convert
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Longitude of the north-west corner of the first cell
    #[arg(long, allow_hyphen_values = true, default_value = ORIGIN_LONGITUDE)]
    pub longitude: String,

    /// Latitude of the north-west corner of the first cell
    #[arg(long, allow_hyphen_values = true, default_value = ORIGIN_LATITUDE)]
    pub latitude: String,

    /// Cell size in degrees
    #[arg(long, default_value = SHIFT_AMOUNT)]
    pub shift: String,

    /// Character that marks a filled cell
    #[arg(short, long, default_value_t = MARKER_GLYPH)]
    pub marker: char,

    /// Output path (single file targets only, defaults to <TARGET>.geojson)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Leave inputs alone when their output already exists
    #[arg(short, long)]
    pub skip_existing: bool,

    /// Also write a PNG rendering of the marked cells
    #[arg(short, long)]
    pub preview: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Default log filter for this invocation
    pub const fn log_level(&self) -> &'static str {
        if self.quiet { "warn" } else { "info" }
    }

    /// Placement parsed from the coordinate arguments
    ///
    /// # Errors
    ///
    /// Returns an error if a coordinate or the shift is malformed
    pub fn walker_config(&self) -> Result<WalkerConfig> {
        WalkerConfig::parse(&self.longitude, &self.latitude, &self.shift, self.marker)
    }
}

/// Orchestrates batch conversion of art files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Convert files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if argument validation, reading, or writing fails
    pub fn process(&mut self) -> Result<()> {
        let walker = GridWalker::new(self.cli.walker_config()?);

        if self.cli.output.is_some() && self.cli.target.is_dir() {
            return Err(invalid_target(
                &self.cli.target,
                "--output can only be used with a single file",
            ));
        }

        let files = self.collect_files()?;

        if files.is_empty() {
            info!("Nothing to convert in {}", self.cli.target.display());
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for (index, file) in files.iter().enumerate() {
            self.process_file(&walker, file, index)?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if self.should_process_file(&self.cli.target) {
                Ok(vec![self.cli.target.clone()])
            } else {
                Ok(vec![])
            }
        } else if self.cli.target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(&self.cli.target).with_path(&self.cli.target, "list")? {
                let path = entry?.path();
                if is_art_file(&path) && self.should_process_file(&path) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_target(
                &self.cli.target,
                "Target must be an art file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing {
            return true;
        }

        let output_path = self.output_path(input_path);
        if output_path.exists() {
            info!("Skipping: {} (output exists)", input_path.display());
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, walker: &GridWalker, input_path: &Path, index: usize) -> Result<()> {
        let output_path = self.output_path(input_path);
        if is_same_file(&output_path, input_path) {
            return Err(invalid_target(
                input_path,
                "Output would overwrite the input file",
            ));
        }

        let grid = load_grid(input_path, walker.config().marker)?;
        debug!(
            "Loaded {}: {}x{} cells, {} marked",
            input_path.display(),
            grid.rows(),
            grid.cols(),
            grid.count(walker.config().marker)
        );

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(index, input_path, grid.rows());
        }

        let collection = match self.progress_manager.as_mut() {
            Some(pm) => walker.walk_with_progress(&grid, |rows| pm.update_row(index, rows)),
            None => walker.walk(&grid),
        };

        write_geojson(&collection, &output_path)?;
        info!("Wrote art to {}", output_path.display());

        if self.cli.preview {
            let preview_path = Self::preview_path(&output_path);
            export_preview_png(&grid, walker.config().marker, &preview_path)?;
            info!("Wrote preview to {}", preview_path.display());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(index, collection.len());
        }

        Ok(())
    }

    fn output_path(&self, input_path: &Path) -> PathBuf {
        self.cli
            .output
            .clone()
            .unwrap_or_else(|| input_path.with_extension(OUTPUT_EXTENSION))
    }

    fn preview_path(output_path: &Path) -> PathBuf {
        let stem = output_path.file_stem().unwrap_or_default();
        let preview_name = format!(
            "{}{PREVIEW_SUFFIX}.{IMAGE_EXTENSION}",
            stem.to_string_lossy()
        );
        output_path.with_file_name(preview_name)
    }
}

/// Read a text or PNG art file into a glyph grid
///
/// Files ending in `.png` are decoded as pixel art; anything else is read
/// as text, with invalid UTF-8 replaced rather than rejected.
///
/// # Errors
///
/// Returns an error if the file cannot be read or decoded, or is a PNG
/// larger than the grid limit
pub fn load_grid(path: &Path, marker: char) -> Result<ArtGrid> {
    if has_extension(path, IMAGE_EXTENSION) {
        return grid_from_png(path, marker);
    }

    let bytes = std::fs::read(path).with_path(path, "read")?;
    Ok(ArtGrid::from_text(&String::from_utf8_lossy(&bytes)))
}

// Falls back to comparing the paths as given when either cannot be resolved
fn is_same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

fn is_art_file(path: &Path) -> bool {
    has_extension(path, TEXT_EXTENSION) || has_extension(path, IMAGE_EXTENSION)
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
}
