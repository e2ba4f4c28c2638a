//! Conversion constants and runtime configuration defaults

// Grid placement defaults, kept as literals so the CLI can show them verbatim
/// Longitude of the north-west corner of the first cell
pub const ORIGIN_LONGITUDE: &str = "-104.945";
/// Latitude of the north-west corner of the first cell
pub const ORIGIN_LATITUDE: &str = "39.837";
/// Cell size and stride in degrees
pub const SHIFT_AMOUNT: &str = "0.0001";
/// Largest accepted shift in degrees
pub const MAX_SHIFT_DEGREES: u16 = 180;
/// Largest accepted absolute origin longitude
pub const LONGITUDE_LIMIT: u16 = 180;
/// Largest accepted absolute origin latitude
pub const LATITUDE_LIMIT: u16 = 90;

/// Decimal places kept when coordinates are written out
pub const OUTPUT_PRECISION: u32 = 4;

// Glyph handling
/// Character that produces a polygon for its cell
pub const MARKER_GLYPH: char = '*';
/// Character used to pad short rows and to stand for empty image pixels
pub const BLANK_GLYPH: char = ' ';

// Image input thresholds
/// Minimum alpha for a pixel to count as drawn
pub const MARKER_ALPHA_THRESHOLD: u8 = 128;
/// Luma below which a drawn pixel counts as a marker
pub const MARKER_LUMA_THRESHOLD: u8 = 128;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed PNG width or height in pixels
pub const MAX_GRID_DIMENSION: usize = 10_000;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

// File naming
/// Extension of plain-text art sources
pub const TEXT_EXTENSION: &str = "txt";
/// Extension of pixel-art sources
pub const IMAGE_EXTENSION: &str = "png";
/// Extension given to generated documents
pub const OUTPUT_EXTENSION: &str = "geojson";
/// Suffix added to preview image filenames
pub const PREVIEW_SUFFIX: &str = "_preview";
