//! Glyph grids read from ASCII art
//!
//! Each line of the source becomes a row and each character a cell. Rows
//! shorter than the longest one are padded with blank glyphs, which never
//! match a marker and so only extend the row with empty cells.

use crate::io::configuration::{BLANK_GLYPH, MAX_GRID_DIMENSION};
use crate::io::error::{ArtError, Result};
use ndarray::{Array2, ArrayView1};

/// Rectangular grid of glyphs in source order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtGrid {
    glyphs: Array2<char>,
}

impl ArtGrid {
    /// Build a grid from multi-line text
    ///
    /// Line terminators (`\n` or `\r\n`) separate rows and are not cells.
    /// Text of any width or height is accepted.
    pub fn from_text(text: &str) -> Self {
        let lines: Vec<&str> = text.lines().collect();
        let rows = lines.len();
        let cols = lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);

        let mut glyphs = Array2::from_elem((rows, cols), BLANK_GLYPH);
        for (row, line) in lines.iter().enumerate() {
            for (col, glyph) in line.chars().enumerate() {
                if let Some(cell) = glyphs.get_mut((row, col)) {
                    *cell = glyph;
                }
            }
        }

        Self { glyphs }
    }

    /// Wrap an existing glyph array
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension exceeds [`MAX_GRID_DIMENSION`]
    pub fn from_glyphs(glyphs: Array2<char>) -> Result<Self> {
        let (rows, cols) = glyphs.dim();
        check_dimensions(rows, cols)?;
        Ok(Self { glyphs })
    }

    /// Get the number of rows in the grid
    pub fn rows(&self) -> usize {
        self.glyphs.nrows()
    }

    /// Get the number of columns in the grid
    pub fn cols(&self) -> usize {
        self.glyphs.ncols()
    }

    /// Glyph at `(row, col)`, if inside the grid
    pub fn glyph(&self, row: usize, col: usize) -> Option<char> {
        self.glyphs.get((row, col)).copied()
    }

    /// Iterate rows top to bottom
    pub fn row_iter(&self) -> impl Iterator<Item = ArrayView1<'_, char>> {
        self.glyphs.rows().into_iter()
    }

    /// Number of cells holding `glyph`
    pub fn count(&self, glyph: char) -> usize {
        self.glyphs.iter().filter(|&&cell| cell == glyph).count()
    }
}

fn check_dimensions(rows: usize, cols: usize) -> Result<()> {
    if rows > MAX_GRID_DIMENSION || cols > MAX_GRID_DIMENSION {
        return Err(ArtError::InvalidSourceData {
            reason: format!(
                "grid of {rows}x{cols} cells exceeds the {MAX_GRID_DIMENSION} cell limit"
            ),
        });
    }
    Ok(())
}
