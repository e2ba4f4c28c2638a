//! Glyph grids and the scan that turns them into features
//!
//! This module contains spatial-related functionality including:
//! - Grid construction from text
//! - Row-major walking with a decimal coordinate cursor

/// Glyph grid storage
pub mod grid;
/// Grid walking and feature emission
pub mod walker;

pub use grid::ArtGrid;
pub use walker::{GridWalker, WalkerConfig};
