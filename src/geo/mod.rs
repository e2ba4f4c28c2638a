//! Coordinate primitives
//!
//! This module contains the geometric building blocks:
//! - Decimal coordinate pairs
//! - Fixed-size square cells and their rings

/// Square cells anchored at a north-west corner
pub mod block;
/// Exact decimal coordinate pairs
pub mod point;

pub use block::Block;
pub use point::Point;
