//! Include pattern matching for dependency coordinates.
//!
//! This module handles:
//! - Splitting coordinates and patterns into colon-delimited segments
//! - Per-segment wildcard and version range rules

pub mod pattern;
pub mod segment;

pub use pattern::{matches_any, matches_pattern};
pub use segment::{SegmentRule, match_segment};
