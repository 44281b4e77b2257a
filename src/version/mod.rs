//! Maven version ordering and version range evaluation.

pub mod comparable;
pub mod range;

pub use comparable::MavenVersion;
pub use range::{Bound, Restriction, VersionRange, in_range};
