//! include-check - verifies that assembly descriptor include patterns match
//! real Maven dependencies.
//!
//! This library provides the core functionality for include-check, including:
//! - Canonical dependency coordinates
//! - Include pattern matching with wildcards and version ranges
//! - Assembly descriptor and POM reading
//! - Configuration file parsing and cascade discovery
//!
//! # Example
//!
//! ```
//! use include_check::{Coordinate, matches_any, matches_pattern};
//!
//! assert!(matches_pattern("org.foo:bar:tests", "org.foo:*:tests"));
//!
//! let dependencies = vec![Coordinate::new("org.foo", "bar", None::<String>)];
//! assert!(matches_any("org.foo:*", &dependencies));
//! assert!(!matches_any("org.baz:*", &dependencies));
//! ```

pub mod check;
pub mod config;
pub mod coordinate;
pub mod descriptor;
pub mod error;
pub mod matching;
pub mod project;
pub mod version;
mod xml;

pub use coordinate::{Coordinate, build_coordinate};
pub use error::{CheckError, Result};
pub use matching::{match_segment, matches_any, matches_pattern};
pub use version::in_range;
