//! Reporting include patterns that match no dependency.

use crate::coordinate::Coordinate;
use crate::descriptor::AssemblyDescriptor;
use crate::matching::matches_any;
use std::fmt;
use std::path::PathBuf;

/// Message attached to every unmatched include.
pub const UNMATCHED_INCLUDE: &str = "Include pattern doesn't match any dependency";

/// An include pattern that selects nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
	/// The descriptor declaring the include.
	pub descriptor: PathBuf,

	/// 1-based line of the `<include>` element.
	pub line: usize,

	/// The include pattern text.
	pub pattern: String,
}

impl fmt::Display for Problem {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{}:{}: {}: {}",
			self.descriptor.display(),
			self.line,
			UNMATCHED_INCLUDE,
			self.pattern
		)
	}
}

/// Check every include of a descriptor against the project's dependencies.
///
/// Problems are returned in document order.
pub fn check_descriptor(
	descriptor: &AssemblyDescriptor,
	dependencies: &[Coordinate],
) -> Vec<Problem> {
	descriptor
		.includes
		.iter()
		.filter(|include| {
			let matched = matches_any(&include.pattern, dependencies);
			tracing::debug!(
				pattern = %include.pattern,
				line = include.line,
				matched,
				"checked include"
			);
			!matched
		})
		.map(|include| Problem {
			descriptor: descriptor.path.clone(),
			line: include.line,
			pattern: include.pattern.clone(),
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::descriptor::IncludePattern;

	fn descriptor(patterns: &[(&str, usize)]) -> AssemblyDescriptor {
		AssemblyDescriptor {
			path: PathBuf::from("src/assembly/dist.xml"),
			includes: patterns
				.iter()
				.map(|(pattern, line)| IncludePattern {
					pattern: pattern.to_string(),
					line: *line,
				})
				.collect(),
		}
	}

	fn dependencies() -> Vec<Coordinate> {
		vec![
			Coordinate::new("org.foo", "bar", None::<String>),
			Coordinate::new("org.foo", "bar", Some("tests")),
			Coordinate::new("com.acme", "widget-core", None::<String>),
		]
	}

	#[test]
	fn test_all_includes_match() {
		let descriptor = descriptor(&[
			("org.foo:*", 3),
			("*:widget-*", 4),
			("org.foo:bar:tests", 5),
		]);
		assert!(check_descriptor(&descriptor, &dependencies()).is_empty());
	}

	#[test]
	fn test_reports_unmatched_includes_in_order() {
		let descriptor = descriptor(&[
			("org.missing:*", 3),
			("org.foo:bar", 4),
			("com.acme:widget-api", 5),
		]);
		let problems = check_descriptor(&descriptor, &dependencies());
		assert_eq!(problems.len(), 2);
		assert_eq!(problems[0].pattern, "org.missing:*");
		assert_eq!(problems[0].line, 3);
		assert_eq!(problems[1].pattern, "com.acme:widget-api");
		assert_eq!(problems[1].line, 5);
	}

	#[test]
	fn test_no_dependencies_flags_everything() {
		let descriptor = descriptor(&[("*", 3)]);
		assert_eq!(check_descriptor(&descriptor, &[]).len(), 1);
	}

	#[test]
	fn test_problem_display() {
		let problem = Problem {
			descriptor: PathBuf::from("dist.xml"),
			line: 12,
			pattern: "org.x:*".to_string(),
		};
		assert_eq!(
			problem.to_string(),
			"dist.xml:12: Include pattern doesn't match any dependency: org.x:*"
		);
	}
}
