use crate::error::{CheckError, Result};
use crate::version::comparable::MavenVersion;
use std::cmp::Ordering;

/// A Maven version range expression.
///
/// Supports `[1.0,2.0)`, `[1.0,)`, `(,2.0]`, `[1.5]` (exact) and unions of
/// such intervals like `(,1.0],[1.2,)`. A bare version such as `1.0` is a soft
/// requirement and contains every version.
#[derive(Debug, Clone)]
pub struct VersionRange {
	pub restrictions: Vec<Restriction>,
}

/// One interval of a range. A missing bound is unbounded.
#[derive(Debug, Clone)]
pub struct Restriction {
	pub lower: Option<Bound>,
	pub upper: Option<Bound>,
}

#[derive(Debug, Clone)]
pub struct Bound {
	pub version: MavenVersion,
	pub inclusive: bool,
}

impl VersionRange {
	/// Parse a version range specification.
	pub fn parse(spec: &str) -> Result<Self> {
		let invalid = |reason| CheckError::InvalidVersionRange {
			range: spec.to_string(),
			reason,
		};

		let mut restrictions: Vec<Restriction> = Vec::new();
		let mut rest = spec.trim();

		while rest.starts_with('[') || rest.starts_with('(') {
			let close = rest
				.find([')', ']'])
				.ok_or_else(|| invalid("unbounded range"))?;

			let restriction = Restriction::parse(&rest[..=close]).map_err(invalid)?;

			// An interval may not start below the upper bound of the one before it.
			if let Some(upper) = restrictions.last().and_then(|r| r.upper.as_ref()) {
				match restriction.lower {
					Some(ref lower) if lower.version >= upper.version => {}
					_ => return Err(invalid("ranges overlap")),
				}
			}
			restrictions.push(restriction);

			rest = rest[close + 1..].trim_start();
			if let Some(stripped) = rest.strip_prefix(',') {
				rest = stripped.trim_start();
			}
		}

		if !rest.is_empty() {
			if !restrictions.is_empty() {
				return Err(invalid(
					"only fully-qualified sets allowed in multiple set scenario",
				));
			}
			restrictions.push(Restriction::unbounded());
		}

		Ok(VersionRange { restrictions })
	}

	/// Check if a version falls inside any interval of this range.
	pub fn contains(&self, version: &MavenVersion) -> bool {
		self.restrictions.iter().any(|r| r.contains(version))
	}
}

impl Restriction {
	fn unbounded() -> Self {
		Restriction {
			lower: None,
			upper: None,
		}
	}

	/// Parse a single bracketed interval; `spec` starts with `[`/`(` and ends
	/// with `]`/`)`.
	fn parse(spec: &str) -> std::result::Result<Self, &'static str> {
		let lower_inclusive = spec.starts_with('[');
		let upper_inclusive = spec.ends_with(']');
		let inner = spec[1..spec.len() - 1].trim();

		let Some((lower, upper)) = inner.split_once(',') else {
			if !lower_inclusive || !upper_inclusive {
				return Err("single version must be surrounded by []");
			}
			let version = MavenVersion::parse(inner);
			return Ok(Restriction {
				lower: Some(Bound {
					version: version.clone(),
					inclusive: true,
				}),
				upper: Some(Bound {
					version,
					inclusive: true,
				}),
			});
		};

		let lower = lower.trim();
		let upper = upper.trim();
		if lower == upper {
			return Err("range cannot have identical boundaries");
		}

		let lower = (!lower.is_empty()).then(|| Bound {
			version: MavenVersion::parse(lower),
			inclusive: lower_inclusive,
		});
		let upper = (!upper.is_empty()).then(|| Bound {
			version: MavenVersion::parse(upper),
			inclusive: upper_inclusive,
		});

		if let (Some(l), Some(u)) = (&lower, &upper)
			&& u.version < l.version
		{
			return Err("range defies version ordering");
		}

		Ok(Restriction { lower, upper })
	}

	pub fn contains(&self, version: &MavenVersion) -> bool {
		if let Some(ref lower) = self.lower {
			match version.cmp(&lower.version) {
				Ordering::Less => return false,
				Ordering::Equal if !lower.inclusive => return false,
				_ => {}
			}
		}
		if let Some(ref upper) = self.upper {
			match version.cmp(&upper.version) {
				Ordering::Greater => return false,
				Ordering::Equal if !upper.inclusive => return false,
				_ => {}
			}
		}
		true
	}
}

/// Check whether `version` lies inside `range`.
///
/// An unparseable range is unsatisfiable: it never contains any version.
/// Reporting a possibly-broken include is preferred over silently accepting it.
pub fn in_range(version: &str, range: &str) -> bool {
	match VersionRange::parse(range) {
		Ok(parsed) => parsed.contains(&MavenVersion::parse(version)),
		Err(e) => {
			tracing::debug!(error = %e, "treating unparseable version range as empty");
			false
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn contains(range: &str, version: &str) -> bool {
		VersionRange::parse(range)
			.unwrap()
			.contains(&MavenVersion::parse(version))
	}

	#[test]
	fn test_inclusive_range() {
		assert!(contains("[1.0,2.0]", "1.0"));
		assert!(contains("[1.0,2.0]", "1.5"));
		assert!(contains("[1.0,2.0]", "2.0"));
		assert!(!contains("[1.0,2.0]", "0.9"));
		assert!(!contains("[1.0,2.0]", "2.1"));
	}

	#[test]
	fn test_exclusive_upper() {
		assert!(contains("[1.0,2.0)", "1.0"));
		assert!(contains("[1.0,2.0)", "1.9.9"));
		assert!(!contains("[1.0,2.0)", "2.0"));
		assert!(contains("[1.0,2.0)", "2.0-SNAPSHOT"));
	}

	#[test]
	fn test_exclusive_lower() {
		assert!(!contains("(1.0,2.0]", "1.0"));
		assert!(!contains("(1.0,2.0]", "1.0.0"));
		assert!(contains("(1.0,2.0]", "1.0.1"));
	}

	#[test]
	fn test_open_bounds() {
		assert!(contains("(,2.0)", "0.1"));
		assert!(!contains("(,2.0)", "2.0"));
		assert!(contains("[1.0,)", "99"));
		assert!(!contains("[1.0,)", "0.9"));
	}

	#[test]
	fn test_exact_version() {
		assert!(contains("[1.5]", "1.5"));
		assert!(contains("[1.5]", "1.5.0"));
		assert!(!contains("[1.5]", "1.4"));
		assert!(!contains("[1.5]", "1.6"));
	}

	#[test]
	fn test_union() {
		let range = "(,1.0],[1.2,)";
		assert!(contains(range, "0.5"));
		assert!(contains(range, "1.0"));
		assert!(!contains(range, "1.1"));
		assert!(contains(range, "1.2"));
		assert!(contains(range, "3"));
	}

	#[test]
	fn test_union_after_open_upper_bound() {
		let range = "[1.0,),[2.0,3.0]";
		assert!(contains(range, "2.5"));
		assert!(contains(range, "5.0"));
		assert!(!contains(range, "0.5"));
		assert!(in_range("2.5", range));
	}

	#[test]
	fn test_bare_version_contains_everything() {
		assert!(contains("1.0", "5.0"));
	}

	#[test]
	fn test_whitespace_is_ignored() {
		assert!(contains(" [ 1.0 , 2.0 ) ", "1.5"));
	}

	#[rstest]
	#[case::unclosed("[bad")]
	#[case::unclosed_lower("(1.0,2.0")]
	#[case::single_exclusive("(1.0)")]
	#[case::single_half_open("[1.0)")]
	#[case::identical_bounds("[1.0,1.0]")]
	#[case::both_empty("[,]")]
	#[case::reversed("[2.0,1.0]")]
	#[case::overlapping("[1.0,3.0],[2.0,4.0]")]
	#[case::unbounded_then_more("(,2.0],(,3.0]")]
	#[case::trailing_text("[1.0,2.0]junk")]
	fn test_invalid_ranges(#[case] spec: &str) {
		match VersionRange::parse(spec) {
			Err(CheckError::InvalidVersionRange { range, .. }) => assert_eq!(range, spec),
			other => panic!("Expected InvalidVersionRange for {spec}, got {other:?}"),
		}
	}

	#[test]
	fn test_in_range() {
		assert!(in_range("1.5", "[1.0,2.0)"));
		assert!(!in_range("2.0", "[1.0,2.0)"));
	}

	#[test]
	fn test_in_range_unparseable_is_false() {
		assert!(!in_range("1.0", "[bad"));
		assert!(!in_range("1.0", "[2.0,1.0]"));
	}
}
