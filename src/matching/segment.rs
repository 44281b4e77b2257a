use crate::version::in_range;

/// How a single pattern segment is matched against a coordinate segment.
///
/// Rules are tried in declaration order; the first one whose shape fits the
/// pattern decides the outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentRule<'a> {
	/// `*` or an empty segment.
	Any,
	/// `*text*`
	Contains(&'a str),
	/// `*text`
	Suffix(&'a str),
	/// `text*`
	Prefix(&'a str),
	/// `a*b*c`: literal parts that must appear in order without overlap.
	Ordered(Vec<&'a str>),
	/// `[1.0,2.0)` and friends.
	VersionRange(&'a str),
	Exact(&'a str),
}

impl<'a> SegmentRule<'a> {
	/// Classify a pattern segment.
	pub fn classify(pattern: &'a str) -> Self {
		if pattern.is_empty() || pattern == "*" {
			return SegmentRule::Any;
		}

		let leading = pattern.starts_with('*');
		let trailing = pattern.ends_with('*');

		match (leading, trailing) {
			(true, true) => SegmentRule::Contains(&pattern[1..pattern.len() - 1]),
			(true, false) => SegmentRule::Suffix(&pattern[1..]),
			(false, true) => SegmentRule::Prefix(&pattern[..pattern.len() - 1]),
			(false, false) if pattern.contains('*') => {
				SegmentRule::Ordered(pattern.split('*').collect())
			}
			_ if pattern.starts_with('[') || pattern.starts_with('(') => {
				SegmentRule::VersionRange(pattern)
			}
			_ => SegmentRule::Exact(pattern),
		}
	}

	/// Check whether a coordinate segment satisfies this rule.
	pub fn matches(&self, token: &str) -> bool {
		match self {
			SegmentRule::Any => true,
			SegmentRule::Contains(text) => token.contains(text),
			SegmentRule::Suffix(suffix) => token.ends_with(suffix),
			SegmentRule::Prefix(prefix) => token.starts_with(prefix),
			SegmentRule::Ordered(parts) => matches_in_order(token, parts),
			SegmentRule::VersionRange(range) => in_range(token, range),
			SegmentRule::Exact(expected) => token == *expected,
		}
	}
}

/// Each part is located at its first occurrence in `token`, which must start
/// strictly after the end of the previous part's first occurrence.
fn matches_in_order(token: &str, parts: &[&str]) -> bool {
	let mut previous_end: Option<usize> = None;

	for part in parts {
		let Some(start) = token.find(part) else {
			return false;
		};
		if previous_end.is_some_and(|end| start <= end) {
			return false;
		}
		previous_end = Some(start + part.len());
	}

	true
}

/// Match one coordinate segment against one pattern segment.
pub fn match_segment(token: &str, pattern: &str) -> bool {
	SegmentRule::classify(pattern).matches(token)
}
