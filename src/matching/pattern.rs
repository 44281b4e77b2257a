use crate::coordinate::Coordinate;
use crate::matching::segment::match_segment;

/// Check whether an include pattern matches a coordinate string.
///
/// Both strings are split on `:` and compared segment by segment. Against a
/// shorter coordinate, a five-segment pattern must hold `*` in its fourth
/// segment (the packaging slot). That segment is dropped and the pattern is
/// matched as its first three segments plus the classifier. A pattern
/// starting with `*` that is shorter than the coordinate is also tried
/// right-aligned. When no structural match exists, the pattern still matches
/// if it occurs verbatim inside the coordinate.
pub fn matches_pattern(coordinate: &str, pattern: &str) -> bool {
	let tokens: Vec<&str> = coordinate.split(':').collect();
	let mut pattern_tokens: Vec<&str> = pattern.split(':').collect();

	if pattern_tokens.len() == 5 && tokens.len() < 5 {
		if pattern_tokens[3] != "*" {
			tracing::trace!(coordinate, pattern, "packaging slot is not a wildcard");
			return false;
		}
		pattern_tokens = vec![
			pattern_tokens[0],
			pattern_tokens[1],
			pattern_tokens[2],
			pattern_tokens[4],
		];
	}

	let mut matched =
		pattern_tokens.len() <= tokens.len() && aligned_at(&tokens, &pattern_tokens, 0);

	// Leading '*' patterns like '*:jar:*' really match from the end.
	if !matched && pattern_tokens.len() < tokens.len() && pattern_tokens[0] == "*" {
		let offset = tokens.len() - pattern_tokens.len();
		matched = aligned_at(&tokens, &pattern_tokens, offset);
		if matched {
			tracing::trace!(coordinate, pattern, offset, "matched right-aligned");
		}
	}

	if matched {
		return true;
	}

	let contained = coordinate.contains(pattern);
	if contained {
		tracing::trace!(coordinate, pattern, "matched by containment");
	}
	contained
}

/// Match every pattern token against the coordinate tokens starting at `offset`.
fn aligned_at(tokens: &[&str], pattern_tokens: &[&str], offset: usize) -> bool {
	pattern_tokens
		.iter()
		.zip(&tokens[offset..])
		.all(|(pattern, token)| match_segment(token, pattern))
}

/// Check whether an include pattern matches at least one of the coordinates.
pub fn matches_any(pattern: &str, coordinates: &[Coordinate]) -> bool {
	coordinates
		.iter()
		.any(|coordinate| matches_pattern(&coordinate.to_string(), pattern))
}
