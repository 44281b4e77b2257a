//! Maven version ordering.
//!
//! Versions are split into a tree of items on `.`, `-` and digit/letter
//! transitions. Each `-` and each transition opens a nested list, so
//! `1.0-alpha-1` becomes `[1, [alpha, [1]]]`. Trailing null items (`0` and the
//! empty release qualifier) are dropped, which makes `1`, `1.0` and `1.0.0`
//! equal.
//!
//! Qualifier ordering:
//! `alpha` < `beta` < `milestone` < `rc` < `snapshot` < `""` (release) < `sp`
//! < any other qualifier (compared lexically).

use std::cmp::Ordering;
use std::fmt;

const QUALIFIERS: [&str; 7] = ["alpha", "beta", "milestone", "rc", "snapshot", "", "sp"];

/// Index of the release qualifier in `QUALIFIERS`, as a comparable key.
const RELEASE_QUALIFIER_KEY: &str = "5";

/// A parsed Maven version with comparable items.
#[derive(Debug, Clone)]
pub struct MavenVersion {
	pub original: String,
	items: Vec<Item>,
}

#[derive(Debug, Clone)]
enum Item {
	/// Decimal digits with leading zeros stripped; empty for zero.
	Int(String),
	/// Qualifier after alias normalisation.
	Str(String),
	List(Vec<Item>),
}

impl MavenVersion {
	pub fn parse(version: &str) -> Self {
		MavenVersion {
			original: version.to_string(),
			items: parse_items(version),
		}
	}
}

impl fmt::Display for MavenVersion {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.original)
	}
}

impl PartialEq for MavenVersion {
	fn eq(&self, other: &Self) -> bool {
		self.cmp(other) == Ordering::Equal
	}
}

impl Eq for MavenVersion {}

impl Ord for MavenVersion {
	fn cmp(&self, other: &Self) -> Ordering {
		compare_lists(&self.items, &other.items)
	}
}

impl PartialOrd for MavenVersion {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

fn parse_items(version: &str) -> Vec<Item> {
	let version = version.to_lowercase();

	// Innermost list last; each list is the final element of its parent.
	let mut stack: Vec<Vec<Item>> = vec![Vec::new()];
	let mut is_digit = false;
	let mut start = 0;

	for (i, c) in version.char_indices() {
		if c == '.' || c == '-' {
			let item = if i == start {
				Item::Int(String::new())
			} else {
				parse_item(is_digit, &version[start..i])
			};
			push_item(&mut stack, item);
			start = i + 1;
			if c == '-' {
				stack.push(Vec::new());
			}
		} else if c.is_ascii_digit() {
			if !is_digit && i > start {
				push_item(&mut stack, string_item(&version[start..i], true));
				start = i;
				stack.push(Vec::new());
			}
			is_digit = true;
		} else {
			if is_digit && i > start {
				push_item(&mut stack, parse_item(true, &version[start..i]));
				start = i;
				stack.push(Vec::new());
			}
			is_digit = false;
		}
	}

	if version.len() > start {
		push_item(&mut stack, parse_item(is_digit, &version[start..]));
	}

	while stack.len() > 1 {
		let mut list = stack.pop().unwrap_or_default();
		normalize(&mut list);
		push_item(&mut stack, Item::List(list));
	}

	let mut root = stack.pop().unwrap_or_default();
	normalize(&mut root);
	root
}

fn push_item(stack: &mut [Vec<Item>], item: Item) {
	if let Some(list) = stack.last_mut() {
		list.push(item);
	}
}

fn parse_item(is_digit: bool, text: &str) -> Item {
	if is_digit {
		Item::Int(text.trim_start_matches('0').to_string())
	} else {
		string_item(text, false)
	}
}

fn string_item(text: &str, followed_by_digit: bool) -> Item {
	let value = match text {
		"a" if followed_by_digit => "alpha",
		"b" if followed_by_digit => "beta",
		"m" if followed_by_digit => "milestone",
		"ga" | "final" | "release" => "",
		"cr" => "rc",
		other => other,
	};
	Item::Str(value.to_string())
}

/// Drop trailing null items, looking through nested lists.
fn normalize(list: &mut Vec<Item>) {
	let mut i = list.len();
	while i > 0 {
		i -= 1;
		if is_null(&list[i]) {
			list.remove(i);
		} else if !matches!(list[i], Item::List(_)) {
			break;
		}
	}
}

fn is_null(item: &Item) -> bool {
	match item {
		Item::Int(digits) => digits.is_empty(),
		Item::Str(value) => value.is_empty(),
		Item::List(items) => items.is_empty(),
	}
}

fn qualifier_key(qualifier: &str) -> String {
	match QUALIFIERS.iter().position(|q| *q == qualifier) {
		Some(index) => index.to_string(),
		None => format!("{}-{}", QUALIFIERS.len(), qualifier),
	}
}

fn compare_digits(a: &str, b: &str) -> Ordering {
	a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Compare `item` against `other`, where `None` stands for a missing item.
fn compare_item(item: &Item, other: Option<&Item>) -> Ordering {
	match (item, other) {
		(Item::Int(digits), None) => {
			if digits.is_empty() {
				Ordering::Equal
			} else {
				Ordering::Greater
			}
		}
		(Item::Int(a), Some(Item::Int(b))) => compare_digits(a, b),
		(Item::Int(_), Some(_)) => Ordering::Greater,

		(Item::Str(value), None) => qualifier_key(value).as_str().cmp(RELEASE_QUALIFIER_KEY),
		(Item::Str(_), Some(Item::Int(_))) => Ordering::Less,
		(Item::Str(a), Some(Item::Str(b))) => qualifier_key(a).cmp(&qualifier_key(b)),
		(Item::Str(_), Some(Item::List(_))) => Ordering::Less,

		(Item::List(items), None) => match items.first() {
			Some(first) => compare_item(first, None),
			None => Ordering::Equal,
		},
		(Item::List(_), Some(Item::Int(_))) => Ordering::Less,
		(Item::List(_), Some(Item::Str(_))) => Ordering::Greater,
		(Item::List(a), Some(Item::List(b))) => compare_lists(a, b),
	}
}

fn compare_lists(left: &[Item], right: &[Item]) -> Ordering {
	let len = left.len().max(right.len());
	for i in 0..len {
		let ord = match (left.get(i), right.get(i)) {
			(None, None) => Ordering::Equal,
			(None, Some(r)) => compare_item(r, None).reverse(),
			(Some(l), r) => compare_item(l, r),
		};
		if ord != Ordering::Equal {
			return ord;
		}
	}
	Ordering::Equal
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn v(s: &str) -> MavenVersion {
		MavenVersion::parse(s)
	}

	#[test]
	fn test_basic_ordering() {
		assert!(v("1.0") < v("2.0"));
		assert!(v("1.0.0") < v("1.0.1"));
		assert!(v("1.0.1") < v("1.1.0"));
		assert!(v("1.9") < v("1.10"));
	}

	#[test]
	fn test_trailing_zeros_equal() {
		assert_eq!(v("1"), v("1.0"));
		assert_eq!(v("1.0"), v("1.0.0"));
		assert_eq!(v("1.0-ga"), v("1.0"));
		assert_eq!(v("1.0-final"), v("1"));
	}

	#[rstest]
	#[case::alpha_beta("1.0-alpha", "1.0-beta")]
	#[case::beta_milestone("1.0-beta", "1.0-milestone")]
	#[case::milestone_rc("1.0-milestone", "1.0-rc")]
	#[case::rc_snapshot("1.0-rc", "1.0-SNAPSHOT")]
	#[case::snapshot_release("1.0-SNAPSHOT", "1.0")]
	#[case::release_sp("1.0", "1.0-sp")]
	#[case::sp_unknown("1.0-sp", "1.0-foo")]
	#[case::short_alpha("1.0-a1", "1.0-b1")]
	#[case::numbered_alpha("1.0-alpha-1", "1.0-alpha-2")]
	#[case::qualifier_before_number("1.0-jre", "1.0.1")]
	#[case::cr_is_rc("1.0-cr1", "1.0")]
	fn test_qualifier_ordering(#[case] lower: &str, #[case] higher: &str) {
		assert!(v(lower) < v(higher), "{lower} should sort before {higher}");
	}

	#[test]
	fn test_aliases() {
		assert_eq!(v("1.0-cr1"), v("1.0-rc1"));
		assert_eq!(v("1.0-a1"), v("1.0-alpha1"));
		assert_eq!(v("1.0-m2"), v("1.0-milestone-2"));
	}

	#[test]
	fn test_case_insensitive() {
		assert_eq!(v("1.0-SNAPSHOT"), v("1.0-snapshot"));
		assert_eq!(v("1.0-RC1"), v("1.0-rc1"));
	}

	#[test]
	fn test_large_numbers() {
		assert!(v("1.99999999999999999999") < v("1.100000000000000000000"));
		assert_eq!(v("1.007"), v("1.7"));
	}

	#[test]
	fn test_guava_style() {
		assert!(v("31.0-jre") < v("32.0-jre"));
		assert!(v("31.1-android") < v("31.1-jre"));
	}

	#[test]
	fn test_display_keeps_original() {
		assert_eq!(v("1.8.0-RC1").to_string(), "1.8.0-RC1");
	}

	#[test]
	fn test_empty_version() {
		assert_eq!(v(""), v("0"));
		assert!(v("") < v("0.1"));
	}
}
