use crate::error::{CheckError, Result};
use std::fmt;
use std::str::FromStr;

/// Identity of a dependency as seen by include patterns.
///
/// The version is deliberately absent: assembly include patterns are matched
/// against `groupId:artifactId[:classifier]` only.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Coordinate {
	pub group_id: String,
	pub artifact_id: String,
	pub classifier: Option<String>,
}

impl Coordinate {
	pub fn new(
		group_id: impl Into<String>,
		artifact_id: impl Into<String>,
		classifier: Option<impl Into<String>>,
	) -> Self {
		Coordinate {
			group_id: group_id.into(),
			artifact_id: artifact_id.into(),
			classifier: classifier.map(Into::into).filter(|c: &String| !c.is_empty()),
		}
	}
}

impl fmt::Display for Coordinate {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&build_coordinate(
			&self.group_id,
			&self.artifact_id,
			self.classifier.as_deref(),
		))
	}
}

impl FromStr for Coordinate {
	type Err = CheckError;

	/// Parse `group:artifact` or `group:artifact:classifier`.
	fn from_str(s: &str) -> Result<Self> {
		let invalid = |reason| CheckError::InvalidCoordinate {
			coordinate: s.to_string(),
			reason,
		};

		let parts: Vec<&str> = s.split(':').collect();
		match parts.as_slice() {
			[group, artifact] | [group, artifact, _] if group.is_empty() || artifact.is_empty() => {
				Err(invalid("group and artifact must not be empty"))
			}
			[group, artifact] => Ok(Coordinate::new(*group, *artifact, None::<String>)),
			[group, artifact, classifier] => Ok(Coordinate::new(*group, *artifact, Some(*classifier))),
			_ => Err(invalid("expected group:artifact[:classifier]")),
		}
	}
}

/// Render the canonical match string for a dependency.
///
/// An empty or absent classifier is omitted entirely rather than rendered as
/// an empty trailing segment.
pub fn build_coordinate(group_id: &str, artifact_id: &str, classifier: Option<&str>) -> String {
	match classifier {
		Some(classifier) if !classifier.is_empty() => {
			format!("{group_id}:{artifact_id}:{classifier}")
		}
		_ => format!("{group_id}:{artifact_id}"),
	}
}
