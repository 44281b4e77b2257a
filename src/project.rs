//! Declared dependencies of a Maven project, read from its `pom.xml`.
//!
//! Only direct `project/dependencies/dependency` entries are considered.
//! Values are taken literally; `${...}` properties are not interpolated.

use crate::coordinate::Coordinate;
use crate::error::{CheckError, Result};
use crate::xml::{Node, is_at, walk_document};
use std::path::Path;

const DEPENDENCY_PATH: [&str; 3] = ["project", "dependencies", "dependency"];

#[derive(Debug, Default)]
struct PendingDependency {
	group_id: String,
	artifact_id: String,
	classifier: String,
	line: usize,
}

/// Read the declared dependencies of a POM file.
pub fn parse_pom_file(path: &Path) -> Result<Vec<Coordinate>> {
	let content = std::fs::read_to_string(path).map_err(|source| CheckError::DocumentReadError {
		path: path.to_path_buf(),
		source,
	})?;

	parse_pom_str(&content, path)
}

/// Parse the declared dependencies from a POM string (useful for testing).
pub fn parse_pom_str(content: &str, path: &Path) -> Result<Vec<Coordinate>> {
	let mut dependencies = Vec::new();
	let mut current: Option<PendingDependency> = None;

	let is_project = walk_document(content, "project", |node| match node {
		Node::Open { path: at, line } if is_at(at, &DEPENDENCY_PATH) => {
			current = Some(PendingDependency {
				line,
				..Default::default()
			});
		}
		Node::Text { path: at, text } if at.len() == 4 && is_at(&at[..3], &DEPENDENCY_PATH) => {
			if let Some(ref mut pending) = current {
				let field = match at[3].as_str() {
					"groupId" => &mut pending.group_id,
					"artifactId" => &mut pending.artifact_id,
					"classifier" => &mut pending.classifier,
					_ => return,
				};
				field.push_str(text);
			}
		}
		Node::Close { path: at } if is_at(at, &DEPENDENCY_PATH) => {
			if let Some(pending) = current.take() {
				let group_id = pending.group_id.trim();
				let artifact_id = pending.artifact_id.trim();
				if group_id.is_empty() || artifact_id.is_empty() {
					tracing::warn!(
						line = pending.line,
						"skipping dependency without groupId or artifactId"
					);
					return;
				}
				dependencies.push(Coordinate::new(
					group_id,
					artifact_id,
					Some(pending.classifier.trim()),
				));
			}
		}
		_ => {}
	})
	.map_err(|source| CheckError::DocumentParseError {
		path: path.to_path_buf(),
		source,
	})?;

	if !is_project {
		tracing::warn!(path = %path.display(), "not a Maven project file, no dependencies read");
	}

	tracing::debug!(
		path = %path.display(),
		dependencies = dependencies.len(),
		"read project dependencies"
	);

	Ok(dependencies)
}
