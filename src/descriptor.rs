//! Assembly descriptor reading.
//!
//! Only `<include>` entries of dependency sets are collected:
//! `assembly/dependencySets/dependencySet/includes/include`.

use crate::error::{CheckError, Result};
use crate::xml::{Node, is_at, walk_document};
use std::path::{Path, PathBuf};

const INCLUDE_PATH: [&str; 5] = [
	"assembly",
	"dependencySets",
	"dependencySet",
	"includes",
	"include",
];

/// One `<include>` pattern and where it was declared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncludePattern {
	/// Trimmed pattern text.
	pub pattern: String,

	/// 1-based line of the `<include>` element.
	pub line: usize,
}

/// The dependency-set includes of one assembly descriptor.
#[derive(Debug, Clone)]
pub struct AssemblyDescriptor {
	pub path: PathBuf,
	pub includes: Vec<IncludePattern>,
}

/// Read an assembly descriptor from disk.
///
/// Returns `Ok(None)` if the document's root element is not `<assembly>`.
pub fn parse_descriptor_file(path: &Path) -> Result<Option<AssemblyDescriptor>> {
	let content = std::fs::read_to_string(path).map_err(|source| CheckError::DocumentReadError {
		path: path.to_path_buf(),
		source,
	})?;

	parse_descriptor_str(&content, path)
}

/// Parse an assembly descriptor from a string (useful for testing).
pub fn parse_descriptor_str(content: &str, path: &Path) -> Result<Option<AssemblyDescriptor>> {
	let mut includes = Vec::new();
	let mut current: Option<IncludePattern> = None;

	let is_assembly = walk_document(content, "assembly", |node| match node {
		Node::Open { path: at, line } if is_at(at, &INCLUDE_PATH) => {
			current = Some(IncludePattern {
				pattern: String::new(),
				line,
			});
		}
		Node::Text { path: at, text } if is_at(at, &INCLUDE_PATH) => {
			if let Some(ref mut include) = current {
				include.pattern.push_str(text);
			}
		}
		Node::Close { path: at } if is_at(at, &INCLUDE_PATH) => {
			if let Some(mut include) = current.take() {
				include.pattern = include.pattern.trim().to_string();
				includes.push(include);
			}
		}
		_ => {}
	})
	.map_err(|source| CheckError::DocumentParseError {
		path: path.to_path_buf(),
		source,
	})?;

	if !is_assembly {
		tracing::debug!(path = %path.display(), "not an assembly descriptor");
		return Ok(None);
	}

	tracing::debug!(
		path = %path.display(),
		includes = includes.len(),
		"read assembly descriptor"
	);

	Ok(Some(AssemblyDescriptor {
		path: path.to_path_buf(),
		includes,
	}))
}
