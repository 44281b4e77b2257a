use std::path::PathBuf;

/// Library-level structured errors for include-check.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// The CLI binary wraps these with `anyhow` for rich context chains.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
	#[error("Failed to read config file: {path}")]
	ConfigReadError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse config file: {path}")]
	ConfigParseError {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("Invalid dependency in config: {field} must not be empty")]
	EmptyDependencyField { field: &'static str },

	#[error("Failed to read document: {path}")]
	DocumentReadError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse XML document: {path}")]
	DocumentParseError {
		path: PathBuf,
		#[source]
		source: quick_xml::Error,
	},

	#[error("Invalid coordinate '{coordinate}': {reason}")]
	InvalidCoordinate {
		coordinate: String,
		reason: &'static str,
	},

	#[error("Invalid version range '{range}': {reason}")]
	InvalidVersionRange { range: String, reason: &'static str },

	#[error("Failed to resolve home directory")]
	HomeDirectoryNotFound,
}

/// Result type alias using CheckError.
pub type Result<T> = std::result::Result<T, CheckError>;
