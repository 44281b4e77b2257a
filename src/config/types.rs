use crate::coordinate::Coordinate;
use crate::error::CheckError;
use serde::Deserialize;
use std::path::PathBuf;

/// Top-level configuration from a `.include-check.toml` file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
	/// If true, stop the directory cascade at this file.
	#[serde(default)]
	pub root: bool,

	/// Project POM whose dependencies are checked against.
	/// Relative to the directory containing the config file.
	#[serde(default)]
	pub pom: Option<PathBuf>,

	/// Assembly descriptors to check.
	/// Relative to the directory containing the config file.
	#[serde(default)]
	pub descriptors: Vec<PathBuf>,

	/// Additional dependency coordinates, e.g. ones only known to the build.
	#[serde(default)]
	pub dependencies: Vec<DependencyEntry>,
}

/// A dependency declared directly in a config file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DependencyEntry {
	pub group_id: String,

	pub artifact_id: String,

	#[serde(default)]
	pub classifier: Option<String>,
}

/// A loaded configuration with its source path for debugging/display.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
	/// The parsed configuration.
	pub config: Config,

	/// The path this config was loaded from.
	pub path: PathBuf,
}

/// Merged configuration from multiple config files in the cascade.
#[derive(Debug, Clone, Default)]
pub struct MergedConfig {
	/// First `pom` in cascade order, resolved against its config file.
	pub pom: Option<PathBuf>,

	/// All descriptors from all configs, resolved, in cascade order.
	pub descriptors: Vec<PathBuf>,

	/// All dependencies from all configs, in cascade order.
	pub dependencies: Vec<DependencyWithSource>,
}

/// A dependency with its source config path for debugging/display.
#[derive(Debug, Clone)]
pub struct DependencyWithSource {
	pub coordinate: Coordinate,

	/// The config file this dependency came from.
	pub source: PathBuf,
}

impl DependencyEntry {
	/// Validate that the group and artifact are present.
	pub fn validate(&self) -> Result<(), CheckError> {
		if self.group_id.trim().is_empty() {
			return Err(CheckError::EmptyDependencyField { field: "group_id" });
		}
		if self.artifact_id.trim().is_empty() {
			return Err(CheckError::EmptyDependencyField {
				field: "artifact_id",
			});
		}
		Ok(())
	}

	pub fn coordinate(&self) -> Coordinate {
		Coordinate::new(
			self.group_id.trim(),
			self.artifact_id.trim(),
			self.classifier.as_deref().map(str::trim),
		)
	}
}

impl Config {
	/// Validate all dependencies in this config.
	pub fn validate(&self) -> Result<(), CheckError> {
		for dependency in &self.dependencies {
			dependency.validate()?;
		}
		Ok(())
	}
}
