use crate::config::parser::parse_config_file;
use crate::config::types::{DependencyWithSource, LoadedConfig, MergedConfig};
use crate::error::{CheckError, Result};
use std::path::{Path, PathBuf};

/// Name of the per-directory and per-user config file.
pub const CONFIG_FILE_NAME: &str = ".include-check.toml";

/// Environment variable that, when truthy, skips `~/.include-check.toml`.
pub const NO_USER_CONFIG_ENV: &str = "INCLUDE_CHECK_NO_USER_CONFIG";

/// Discover and load all config files in the cascade.
///
/// The cascade order is:
/// 1. Start from `start_dir` and look for `.include-check.toml`
/// 2. Continue up the directory tree until a file with `root = true`
/// 3. Finally, check ~/.include-check.toml (unless disabled)
///
/// Returns configs in cascade order (most specific first).
pub fn discover_configs(start_dir: &Path) -> Result<Vec<LoadedConfig>> {
	let mut configs = Vec::new();
	let mut current_dir = Some(start_dir);

	while let Some(dir) = current_dir {
		let config_path = dir.join(CONFIG_FILE_NAME);

		if config_path.exists() {
			let config = parse_config_file(&config_path)?;
			tracing::debug!(path = %config_path.display(), root = config.root, "loaded config");

			let is_root = config.root;
			configs.push(LoadedConfig {
				config,
				path: config_path,
			});

			if is_root {
				break;
			}
		}

		current_dir = dir.parent();
	}

	if let Some(user_config) = load_user_config(&configs)? {
		configs.push(user_config);
	}

	Ok(configs)
}

/// Load the user's ~/.include-check.toml if it exists and isn't disabled.
fn load_user_config(existing_configs: &[LoadedConfig]) -> Result<Option<LoadedConfig>> {
	if is_env_truthy(NO_USER_CONFIG_ENV) {
		return Ok(None);
	}

	let user_config_path = user_config_path()?;

	// Already picked up while walking a tree below the home directory
	if existing_configs.iter().any(|c| c.path == user_config_path) {
		return Ok(None);
	}

	if user_config_path.exists() {
		let config = parse_config_file(&user_config_path)?;
		Ok(Some(LoadedConfig {
			config,
			path: user_config_path,
		}))
	} else {
		Ok(None)
	}
}

/// Check if an environment variable is set to a truthy value.
fn is_env_truthy(var_name: &str) -> bool {
	match std::env::var(var_name) {
		Ok(value) => {
			let lower = value.to_lowercase();
			!value.is_empty() && lower != "0" && lower != "false" && lower != "no"
		}
		Err(_) => false,
	}
}

/// Merge multiple configs into a single effective config.
///
/// Descriptors and dependencies are collected in cascade order; the most
/// specific `pom` wins. Relative paths are resolved against the directory of
/// the config file that declared them.
pub fn merge_configs(configs: &[LoadedConfig]) -> MergedConfig {
	let mut merged = MergedConfig::default();

	for loaded in configs {
		let base = loaded.path.parent().unwrap_or(Path::new("."));

		if merged.pom.is_none()
			&& let Some(ref pom) = loaded.config.pom
		{
			merged.pom = Some(base.join(pom));
		}

		merged
			.descriptors
			.extend(loaded.config.descriptors.iter().map(|d| base.join(d)));

		for dependency in &loaded.config.dependencies {
			merged.dependencies.push(DependencyWithSource {
				coordinate: dependency.coordinate(),
				source: loaded.path.clone(),
			});
		}
	}

	merged
}

/// Convenience function to discover, load, and merge configs from a directory.
pub fn load_merged_config(start_dir: &Path) -> Result<MergedConfig> {
	let configs = discover_configs(start_dir)?;
	Ok(merge_configs(&configs))
}

/// Get the path to the user's config file.
pub fn user_config_path() -> Result<PathBuf> {
	let home_dir = dirs::home_dir().ok_or(CheckError::HomeDirectoryNotFound)?;
	Ok(home_dir.join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::types::{Config, DependencyEntry};

	#[test]
	fn test_is_env_truthy() {
		// SAFETY: These env var operations are safe in single-threaded test context
		unsafe {
			std::env::remove_var("TEST_INCLUDE_CHECK_ENV_1");
			assert!(!is_env_truthy("TEST_INCLUDE_CHECK_ENV_1"));

			std::env::set_var("TEST_INCLUDE_CHECK_ENV_2", "");
			assert!(!is_env_truthy("TEST_INCLUDE_CHECK_ENV_2"));

			std::env::set_var("TEST_INCLUDE_CHECK_ENV_3", "0");
			assert!(!is_env_truthy("TEST_INCLUDE_CHECK_ENV_3"));

			std::env::set_var("TEST_INCLUDE_CHECK_ENV_4", "FALSE");
			assert!(!is_env_truthy("TEST_INCLUDE_CHECK_ENV_4"));

			std::env::set_var("TEST_INCLUDE_CHECK_ENV_5", "no");
			assert!(!is_env_truthy("TEST_INCLUDE_CHECK_ENV_5"));

			std::env::set_var("TEST_INCLUDE_CHECK_ENV_6", "1");
			assert!(is_env_truthy("TEST_INCLUDE_CHECK_ENV_6"));

			std::env::set_var("TEST_INCLUDE_CHECK_ENV_7", "yes");
			assert!(is_env_truthy("TEST_INCLUDE_CHECK_ENV_7"));

			for i in 1..=7 {
				std::env::remove_var(format!("TEST_INCLUDE_CHECK_ENV_{}", i));
			}
		}
	}

	#[test]
	fn test_user_config_path() {
		let path = user_config_path().unwrap();
		assert!(path.ends_with(CONFIG_FILE_NAME));
	}

	#[test]
	fn test_merge_resolves_paths_and_keeps_order() {
		let configs = vec![
			LoadedConfig {
				config: Config {
					descriptors: vec![PathBuf::from("dist.xml")],
					dependencies: vec![DependencyEntry {
						group_id: "org.foo".to_string(),
						artifact_id: "bar".to_string(),
						classifier: None,
					}],
					..Default::default()
				},
				path: PathBuf::from("/work/module/.include-check.toml"),
			},
			LoadedConfig {
				config: Config {
					root: true,
					pom: Some(PathBuf::from("pom.xml")),
					descriptors: vec![PathBuf::from("/abs/other.xml")],
					..Default::default()
				},
				path: PathBuf::from("/work/.include-check.toml"),
			},
		];

		let merged = merge_configs(&configs);

		assert_eq!(merged.pom, Some(PathBuf::from("/work/pom.xml")));
		assert_eq!(
			merged.descriptors,
			vec![
				PathBuf::from("/work/module/dist.xml"),
				PathBuf::from("/abs/other.xml")
			]
		);
		assert_eq!(merged.dependencies.len(), 1);
		assert_eq!(merged.dependencies[0].coordinate.to_string(), "org.foo:bar");
		assert_eq!(
			merged.dependencies[0].source,
			PathBuf::from("/work/module/.include-check.toml")
		);
	}

	#[test]
	fn test_most_specific_pom_wins() {
		let configs = vec![
			LoadedConfig {
				config: Config {
					pom: Some(PathBuf::from("pom.xml")),
					..Default::default()
				},
				path: PathBuf::from("/work/module/.include-check.toml"),
			},
			LoadedConfig {
				config: Config {
					pom: Some(PathBuf::from("pom.xml")),
					..Default::default()
				},
				path: PathBuf::from("/work/.include-check.toml"),
			},
		];

		let merged = merge_configs(&configs);
		assert_eq!(merged.pom, Some(PathBuf::from("/work/module/pom.xml")));
	}

	#[test]
	fn test_discover_stops_at_root() {
		let temp_dir = tempfile::tempdir().unwrap();
		let outer = temp_dir.path();
		let inner = outer.join("module");
		std::fs::create_dir_all(&inner).unwrap();

		std::fs::write(outer.join(CONFIG_FILE_NAME), "descriptors = [\"outer.xml\"]").unwrap();
		std::fs::write(
			inner.join(CONFIG_FILE_NAME),
			"root = true\ndescriptors = [\"inner.xml\"]",
		)
		.unwrap();

		let configs = discover_configs(&inner).unwrap();
		assert!(!configs.is_empty());
		assert_eq!(configs[0].path, inner.join(CONFIG_FILE_NAME));
		assert!(configs.iter().all(|c| c.path != outer.join(CONFIG_FILE_NAME)));
	}

	#[test]
	fn test_discover_walks_up() {
		let temp_dir = tempfile::tempdir().unwrap();
		let outer = temp_dir.path();
		let inner = outer.join("module");
		std::fs::create_dir_all(&inner).unwrap();

		std::fs::write(outer.join(CONFIG_FILE_NAME), "root = true").unwrap();
		std::fs::write(inner.join(CONFIG_FILE_NAME), "").unwrap();

		let configs = discover_configs(&inner).unwrap();
		assert_eq!(configs[0].path, inner.join(CONFIG_FILE_NAME));
		assert_eq!(configs[1].path, outer.join(CONFIG_FILE_NAME));
	}
}
