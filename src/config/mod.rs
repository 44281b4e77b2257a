//! Configuration loading and parsing for include-check.
//!
//! This module handles:
//! - TOML config file parsing
//! - Directory cascade discovery
//! - Config merging
//! - The `--init` template

pub mod cascade;
pub mod parser;
pub mod template;
pub mod types;

pub use cascade::{
	CONFIG_FILE_NAME, NO_USER_CONFIG_ENV, discover_configs, load_merged_config, merge_configs,
	user_config_path,
};
pub use parser::{parse_config_file, parse_config_str};
pub use template::generate_init_template;
pub use types::{Config, DependencyEntry, DependencyWithSource, LoadedConfig, MergedConfig};
