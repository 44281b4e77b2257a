use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use include_check::check::check_descriptor;
use include_check::config::{
	CONFIG_FILE_NAME, MergedConfig, discover_configs, generate_init_template, load_merged_config,
	user_config_path,
};
use include_check::descriptor::parse_descriptor_file;
use include_check::project::parse_pom_file;
use include_check::{Coordinate, matches_pattern};

/// Environment variable holding an `EnvFilter` directive that overrides `-v`.
const LOG_ENV: &str = "INCLUDE_CHECK_LOG";

#[derive(Parser)]
#[command(name = "include-check")]
#[command(
	author,
	version,
	about = "Checks that assembly descriptor include patterns match real Maven dependencies"
)]
#[command(arg_required_else_help = true)]
struct Cli {
	#[command(subcommand)]
	command: Option<Commands>,

	/// Create a template .include-check.toml in the current directory
	#[arg(long)]
	init: bool,

	/// Overwrite existing .include-check.toml when using --init
	#[arg(long, requires = "init")]
	force: bool,

	/// Increase log verbosity (-v info, -vv debug, -vvv trace)
	#[arg(short, long, action = clap::ArgAction::Count, global = true)]
	verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
	/// Report include patterns that match no project dependency
	Check {
		/// Assembly descriptors to check (defaults to the configured ones)
		descriptors: Vec<PathBuf>,

		/// Project POM to read dependencies from
		#[arg(long, value_name = "FILE")]
		pom: Option<PathBuf>,

		/// Extra dependency, as group:artifact[:classifier]
		#[arg(short = 'd', long = "dependency", value_name = "COORDINATE")]
		dependencies: Vec<String>,

		/// Ignore .include-check.toml files
		#[arg(long)]
		no_config: bool,
	},
	/// Test one coordinate against one include pattern
	Match {
		/// Coordinate as group:artifact[:classifier]
		coordinate: String,

		/// Include pattern
		#[arg(allow_hyphen_values = true)]
		pattern: String,
	},
	/// Configuration management commands
	Config {
		#[command(subcommand)]
		action: ConfigAction,
	},
}

#[derive(Subcommand)]
enum ConfigAction {
	/// Display discovered configuration files and their contents
	Show,
	/// Check all config files for errors without running anything
	Validate,
}

fn main() -> ExitCode {
	match run() {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn run() -> Result<ExitCode> {
	let cli = Cli::parse();
	init_logging(cli.verbose);

	// Handle --init
	if cli.init {
		return handle_init(cli.force);
	}

	match cli.command {
		Some(Commands::Check {
			descriptors,
			pom,
			dependencies,
			no_config,
		}) => handle_check(descriptors, pom, &dependencies, no_config),
		Some(Commands::Match {
			coordinate,
			pattern,
		}) => Ok(handle_match(&coordinate, &pattern)),
		Some(Commands::Config { action }) => match action {
			ConfigAction::Show => handle_config_show(),
			ConfigAction::Validate => handle_config_validate(),
		},
		// Only reachable with flags like -v alone
		None => Ok(ExitCode::SUCCESS),
	}
}

fn init_logging(verbose: u8) {
	let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
		EnvFilter::new(match verbose {
			0 => "warn",
			1 => "info",
			2 => "debug",
			_ => "trace",
		})
	});

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.init();
}

fn handle_init(force: bool) -> Result<ExitCode> {
	let config_path = PathBuf::from(CONFIG_FILE_NAME);

	if config_path.exists() && !force {
		anyhow::bail!("{CONFIG_FILE_NAME} already exists. Use --force to overwrite.");
	}

	std::fs::write(&config_path, generate_init_template())
		.with_context(|| format!("Failed to write {}", config_path.display()))?;

	println!("Created {CONFIG_FILE_NAME}");
	Ok(ExitCode::SUCCESS)
}

fn handle_check(
	descriptors: Vec<PathBuf>,
	pom: Option<PathBuf>,
	extra_dependencies: &[String],
	no_config: bool,
) -> Result<ExitCode> {
	let cwd = std::env::current_dir().context("Failed to get current directory")?;

	let config = if no_config {
		MergedConfig::default()
	} else {
		load_merged_config(&cwd).context("Failed to load configuration")?
	};

	let descriptors = if descriptors.is_empty() {
		config.descriptors
	} else {
		descriptors
	};
	if descriptors.is_empty() {
		anyhow::bail!(
			"No assembly descriptors to check. Pass them as arguments or list them under \
			 `descriptors` in {CONFIG_FILE_NAME}."
		);
	}

	let mut dependencies: Vec<Coordinate> = config
		.dependencies
		.into_iter()
		.map(|d| d.coordinate)
		.collect();

	let pom = pom.or(config.pom).or_else(|| default_pom(&cwd));
	if let Some(ref pom) = pom {
		let declared = parse_pom_file(pom)
			.with_context(|| format!("Failed to read dependencies from {}", pom.display()))?;
		dependencies.extend(declared);
	}

	for value in extra_dependencies {
		let coordinate: Coordinate = value
			.parse()
			.with_context(|| format!("Invalid --dependency value: {value}"))?;
		dependencies.push(coordinate);
	}

	if pom.is_none() && dependencies.is_empty() {
		anyhow::bail!(
			"No dependencies to check against. Pass --pom or --dependency, or configure \
			 them in {CONFIG_FILE_NAME}."
		);
	}

	tracing::info!(
		descriptors = descriptors.len(),
		dependencies = dependencies.len(),
		"checking include patterns"
	);

	let mut problem_count = 0;
	for path in &descriptors {
		let descriptor = parse_descriptor_file(path)
			.with_context(|| format!("Failed to read descriptor {}", path.display()))?;

		let Some(descriptor) = descriptor else {
			eprintln!(
				"Warning: {} is not an assembly descriptor, skipped",
				path.display()
			);
			continue;
		};

		for problem in check_descriptor(&descriptor, &dependencies) {
			println!("{problem}");
			problem_count += 1;
		}
	}

	if problem_count == 0 {
		println!("All include patterns match at least one dependency.");
		Ok(ExitCode::SUCCESS)
	} else {
		println!("{problem_count} include pattern(s) match no dependency.");
		Ok(ExitCode::from(1))
	}
}

/// `pom.xml` in the working directory, if there is one.
fn default_pom(cwd: &Path) -> Option<PathBuf> {
	let pom = cwd.join("pom.xml");
	pom.exists().then_some(pom)
}

fn handle_match(coordinate: &str, pattern: &str) -> ExitCode {
	if matches_pattern(coordinate, pattern) {
		println!("match");
		ExitCode::SUCCESS
	} else {
		println!("no match");
		ExitCode::from(1)
	}
}

fn handle_config_show() -> Result<ExitCode> {
	let cwd = std::env::current_dir().context("Failed to get current directory")?;
	let configs = discover_configs(&cwd).context("Failed to discover config files")?;

	if configs.is_empty() {
		println!("No configuration files found.");
		return Ok(ExitCode::SUCCESS);
	}

	println!("Configuration files (in cascade order):\n");

	for loaded in &configs {
		println!("# Source: {}", loaded.path.display());
		println!("# root: {}", loaded.config.root);
		if let Some(ref pom) = loaded.config.pom {
			println!("# pom: {}", pom.display());
		}
		println!("# descriptors: {}", loaded.config.descriptors.len());
		println!("# dependencies: {}", loaded.config.dependencies.len());
		println!();

		for descriptor in &loaded.config.descriptors {
			println!("  descriptor: {}", descriptor.display());
		}
		for dependency in &loaded.config.dependencies {
			println!("  dependency: {}", dependency.coordinate());
		}
		println!();
	}

	// Show user config path
	if let Ok(user_path) = user_config_path() {
		println!("User config path: {}", user_path.display());
		if user_path.exists() {
			println!("  (exists)");
		} else {
			println!("  (not found)");
		}
	}

	Ok(ExitCode::SUCCESS)
}

fn handle_config_validate() -> Result<ExitCode> {
	let cwd = std::env::current_dir().context("Failed to get current directory")?;

	match discover_configs(&cwd) {
		Ok(configs) => {
			if configs.is_empty() {
				println!("No configuration files found.");
			} else {
				println!("All configuration files are valid:");
				for loaded in &configs {
					println!(
						"  {} ({} descriptors, {} dependencies)",
						loaded.path.display(),
						loaded.config.descriptors.len(),
						loaded.config.dependencies.len()
					);
				}
			}
			Ok(ExitCode::SUCCESS)
		}
		Err(e) => {
			eprintln!("Configuration error: {}", e);
			Ok(ExitCode::FAILURE)
		}
	}
}
