//! `tagscope.toml` loading.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Name of the config file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "tagscope.toml";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error reading the config file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// Error parsing config TOML.
	#[error("invalid config {path}: {error}")]
	Parse {
		path: PathBuf,
		error: toml::de::Error,
	},
}

/// Resolution settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
	/// Directories searched for `<assembly>.toml` manifests, in order.
	#[serde(default)]
	pub manifest_dirs: Vec<PathBuf>,
	/// Memoize manifests per assembly within a run.
	#[serde(default = "default_cache")]
	pub cache: bool,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			manifest_dirs: Vec::new(),
			cache: default_cache(),
		}
	}
}

fn default_cache() -> bool {
	true
}

impl Config {
	/// Loads `path`, resolving relative manifest directories against the
	/// file's own directory.
	pub fn load(path: &Path) -> Result<Self, ConfigError> {
		let content = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		let mut config: Config = toml::from_str(&content).map_err(|error| ConfigError::Parse {
			path: path.to_path_buf(),
			error,
		})?;

		let base = path.parent().unwrap_or_else(|| Path::new(""));
		for dir in &mut config.manifest_dirs {
			if dir.is_relative() {
				*dir = base.join(&*dir);
			}
		}
		Ok(config)
	}

	/// Loads `explicit` if given, else `CONFIG_FILE_NAME` in `cwd` if it
	/// exists, else the defaults.
	pub fn discover(explicit: Option<&Path>, cwd: &Path) -> Result<Self, ConfigError> {
		if let Some(path) = explicit {
			return Self::load(path);
		}
		let implicit = cwd.join(CONFIG_FILE_NAME);
		if implicit.is_file() {
			return Self::load(&implicit);
		}
		Ok(Self::default())
	}
}
