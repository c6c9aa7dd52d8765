//! Error types for manifest loading.

use std::path::PathBuf;

use tagscope_primitives::TagNameError;
use tagscope_resolver::ProviderError;
use thiserror::Error;

/// Errors that can occur while loading an assembly manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
	/// No search directory holds a manifest for the assembly.
	#[error("no manifest for assembly '{assembly}' (searched {searched} directories)")]
	NotFound {
		/// The requested assembly.
		assembly: String,
		/// How many directories were searched.
		searched: usize,
	},

	/// Error reading a manifest file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// Error parsing manifest TOML.
	#[error("invalid manifest {path}: {error}")]
	Parse {
		/// Path to the malformed manifest.
		path: PathBuf,
		/// The underlying parse error.
		error: toml::de::Error,
	},

	/// The manifest declares a different assembly than its file name.
	#[error("manifest {path} declares assembly '{declared}', expected '{expected}'")]
	AssemblyMismatch {
		path: PathBuf,
		declared: String,
		expected: String,
	},

	/// A component type declares an invalid target element.
	#[error("type '{type_name}' in assembly '{assembly}': {error}")]
	InvalidTagName {
		assembly: String,
		/// The offending component type.
		type_name: String,
		/// The validation failure.
		error: TagNameError,
	},
}

impl ManifestError {
	/// Name of the assembly the error concerns.
	pub fn assembly(&self) -> String {
		match self {
			Self::NotFound { assembly, .. } | Self::InvalidTagName { assembly, .. } => assembly.clone(),
			Self::Io { path, .. } | Self::Parse { path, .. } | Self::AssemblyMismatch { path, .. } => path
				.file_stem()
				.map(|stem| stem.to_string_lossy().into_owned())
				.unwrap_or_default(),
		}
	}
}

impl From<ManifestError> for ProviderError {
	fn from(error: ManifestError) -> Self {
		match error {
			ManifestError::NotFound { assembly, .. } => ProviderError::AssemblyNotFound(assembly),
			other => ProviderError::Load {
				assembly: other.assembly(),
				reason: other.to_string(),
			},
		}
	}
}

/// Result type for manifest operations.
pub type Result<T> = std::result::Result<T, ManifestError>;
