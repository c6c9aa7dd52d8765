//! Manifest-backed [`DescriptorProvider`].

use std::path::{Path, PathBuf};

use tagscope_primitives::{ErrorSink, SourceLocation, TagHelperDescriptor};
use tagscope_resolver::{DescriptorProvider, ProviderError};
use tracing::{debug, trace};

use crate::factory::{create_descriptors, is_tag_helper};
use crate::{AssemblyManifest, ManifestError, Result};

/// File extension of assembly manifests.
pub const MANIFEST_EXTENSION: &str = "toml";

/// Scans assembly manifests on disk.
///
/// `provide("Shop", ..)` reads `Shop.toml` from the first search directory
/// containing it. Every request re-reads the file; wrap the provider in a
/// [`CachingProvider`](tagscope_resolver::CachingProvider) to memoize.
#[derive(Debug, Clone, Default)]
pub struct ManifestProvider {
	search_dirs: Vec<PathBuf>,
}

impl ManifestProvider {
	pub fn new(search_dirs: impl IntoIterator<Item = impl Into<PathBuf>>) -> Self {
		Self {
			search_dirs: search_dirs.into_iter().map(Into::into).collect(),
		}
	}

	/// Appends a search directory, searched after existing ones.
	pub fn push_dir(&mut self, dir: impl Into<PathBuf>) {
		self.search_dirs.push(dir.into());
	}

	pub fn search_dirs(&self) -> &[PathBuf] {
		&self.search_dirs
	}

	/// Path of the manifest for `assembly_name`, if any directory has one.
	///
	/// Names that could escape a search directory never resolve.
	pub fn locate(&self, assembly_name: &str) -> Option<PathBuf> {
		if assembly_name.is_empty() || assembly_name.starts_with('.') || assembly_name.contains(['/', '\\']) {
			return None;
		}
		let file_name = format!("{assembly_name}.{MANIFEST_EXTENSION}");
		self.search_dirs.iter().map(|dir| dir.join(&file_name)).find(|path| path.is_file())
	}

	/// Reads and validates the manifest for `assembly_name`.
	pub fn load(&self, assembly_name: &str) -> Result<AssemblyManifest> {
		let path = self.locate(assembly_name).ok_or_else(|| ManifestError::NotFound {
			assembly: assembly_name.to_string(),
			searched: self.search_dirs.len(),
		})?;
		load_manifest(&path, assembly_name)
	}

	/// Descriptors for every eligible type of `assembly_name`.
	pub fn descriptors(&self, assembly_name: &str) -> Result<Vec<TagHelperDescriptor>> {
		let manifest = self.load(assembly_name)?;
		let mut descriptors = Vec::new();

		for ty in &manifest.types {
			if !is_tag_helper(ty) {
				trace!(assembly = assembly_name, type_name = %ty.name, "skipping ineligible type");
				continue;
			}
			let created = create_descriptors(assembly_name, ty).map_err(|error| ManifestError::InvalidTagName {
				assembly: assembly_name.to_string(),
				type_name: ty.name.clone(),
				error,
			})?;
			descriptors.extend(created);
		}

		debug!(
			assembly = assembly_name,
			types = manifest.types.len(),
			descriptors = descriptors.len(),
			"scanned assembly manifest",
		);
		Ok(descriptors)
	}
}

fn load_manifest(path: &Path, assembly_name: &str) -> Result<AssemblyManifest> {
	let content = std::fs::read_to_string(path).map_err(|error| ManifestError::Io {
		path: path.to_path_buf(),
		error,
	})?;
	let manifest = AssemblyManifest::parse(&content).map_err(|error| ManifestError::Parse {
		path: path.to_path_buf(),
		error,
	})?;

	if let Some(declared) = &manifest.assembly
		&& declared != assembly_name
	{
		return Err(ManifestError::AssemblyMismatch {
			path: path.to_path_buf(),
			declared: declared.clone(),
			expected: assembly_name.to_string(),
		});
	}

	Ok(manifest)
}

impl DescriptorProvider for ManifestProvider {
	fn provide(&self, assembly_name: &str, _location: SourceLocation, _errors: &mut dyn ErrorSink) -> std::result::Result<Vec<TagHelperDescriptor>, ProviderError> {
		Ok(self.descriptors(assembly_name)?)
	}
}
