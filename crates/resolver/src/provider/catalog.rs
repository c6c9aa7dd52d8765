use rustc_hash::FxHashMap;
use tagscope_primitives::{ErrorSink, SourceLocation, TagHelperDescriptor};

use super::{DescriptorProvider, ProviderError};

/// A precomputed, in-memory index of descriptors by assembly name.
#[derive(Debug, Clone, Default)]
pub struct AssemblyCatalog {
	assemblies: FxHashMap<String, Vec<TagHelperDescriptor>>,
}

impl AssemblyCatalog {
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers `descriptors` under `assembly_name`, replacing any previous
	/// entry.
	pub fn insert(&mut self, assembly_name: impl Into<String>, descriptors: impl IntoIterator<Item = TagHelperDescriptor>) {
		self.assemblies.insert(assembly_name.into(), descriptors.into_iter().collect());
	}

	/// Builder form of [`insert`](Self::insert).
	pub fn with_assembly(mut self, assembly_name: impl Into<String>, descriptors: impl IntoIterator<Item = TagHelperDescriptor>) -> Self {
		self.insert(assembly_name, descriptors);
		self
	}

	pub fn contains(&self, assembly_name: &str) -> bool {
		self.assemblies.contains_key(assembly_name)
	}

	/// Known assembly names, sorted.
	pub fn assembly_names(&self) -> Vec<&str> {
		let mut names: Vec<_> = self.assemblies.keys().map(String::as_str).collect();
		names.sort_unstable();
		names
	}
}

impl FromIterator<TagHelperDescriptor> for AssemblyCatalog {
	/// Groups descriptors under their own assembly names.
	fn from_iter<I: IntoIterator<Item = TagHelperDescriptor>>(iter: I) -> Self {
		let mut catalog = Self::new();
		for descriptor in iter {
			catalog.assemblies.entry(descriptor.assembly_name().to_string()).or_default().push(descriptor);
		}
		catalog
	}
}

impl DescriptorProvider for AssemblyCatalog {
	fn provide(&self, assembly_name: &str, _location: SourceLocation, _errors: &mut dyn ErrorSink) -> Result<Vec<TagHelperDescriptor>, ProviderError> {
		self.assemblies
			.get(assembly_name)
			.cloned()
			.ok_or_else(|| ProviderError::AssemblyNotFound(assembly_name.to_string()))
	}
}
