use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use tagscope_primitives::{ErrorSink, SourceLocation, TagHelperDescriptor};
use tracing::trace;

use super::{DescriptorProvider, ProviderError};

/// Memoizes another provider per assembly name.
///
/// Only successful lookups are cached; a failing assembly is retried on the
/// next request. Errors the inner provider reports to the sink are only seen
/// by the call that populated the entry.
///
/// # Concurrency
///
/// Reads share a `RwLock`. Two callers missing the same assembly at once may
/// both query the inner provider; the first result to be stored wins.
pub struct CachingProvider<P> {
	inner: P,
	cache: RwLock<FxHashMap<String, Arc<[TagHelperDescriptor]>>>,
}

impl<P: DescriptorProvider> CachingProvider<P> {
	pub fn new(inner: P) -> Self {
		Self {
			inner,
			cache: RwLock::new(FxHashMap::default()),
		}
	}

	pub fn inner(&self) -> &P {
		&self.inner
	}

	/// Number of cached assemblies.
	pub fn len(&self) -> usize {
		self.cache.read().len()
	}

	pub fn is_empty(&self) -> bool {
		self.cache.read().is_empty()
	}

	/// Drops the entry for `assembly_name`, returning whether one existed.
	pub fn invalidate(&self, assembly_name: &str) -> bool {
		self.cache.write().remove(assembly_name).is_some()
	}

	/// Drops every entry.
	pub fn clear(&self) {
		self.cache.write().clear();
	}
}

impl<P: DescriptorProvider> DescriptorProvider for CachingProvider<P> {
	fn provide(&self, assembly_name: &str, location: SourceLocation, errors: &mut dyn ErrorSink) -> Result<Vec<TagHelperDescriptor>, ProviderError> {
		if let Some(hit) = self.cache.read().get(assembly_name) {
			trace!(assembly = assembly_name, count = hit.len(), "descriptor cache hit");
			return Ok(hit.to_vec());
		}

		let descriptors: Arc<[TagHelperDescriptor]> = self.inner.provide(assembly_name, location, errors)?.into();
		let stored = self
			.cache
			.write()
			.entry(assembly_name.to_string())
			.or_insert(descriptors)
			.clone();
		Ok(stored.to_vec())
	}
}
