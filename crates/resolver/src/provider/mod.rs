//! Assembly descriptor providers.
//!
//! A provider turns an assembly name into every tag helper descriptor that
//! assembly declares. It is the resolver's only source of candidates and the
//! seam for caching or precomputed indexes.

use std::sync::Arc;

use tagscope_primitives::{ErrorSink, SourceLocation, TagHelperDescriptor, TagNameError};

mod cache;
mod catalog;
#[cfg(test)]
mod tests;

pub use cache::CachingProvider;
pub use catalog::AssemblyCatalog;

/// Errors a provider raises for an assembly it cannot serve.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
	/// No assembly with this name is known.
	#[error("Cannot resolve assembly '{0}'.")]
	AssemblyNotFound(String),

	/// The assembly exists but its components could not be read.
	#[error("Failed to load assembly '{assembly}': {reason}")]
	Load {
		/// The assembly being loaded.
		assembly: String,
		/// What went wrong.
		reason: String,
	},

	/// A component declared an invalid target tag.
	#[error(transparent)]
	InvalidTagName(#[from] TagNameError),
}

/// Capability contract for descriptor sources.
///
/// Implementations must be shareable across threads so that independent
/// resolutions may run concurrently against the same provider.
pub trait DescriptorProvider: Send + Sync {
	/// Returns every descriptor declared by `assembly_name`.
	///
	/// `location` is the directive that triggered the lookup; non-fatal
	/// problems may be reported to `errors` against it. A missing or
	/// unreadable assembly is an `Err`, never a panic.
	fn provide(&self, assembly_name: &str, location: SourceLocation, errors: &mut dyn ErrorSink) -> Result<Vec<TagHelperDescriptor>, ProviderError>;
}

impl<P: DescriptorProvider + ?Sized> DescriptorProvider for &P {
	fn provide(&self, assembly_name: &str, location: SourceLocation, errors: &mut dyn ErrorSink) -> Result<Vec<TagHelperDescriptor>, ProviderError> {
		(**self).provide(assembly_name, location, errors)
	}
}

impl<P: DescriptorProvider + ?Sized> DescriptorProvider for Box<P> {
	fn provide(&self, assembly_name: &str, location: SourceLocation, errors: &mut dyn ErrorSink) -> Result<Vec<TagHelperDescriptor>, ProviderError> {
		(**self).provide(assembly_name, location, errors)
	}
}

impl<P: DescriptorProvider + ?Sized> DescriptorProvider for Arc<P> {
	fn provide(&self, assembly_name: &str, location: SourceLocation, errors: &mut dyn ErrorSink) -> Result<Vec<TagHelperDescriptor>, ProviderError> {
		(**self).provide(assembly_name, location, errors)
	}
}

/// Closure-backed provider adapter.
pub struct FnProvider<F> {
	f: F,
}

impl<F> FnProvider<F>
where
	F: Fn(&str, SourceLocation, &mut dyn ErrorSink) -> Result<Vec<TagHelperDescriptor>, ProviderError> + Send + Sync,
{
	pub fn new(f: F) -> Self {
		Self { f }
	}
}

impl<F> DescriptorProvider for FnProvider<F>
where
	F: Fn(&str, SourceLocation, &mut dyn ErrorSink) -> Result<Vec<TagHelperDescriptor>, ProviderError> + Send + Sync,
{
	fn provide(&self, assembly_name: &str, location: SourceLocation, errors: &mut dyn ErrorSink) -> Result<Vec<TagHelperDescriptor>, ProviderError> {
		(self.f)(assembly_name, location, errors)
	}
}
