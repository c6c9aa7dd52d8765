//! Directive-ordered descriptor resolution.
//!
//! The [`DescriptorResolver`] applies directives strictly in document order.
//! Later directives see the effects of earlier ones, so `add`/`remove` do not
//! commute: removing `Foo` and then adding it back leaves `Foo` in scope,
//! while the reverse leaves it out.
//!
//! # Failure policy
//!
//! - Malformed lookup text reports one error and ends the pass with an empty
//!   set, discarding everything accumulated so far.
//! - Any other failure (unknown assembly, unreadable components, a pattern
//!   that fails to compile) reports one error against the offending
//!   directive; the remaining directives still run.

use tagscope_primitives::{DescriptorSet, ErrorSink};
use tracing::{debug, warn};

use crate::provider::{DescriptorProvider, ProviderError};
use crate::{DirectiveKind, LookupSpec, TagHelperDirective, TypeMatcher};


/// A failure isolated to a single directive.
#[derive(Debug, thiserror::Error)]
pub enum DirectiveError {
	#[error(transparent)]
	Provider(#[from] ProviderError),

	#[error("invalid type pattern: {0}")]
	Pattern(#[from] regex::Error),
}

impl DirectiveError {
	/// Message reported for `directive`, folding in its name, its raw lookup
	/// text and this error.
	pub fn report_message(&self, directive: &TagHelperDirective) -> String {
		format!(
			"Encountered an unexpected error when attempting to resolve tag helper directive '{}' with value '{}'. Error: {}",
			directive.kind.display_name(),
			directive.lookup_text,
			self
		)
	}
}

/// Resolves the descriptors in scope after a sequence of directives.
///
/// Holds no state between calls besides the provider, so one resolver may
/// serve concurrent resolutions when the provider allows it.
#[derive(Debug, Clone, Default)]
pub struct DescriptorResolver<P> {
	provider: P,
}

impl<P: DescriptorProvider> DescriptorResolver<P> {
	pub fn new(provider: P) -> Self {
		Self { provider }
	}

	pub fn provider(&self) -> &P {
		&self.provider
	}

	/// Applies `directives` in order and returns the resulting set.
	///
	/// Errors go to `errors`; see the module docs for which ones end the pass.
	pub fn resolve(&self, directives: &[TagHelperDirective], errors: &mut dyn ErrorSink) -> DescriptorSet {
		let mut resolved = DescriptorSet::new();

		for directive in directives {
			let Some(lookup) = LookupSpec::from_directive(directive, errors) else {
				warn!(
					directive = directive.kind.display_name(),
					lookup = %directive.lookup_text,
					location = %directive.location,
					discarded = resolved.len(),
					"malformed tag helper lookup text; abandoning resolution",
				);
				return DescriptorSet::new();
			};

			if let Err(error) = self.apply(directive, &lookup, &mut resolved, errors) {
				warn!(
					directive = directive.kind.display_name(),
					lookup = %directive.lookup_text,
					location = %directive.location,
					%error,
					"tag helper directive failed",
				);
				errors.on_error(directive.location, error.report_message(directive));
			}
		}

		debug!(directives = directives.len(), resolved = resolved.len(), "resolved tag helper descriptors");
		resolved
	}

	fn apply(&self, directive: &TagHelperDirective, lookup: &LookupSpec, resolved: &mut DescriptorSet, errors: &mut dyn ErrorSink) -> Result<(), DirectiveError> {
		let matcher = TypeMatcher::new(lookup)?;

		match directive.kind {
			DirectiveKind::Remove => {
				let removed = resolved.remove_where(|descriptor| matcher.matches(descriptor));
				debug!(
					pattern = %lookup.type_pattern,
					assembly = %lookup.assembly_name,
					removed,
					"applied @removeTagHelper",
				);
			}
			DirectiveKind::Add => {
				let candidates = self.provider.provide(&lookup.assembly_name, directive.location, errors)?;
				let offered = candidates.len();
				let added = resolved.union(candidates.into_iter().filter(|descriptor| matcher.matches(descriptor)));
				debug!(
					pattern = %lookup.type_pattern,
					assembly = %lookup.assembly_name,
					offered,
					added,
					"applied @addTagHelper",
				);
			}
		}

		Ok(())
	}
}
