//! Type pattern matching.
//!
//! Type patterns are plain type names in which `*` stands for any run of
//! characters, including none. Every other character is literal, so a `.`
//! in `MyApp.Helpers.*` only ever matches a dot.

use regex::{Regex, RegexBuilder};
use tagscope_primitives::TagHelperDescriptor;

use crate::LookupSpec;


const WILDCARD: &str = r"\*";
const ANY_RUN: &str = ".*?";

/// Translates a type pattern into an anchored regular expression.
///
/// The pattern is escaped first, then each escaped `*` is replaced by a
/// lazy any-run, so `*` is the only character with special meaning.
pub fn glob_to_regex(pattern: &str) -> String {
	let escaped = regex::escape(pattern);
	format!("^{}$", escaped.replace(WILDCARD, ANY_RUN))
}

/// A compiled [`LookupSpec`] for testing many descriptors.
#[derive(Debug, Clone)]
pub struct TypeMatcher {
	assembly_name: String,
	type_pattern: Regex,
}

impl TypeMatcher {
	/// Compiles the type pattern of `spec`.
	pub fn new(spec: &LookupSpec) -> Result<Self, regex::Error> {
		let type_pattern = RegexBuilder::new(&glob_to_regex(&spec.type_pattern))
			.dot_matches_new_line(true)
			.build()?;
		Ok(Self {
			assembly_name: spec.assembly_name.clone(),
			type_pattern,
		})
	}

	/// Whether `descriptor` comes from the lookup's assembly and its full type
	/// name matches the pattern. Both comparisons are case-sensitive.
	pub fn matches(&self, descriptor: &TagHelperDescriptor) -> bool {
		descriptor.assembly_name() == self.assembly_name && self.type_pattern.is_match(descriptor.type_name())
	}
}

/// One-shot form of [`TypeMatcher::matches`].
///
/// A pattern that cannot be compiled matches nothing.
pub fn matches(descriptor: &TagHelperDescriptor, spec: &LookupSpec) -> bool {
	if descriptor.assembly_name() != spec.assembly_name {
		return false;
	}
	TypeMatcher::new(spec).is_ok_and(|matcher| matcher.matches(descriptor))
}
