//! Lookup text parsing.
//!
//! A directive's lookup text has the form `typePattern, assemblyName`.
//! Anything else is malformed: a bare assembly name, extra commas, or a blank
//! segment.

use std::str::FromStr;

use tagscope_primitives::ErrorSink;

use crate::TagHelperDirective;

#[cfg(test)]
mod tests;

const SEPARATOR: char = ',';

/// The structured form of a directive's lookup text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupSpec {
	/// Type name pattern; `*` matches any run of characters.
	pub type_pattern: String,
	/// Assembly name, matched exactly.
	pub assembly_name: String,
}

/// Lookup text that does not have the `typePattern, assemblyName` form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid tag helper directive look up text '{lookup_text}'. The correct look up text format is: \"typeName, assemblyName\".")]
pub struct MalformedLookup {
	pub lookup_text: String,
}

impl LookupSpec {
	pub fn new(type_pattern: impl Into<String>, assembly_name: impl Into<String>) -> Self {
		Self {
			type_pattern: type_pattern.into(),
			assembly_name: assembly_name.into(),
		}
	}

	/// Parses `typePattern, assemblyName`, trimming both segments.
	pub fn parse(lookup_text: &str) -> Result<Self, MalformedLookup> {
		let segments: Vec<&str> = lookup_text.split(SEPARATOR).map(str::trim).collect();

		match segments.as_slice() {
			[type_pattern, assembly_name] if !type_pattern.is_empty() && !assembly_name.is_empty() => {
				Ok(Self::new(*type_pattern, *assembly_name))
			}
			_ => Err(MalformedLookup {
				lookup_text: lookup_text.to_string(),
			}),
		}
	}

	/// Parses the lookup text of `directive`.
	///
	/// Malformed text is reported once to `errors` at the directive's
	/// location and yields `None`.
	pub fn from_directive(directive: &TagHelperDirective, errors: &mut dyn ErrorSink) -> Option<Self> {
		match Self::parse(&directive.lookup_text) {
			Ok(spec) => Some(spec),
			Err(malformed) => {
				errors.on_error(directive.location, malformed.to_string());
				None
			}
		}
	}
}

impl FromStr for LookupSpec {
	type Err = MalformedLookup;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s)
	}
}
