//! Directive model.

use std::fmt;
use std::str::FromStr;

use tagscope_primitives::SourceLocation;

/// Whether a directive brings tag helpers into scope or takes them out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectiveKind {
	Add,
	Remove,
}

impl DirectiveKind {
	/// Keyword as written in a document, without the leading `@`.
	pub const fn keyword(self) -> &'static str {
		match self {
			Self::Add => "addTagHelper",
			Self::Remove => "removeTagHelper",
		}
	}

	/// Lowercased `@` form used in error messages.
	pub const fn display_name(self) -> &'static str {
		match self {
			Self::Add => "@addtaghelper",
			Self::Remove => "@removetaghelper",
		}
	}
}

impl fmt::Display for DirectiveKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.display_name())
	}
}

/// Returned when a keyword names no known directive.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown tag helper directive '{0}'")]
pub struct UnknownDirective(pub String);

impl FromStr for DirectiveKind {
	type Err = UnknownDirective;

	/// Parses a keyword, with or without `@`, ignoring ASCII case.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let keyword = s.strip_prefix('@').unwrap_or(s);
		[Self::Add, Self::Remove]
			.into_iter()
			.find(|kind| kind.keyword().eq_ignore_ascii_case(keyword))
			.ok_or_else(|| UnknownDirective(s.to_string()))
	}
}

/// A single `@addTagHelper` or `@removeTagHelper` directive.
///
/// Produced by the document parser and only read during resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagHelperDirective {
	pub kind: DirectiveKind,
	/// Raw payload, e.g. `"*, MyApp"`.
	pub lookup_text: String,
	/// Where the directive appears; passed through to error reports.
	pub location: SourceLocation,
}

impl TagHelperDirective {
	pub fn new(kind: DirectiveKind, lookup_text: impl Into<String>, location: SourceLocation) -> Self {
		Self {
			kind,
			lookup_text: lookup_text.into(),
			location,
		}
	}

	pub fn add(lookup_text: impl Into<String>, location: SourceLocation) -> Self {
		Self::new(DirectiveKind::Add, lookup_text, location)
	}

	pub fn remove(lookup_text: impl Into<String>, location: SourceLocation) -> Self {
		Self::new(DirectiveKind::Remove, lookup_text, location)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_keywords_case_insensitively() {
		assert_eq!("addTagHelper".parse::<DirectiveKind>(), Ok(DirectiveKind::Add));
		assert_eq!("@ADDTAGHELPER".parse::<DirectiveKind>(), Ok(DirectiveKind::Add));
		assert_eq!("@removetaghelper".parse::<DirectiveKind>(), Ok(DirectiveKind::Remove));
	}

	#[test]
	fn rejects_unknown_keywords() {
		assert_eq!("@tagHelperPrefix".parse::<DirectiveKind>(), Err(UnknownDirective("@tagHelperPrefix".to_string())));
	}

	#[test]
	fn display_name_is_lowercased() {
		assert_eq!(DirectiveKind::Add.to_string(), "@addtaghelper");
		assert_eq!(DirectiveKind::Remove.to_string(), "@removetaghelper");
	}
}
