//! Target tag name declarations.
//!
//! A component may override the element names it targets. Every name is
//! validated when the declaration is built; an invalid name is a structural
//! error in the component and is never recovered from.


/// Character that may never appear in a targeted element name.
pub const INVALID_TAG_CHARACTER: char = '!';

/// Errors raised while validating a target tag name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TagNameError {
	/// The name is missing, empty or only whitespace.
	#[error("Tag name cannot be null or whitespace.")]
	NullOrWhitespace,

	/// The name contains a reserved character.
	#[error("Tag helpers cannot target element name \"{name}\" because it contains a '{character}' character.")]
	InvalidCharacter {
		/// The rejected name.
		name: String,
		/// The offending character.
		character: char,
	},
}

/// Checks that `name` can be targeted by a tag helper.
///
/// Accepts `&str` or `Option<&str>`; `None` is treated like an empty name.
pub fn validate_tag_name<'a>(name: impl Into<Option<&'a str>>) -> Result<(), TagNameError> {
	let name = match name.into() {
		Some(name) if !name.trim().is_empty() => name,
		_ => return Err(TagNameError::NullOrWhitespace),
	};

	if name.contains(INVALID_TAG_CHARACTER) {
		return Err(TagNameError::InvalidCharacter {
			name: name.to_string(),
			character: INVALID_TAG_CHARACTER,
		});
	}

	Ok(())
}

/// The element names a component declares it targets.
///
/// Holds one or more validated tag names, primary name first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlElementName {
	tags: Vec<String>,
}

impl HtmlElementName {
	/// Declares a single target tag.
	pub fn new(tag: impl Into<String>) -> Result<Self, TagNameError> {
		Self::with_additional(tag, std::iter::empty::<String>())
	}

	/// Declares a primary target tag plus any number of additional ones.
	///
	/// Fails on the first invalid name.
	pub fn with_additional<I, S>(tag: impl Into<String>, additional: I) -> Result<Self, TagNameError>
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let tags: Vec<String> = std::iter::once(tag.into()).chain(additional.into_iter().map(Into::into)).collect();
		for tag in &tags {
			validate_tag_name(tag.as_str())?;
		}
		Ok(Self { tags })
	}

	/// Declared tag names, primary first.
	pub fn tags(&self) -> &[String] {
		&self.tags
	}

	pub fn into_tags(self) -> Vec<String> {
		self.tags
	}
}

impl TryFrom<Vec<String>> for HtmlElementName {
	type Error = TagNameError;

	fn try_from(tags: Vec<String>) -> Result<Self, Self::Error> {
		let mut tags = tags.into_iter();
		let first = tags.next().ok_or(TagNameError::NullOrWhitespace)?;
		Self::with_additional(first, tags)
	}
}
