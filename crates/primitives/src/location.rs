use std::fmt;

use serde::{Deserialize, Serialize};

/// A position in a source document.
///
/// Locations are opaque to resolution: they are only handed back to an
/// [`ErrorSink`](crate::ErrorSink) together with a message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SourceLocation {
	/// Zero-based offset from the start of the document.
	pub absolute_index: usize,
	/// Zero-based line index.
	pub line_index: usize,
	/// Zero-based offset within the line.
	pub character_index: usize,
}

impl SourceLocation {
	/// The start of a document.
	pub const ZERO: Self = Self::new(0, 0, 0);

	pub const fn new(absolute_index: usize, line_index: usize, character_index: usize) -> Self {
		Self {
			absolute_index,
			line_index,
			character_index,
		}
	}
}

impl fmt::Display for SourceLocation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "({}:{},{})", self.absolute_index, self.line_index, self.character_index)
	}
}
