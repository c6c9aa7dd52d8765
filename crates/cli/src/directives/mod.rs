//! Line-oriented directive file reader.
//!
//! Each non-blank line holds one `@addTagHelper` or `@removeTagHelper`
//! directive followed by its lookup text. Lines starting with `#` or `@*`
//! are comments.

use tagscope_primitives::{ErrorSink, SourceLocation};
use tagscope_resolver::{DirectiveKind, TagHelperDirective};
use tracing::trace;


/// Reads every directive in `source`, in order.
///
/// Lines that are neither blank, a comment, nor a known directive are
/// reported to `errors` at their first non-blank character and skipped.
pub fn parse_directives(source: &str, errors: &mut dyn ErrorSink) -> Vec<TagHelperDirective> {
	let mut directives = Vec::new();
	let mut offset = 0;

	for (line_index, raw) in source.split_inclusive('\n').enumerate() {
		let line_start = offset;
		offset += raw.len();

		let line = raw.trim_end_matches(['\n', '\r']);
		let body = line.trim_start();
		if body.is_empty() || body.starts_with('#') || body.starts_with("@*") {
			continue;
		}

		let body_start = line.len() - body.len();
		let (keyword, rest) = body.split_once(char::is_whitespace).unwrap_or((body, ""));
		let kind = match keyword.strip_prefix('@').map(str::parse::<DirectiveKind>) {
			Some(Ok(kind)) => kind,
			_ => {
				let location = locate(line, line_start, line_index, body_start);
				errors.on_error(location, format!("Unrecognized directive line '{body}'."));
				continue;
			}
		};

		let unindented = rest.trim_start();
		let mut lookup_start = line.len() - unindented.len();
		let trimmed = unindented.trim_end();
		let lookup = match trimmed.strip_prefix('"').and_then(|inner| inner.strip_suffix('"')) {
			Some(inner) => {
				lookup_start += 1;
				inner
			}
			None => trimmed,
		};

		let location = locate(line, line_start, line_index, lookup_start);
		trace!(%kind, lookup, %location, "directive");
		directives.push(TagHelperDirective::new(kind, lookup, location));
	}

	directives
}

/// Location of byte `column` within `line`; the character index counts
/// chars, not bytes.
fn locate(line: &str, line_start: usize, line_index: usize, column: usize) -> SourceLocation {
	let character_index = line[..column].chars().count();
	SourceLocation::new(line_start + column, line_index, character_index)
}
