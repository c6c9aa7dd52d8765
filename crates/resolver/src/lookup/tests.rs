use rstest::rstest;
use tagscope_primitives::{ErrorBag, SourceLocation};

use super::*;

#[rstest]
#[case::wildcard("*, MyApp", "*", "MyApp")]
#[case::exact("MyApp.PTagHelper, MyApp", "MyApp.PTagHelper", "MyApp")]
#[case::no_space("MyApp.P*,MyApp", "MyApp.P*", "MyApp")]
#[case::padded("  Foo  ,   Bar  ", "Foo", "Bar")]
#[case::inner_spaces("Foo Bar, Baz Qux", "Foo Bar", "Baz Qux")]
fn parses_two_segments(#[case] text: &str, #[case] pattern: &str, #[case] assembly: &str) {
	assert_eq!(LookupSpec::parse(text), Ok(LookupSpec::new(pattern, assembly)));
}

#[rstest]
#[case::empty("")]
#[case::blank("   ")]
#[case::bare_assembly("OnlyOneSegment")]
#[case::three_segments("A, B, C")]
#[case::blank_pattern(" , MyApp")]
#[case::blank_assembly("MyApp.*, ")]
#[case::lone_comma(",")]
#[case::trailing_comma("Foo, Bar,")]
fn rejects_malformed_text(#[case] text: &str) {
	assert_eq!(
		LookupSpec::parse(text),
		Err(MalformedLookup {
			lookup_text: text.to_string()
		})
	);
}

#[test]
fn malformed_message_carries_raw_text() {
	let err = LookupSpec::parse("OnlyOneSegment").unwrap_err();
	assert_eq!(
		err.to_string(),
		"Invalid tag helper directive look up text 'OnlyOneSegment'. The correct look up text format is: \"typeName, assemblyName\"."
	);
}

#[test]
fn from_directive_reports_once_at_location() {
	let location = SourceLocation::new(12, 1, 14);
	let directive = TagHelperDirective::add("OnlyOneSegment", location);
	let mut errors = ErrorBag::new();

	assert_eq!(LookupSpec::from_directive(&directive, &mut errors), None);
	assert_eq!(errors.len(), 1);
	assert_eq!(errors.errors()[0].location, location);
	assert!(errors.errors()[0].message.contains("'OnlyOneSegment'"));
}

#[test]
fn from_directive_reports_nothing_on_success() {
	let directive = TagHelperDirective::remove("Foo, Bar", SourceLocation::ZERO);
	let mut errors = ErrorBag::new();

	assert_eq!(LookupSpec::from_directive(&directive, &mut errors), Some(LookupSpec::new("Foo", "Bar")));
	assert!(errors.is_empty());
}

#[test]
fn from_str_matches_parse() {
	assert_eq!("Foo, Bar".parse::<LookupSpec>(), LookupSpec::parse("Foo, Bar"));
}
