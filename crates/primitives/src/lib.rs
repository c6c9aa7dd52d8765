//! Core value types shared by the tag helper resolver and its providers:
//! descriptors, the deduplicating descriptor set, tag name validation and
//! error reporting.

/// Tag helper and bound attribute descriptors.
pub mod descriptor;
/// Error sinks and collected diagnostics.
pub mod diagnostics;
/// Target tag name declarations and validation.
pub mod element_name;
/// Source positions.
pub mod location;
/// Deduplicating descriptor collection.
pub mod set;

pub use descriptor::{CATCH_ALL_TARGET, DescriptorKey, TagHelperAttributeDescriptor, TagHelperDescriptor};
pub use diagnostics::{Diagnostic, ErrorBag, ErrorSink};
pub use element_name::{HtmlElementName, INVALID_TAG_CHARACTER, TagNameError, validate_tag_name};
pub use location::SourceLocation;
pub use set::DescriptorSet;
