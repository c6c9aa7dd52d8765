//! Tag helper descriptor resolution.
//!
//! A document declares which tag helpers it uses through an ordered list of
//! `@addTagHelper` / `@removeTagHelper` directives. Each directive names a
//! type pattern and an assembly (`"MyApp.*Helper, MyApp"`). The
//! [`DescriptorResolver`] walks those directives in document order against a
//! [`DescriptorProvider`] and produces the [`DescriptorSet`] in scope at the
//! end of the list.
//!
//! # Pipeline
//!
//! 1. [`LookupSpec`] parses the directive's lookup text.
//! 2. [`TypeMatcher`] compiles the type pattern (`*` is the only wildcard).
//! 3. Add directives pull candidates from the provider; remove directives
//!    filter the accumulated set.
//!
//! Malformed lookup text aborts the whole pass with an empty result. Any
//! other failure is reported against its directive and resolution moves on.

pub mod directive;
pub mod lookup;
pub mod matcher;
pub mod provider;
pub mod resolver;

pub use directive::{DirectiveKind, TagHelperDirective, UnknownDirective};
pub use lookup::{LookupSpec, MalformedLookup};
pub use matcher::{TypeMatcher, glob_to_regex, matches};
pub use provider::{AssemblyCatalog, CachingProvider, DescriptorProvider, FnProvider, ProviderError};
pub use resolver::{DescriptorResolver, DirectiveError};
pub use tagscope_primitives::{DescriptorSet, ErrorSink, SourceLocation, TagHelperDescriptor};
