//! Default assembly scanning for tag helper resolution.
//!
//! Each assembly is described by a TOML manifest, `<assembly>.toml`, listing
//! the component types it declares. [`ManifestProvider`] finds a manifest in
//! its search directories, keeps the types eligible to be tag helpers and
//! converts each into one descriptor per targeted element.
//!
//! ```toml
//! assembly = "Shop"
//!
//! [[types]]
//! name = "Shop.PriceTagHelper"
//! element_names = ["price", "cost"]
//!
//! [[types.properties]]
//! name = "Currency"
//! type = "System.String"
//! ```

mod error;
pub mod factory;
pub mod provider;
pub mod schema;

pub use error::{ManifestError, Result};
pub use factory::{attribute_name, create_descriptors, default_tag_name, is_tag_helper};
pub use provider::{MANIFEST_EXTENSION, ManifestProvider};
pub use schema::{AssemblyManifest, ComponentType, PropertyDef};
