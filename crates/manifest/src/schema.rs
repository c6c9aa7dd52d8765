//! Manifest file schema.

use serde::{Deserialize, Serialize};

/// Contents of one `<assembly>.toml` manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AssemblyManifest {
	/// Declared assembly name. When present it must equal the file stem.
	#[serde(default)]
	pub assembly: Option<String>,
	/// Component types declared by the assembly.
	#[serde(default)]
	pub types: Vec<ComponentType>,
}

impl AssemblyManifest {
	pub fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
		toml::from_str(content)
	}
}

/// A type declared in an assembly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComponentType {
	/// Fully qualified type name.
	pub name: String,
	#[serde(default = "default_true")]
	pub public: bool,
	#[serde(default, rename = "abstract")]
	pub is_abstract: bool,
	/// Open generic types cannot be instantiated as tag helpers.
	#[serde(default)]
	pub generic: bool,
	/// Whether the type implements the tag helper contract.
	#[serde(default = "default_true")]
	pub tag_helper: bool,
	/// Explicit target elements; the default is derived from `name`.
	#[serde(default)]
	pub element_names: Vec<String>,
	#[serde(default)]
	pub properties: Vec<PropertyDef>,
}

impl ComponentType {
	/// A public, concrete tag helper type with no explicit targets.
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			public: true,
			is_abstract: false,
			generic: false,
			tag_helper: true,
			element_names: Vec::new(),
			properties: Vec::new(),
		}
	}
}

/// A bindable property of a component type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PropertyDef {
	pub name: String,
	/// Fully qualified property type.
	#[serde(rename = "type")]
	pub type_name: String,
	/// HTML attribute name override.
	#[serde(default)]
	pub attribute: Option<String>,
}

fn default_true() -> bool {
	true
}
