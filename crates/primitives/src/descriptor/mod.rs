use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

#[cfg(test)]
mod tests;

/// Tag name that makes a tag helper apply to every element.
pub const CATCH_ALL_TARGET: &str = "*";

/// Binds an HTML attribute to a property of the tag helper type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TagHelperAttributeDescriptor {
	/// HTML attribute name, e.g. `asp-for`.
	pub name: String,
	/// Name of the backing property on the tag helper type.
	pub property_name: String,
	/// Fully qualified type of the backing property.
	pub type_name: String,
}

impl TagHelperAttributeDescriptor {
	pub fn new(name: impl Into<String>, property_name: impl Into<String>, type_name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			property_name: property_name.into(),
			type_name: type_name.into(),
		}
	}
}

/// A tag helper available to target an element.
///
/// Descriptors are immutable once built. Equality and hashing are structural
/// over the target tag, the type, the assembly and the *set* of attribute
/// bindings; the order in which attributes were declared does not matter.
/// See [`DescriptorKey`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagHelperDescriptor {
	tag_name: String,
	type_name: String,
	assembly_name: String,
	#[serde(default)]
	attributes: Vec<TagHelperAttributeDescriptor>,
}

impl TagHelperDescriptor {
	pub fn new(
		tag_name: impl Into<String>,
		type_name: impl Into<String>,
		assembly_name: impl Into<String>,
		attributes: impl IntoIterator<Item = TagHelperAttributeDescriptor>,
	) -> Self {
		Self {
			tag_name: tag_name.into(),
			type_name: type_name.into(),
			assembly_name: assembly_name.into(),
			attributes: attributes.into_iter().collect(),
		}
	}

	/// The element name this tag helper targets, or [`CATCH_ALL_TARGET`].
	pub fn tag_name(&self) -> &str {
		&self.tag_name
	}

	/// Fully qualified name of the tag helper type.
	pub fn type_name(&self) -> &str {
		&self.type_name
	}

	/// Name of the assembly declaring the type.
	pub fn assembly_name(&self) -> &str {
		&self.assembly_name
	}

	/// Bound attributes in declaration order.
	pub fn attributes(&self) -> &[TagHelperAttributeDescriptor] {
		&self.attributes
	}

	/// Whether the descriptor targets every element.
	pub fn is_catch_all(&self) -> bool {
		self.tag_name == CATCH_ALL_TARGET
	}

	/// Derives the identity used for deduplication.
	pub fn key(&self) -> DescriptorKey {
		DescriptorKey {
			type_name: self.type_name.clone(),
			assembly_name: self.assembly_name.clone(),
			tag_name: self.tag_name.clone(),
			bindings: self.bindings().into_iter().map(|(name, property)| (name.to_string(), property.to_string())).collect(),
		}
	}

	/// Attribute bindings as a sorted, duplicate-free list of
	/// `(attribute, property)` pairs.
	fn bindings(&self) -> Vec<(&str, &str)> {
		let mut bindings: Vec<_> = self.attributes.iter().map(|a| (a.name.as_str(), a.property_name.as_str())).collect();
		bindings.sort_unstable();
		bindings.dedup();
		bindings
	}
}

impl PartialEq for TagHelperDescriptor {
	fn eq(&self, other: &Self) -> bool {
		self.type_name == other.type_name
			&& self.assembly_name == other.assembly_name
			&& self.tag_name == other.tag_name
			&& self.bindings() == other.bindings()
	}
}

impl Eq for TagHelperDescriptor {}

impl Hash for TagHelperDescriptor {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.type_name.hash(state);
		self.assembly_name.hash(state);
		self.tag_name.hash(state);
		self.bindings().hash(state);
	}
}

/// Structural identity of a [`TagHelperDescriptor`].
///
/// Two descriptors with equal keys are the same entity for deduplication,
/// whatever order their attributes were declared in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DescriptorKey {
	pub type_name: String,
	pub assembly_name: String,
	pub tag_name: String,
	/// Sorted `(attribute, property)` pairs.
	pub bindings: Vec<(String, String)>,
}

impl From<&TagHelperDescriptor> for DescriptorKey {
	fn from(descriptor: &TagHelperDescriptor) -> Self {
		descriptor.key()
	}
}
