//! Conversion of component types into descriptors.

use heck::ToKebabCase;
use tagscope_primitives::{HtmlElementName, TagHelperAttributeDescriptor, TagHelperDescriptor, TagNameError};

use crate::schema::{ComponentType, PropertyDef};

#[cfg(test)]
mod tests;

const TAG_HELPER_SUFFIX: &str = "TagHelper";

/// Whether a type can be instantiated as a tag helper: public, concrete,
/// not an open generic, and implementing the tag helper contract.
pub fn is_tag_helper(ty: &ComponentType) -> bool {
	ty.public && !ty.is_abstract && !ty.generic && ty.tag_helper
}

/// Derives the element a type targets when it declares none.
///
/// Uses the unqualified type name (after the last `.` or `+`), drops a
/// `TagHelper` suffix and kebab-cases the rest: `Shop.PTagHelper` targets
/// `p`, `Shop.PriceListTagHelper` targets `price-list`.
pub fn default_tag_name(type_name: &str) -> String {
	let short = type_name.rsplit(['.', '+']).next().unwrap_or(type_name);
	let stem = short.strip_suffix(TAG_HELPER_SUFFIX).filter(|stem| !stem.is_empty()).unwrap_or(short);
	stem.to_kebab_case()
}

/// HTML attribute bound to `property`: the explicit override, or the
/// kebab-cased property name.
pub fn attribute_name(property: &PropertyDef) -> String {
	property.attribute.clone().unwrap_or_else(|| property.name.to_kebab_case())
}

/// Builds one descriptor per element `ty` targets.
///
/// Every target is validated; an invalid one fails the whole type.
pub fn create_descriptors(assembly_name: &str, ty: &ComponentType) -> Result<Vec<TagHelperDescriptor>, TagNameError> {
	let targets = if ty.element_names.is_empty() {
		HtmlElementName::new(default_tag_name(&ty.name))?
	} else {
		HtmlElementName::try_from(ty.element_names.clone())?
	};

	let attributes: Vec<_> = ty
		.properties
		.iter()
		.map(|property| TagHelperAttributeDescriptor::new(attribute_name(property), &property.name, &property.type_name))
		.collect();

	Ok(targets
		.into_tags()
		.into_iter()
		.map(|tag| TagHelperDescriptor::new(tag, &ty.name, assembly_name, attributes.clone()))
		.collect())
}
