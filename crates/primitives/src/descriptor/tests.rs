use std::collections::HashSet;

use super::*;

fn attr(name: &str, property: &str) -> TagHelperAttributeDescriptor {
	TagHelperAttributeDescriptor::new(name, property, "System.String")
}

fn input(attributes: Vec<TagHelperAttributeDescriptor>) -> TagHelperDescriptor {
	TagHelperDescriptor::new("input", "Shop.InputTagHelper", "Shop", attributes)
}

#[test]
fn attribute_order_does_not_affect_equality() {
	let a = input(vec![attr("type", "Type"), attr("checked", "Checked")]);
	let b = input(vec![attr("checked", "Checked"), attr("type", "Type")]);

	assert_eq!(a, b);
	assert_eq!(a.key(), b.key());

	let set: HashSet<_> = [a, b].into_iter().collect();
	assert_eq!(set.len(), 1);
}

#[test]
fn differing_attribute_sets_are_distinct() {
	let a = input(vec![attr("type", "Type")]);
	let b = input(vec![attr("type", "Type"), attr("checked", "Checked")]);

	assert_ne!(a, b);
}

#[test]
fn repeated_binding_collapses() {
	let a = input(vec![attr("type", "Type"), attr("type", "Type")]);
	let b = input(vec![attr("type", "Type")]);

	assert_eq!(a, b);
}

#[test]
fn property_type_is_not_part_of_identity() {
	let a = input(vec![TagHelperAttributeDescriptor::new("type", "Type", "System.String")]);
	let b = input(vec![TagHelperAttributeDescriptor::new("type", "Type", "Shop.InputType")]);

	assert_eq!(a, b);
}

#[test]
fn each_identity_field_matters() {
	let base = TagHelperDescriptor::new("p", "Shop.PTagHelper", "Shop", []);

	assert_ne!(base, TagHelperDescriptor::new("div", "Shop.PTagHelper", "Shop", []));
	assert_ne!(base, TagHelperDescriptor::new("p", "Shop.PTagHelper2", "Shop", []));
	assert_ne!(base, TagHelperDescriptor::new("p", "Shop.PTagHelper", "Shop.Extra", []));
}

#[test]
fn key_bindings_are_sorted() {
	let descriptor = input(vec![attr("value", "Value"), attr("checked", "Checked")]);

	assert_eq!(
		descriptor.key().bindings,
		vec![("checked".to_string(), "Checked".to_string()), ("value".to_string(), "Value".to_string())]
	);
}

#[test]
fn catch_all_target() {
	assert!(TagHelperDescriptor::new(CATCH_ALL_TARGET, "Shop.AnyTagHelper", "Shop", []).is_catch_all());
	assert!(!TagHelperDescriptor::new("p", "Shop.PTagHelper", "Shop", []).is_catch_all());
}
