use pretty_assertions::assert_eq;
use rstest::rstest;

use super::*;

fn property(name: &str, type_name: &str) -> PropertyDef {
	PropertyDef {
		name: name.to_string(),
		type_name: type_name.to_string(),
		attribute: None,
	}
}

#[rstest]
#[case::single_letter("Shop.PTagHelper", "p")]
#[case::word("Shop.InputTagHelper", "input")]
#[case::compound("Shop.PriceListTagHelper", "price-list")]
#[case::no_namespace("InputTagHelper", "input")]
#[case::no_suffix("Shop.Widget", "widget")]
#[case::bare_suffix("Shop.TagHelper", "tag-helper")]
#[case::nested("Shop.Outer+CardTagHelper", "card")]
fn derives_default_tag_names(#[case] type_name: &str, #[case] expected: &str) {
	assert_eq!(default_tag_name(type_name), expected);
}

#[test]
fn eligibility_requires_public_concrete_tag_helpers() {
	let eligible = ComponentType::new("Shop.PTagHelper");
	assert!(is_tag_helper(&eligible));

	for ineligible in [
		ComponentType {
			public: false,
			..eligible.clone()
		},
		ComponentType {
			is_abstract: true,
			..eligible.clone()
		},
		ComponentType {
			generic: true,
			..eligible.clone()
		},
		ComponentType {
			tag_helper: false,
			..eligible.clone()
		},
	] {
		assert!(!is_tag_helper(&ineligible), "{ineligible:?}");
	}
}

#[test]
fn default_target_yields_one_descriptor() {
	let mut ty = ComponentType::new("Shop.PTagHelper");
	ty.properties.push(property("Age", "System.Int32"));

	let descriptors = create_descriptors("Shop", &ty).unwrap();

	assert_eq!(descriptors, vec![TagHelperDescriptor::new("p", "Shop.PTagHelper", "Shop", [
		TagHelperAttributeDescriptor::new("age", "Age", "System.Int32")
	])]);
}

#[test]
fn each_element_name_yields_a_descriptor() {
	let mut ty = ComponentType::new("Shop.PriceTagHelper");
	ty.element_names = vec!["price".to_string(), "cost".to_string()];

	let descriptors = create_descriptors("Shop", &ty).unwrap();

	let tags: Vec<_> = descriptors.iter().map(TagHelperDescriptor::tag_name).collect();
	assert_eq!(tags, ["price", "cost"]);
	assert!(descriptors.iter().all(|d| d.type_name() == "Shop.PriceTagHelper" && d.assembly_name() == "Shop"));
}

#[test]
fn attribute_override_wins() {
	let mut ty = ComponentType::new("Shop.LinkTagHelper");
	ty.properties.push(PropertyDef {
		attribute: Some("asp-route".to_string()),
		..property("Route", "System.String")
	});
	ty.properties.push(property("HrefLang", "System.String"));

	let descriptor = &create_descriptors("Shop", &ty).unwrap()[0];
	let names: Vec<_> = descriptor.attributes().iter().map(|a| a.name.as_str()).collect();

	assert_eq!(names, ["asp-route", "href-lang"]);
}

#[test]
fn invalid_element_name_fails_the_type() {
	let mut ty = ComponentType::new("Shop.BangTagHelper");
	ty.element_names = vec!["p".to_string(), "!".to_string()];

	assert_eq!(
		create_descriptors("Shop", &ty),
		Err(TagNameError::InvalidCharacter {
			name: "!".to_string(),
			character: '!',
		})
	);
}

#[test]
fn blank_element_name_fails_the_type() {
	let mut ty = ComponentType::new("Shop.BlankTagHelper");
	ty.element_names = vec!["  ".to_string()];

	assert_eq!(create_descriptors("Shop", &ty), Err(TagNameError::NullOrWhitespace));
}
