//! Rendering of resolved descriptors.

use std::fmt::Write as _;

use tagscope_primitives::{DescriptorSet, TagHelperDescriptor};

/// One `tag<TAB>type<TAB>assembly<TAB>attrs` line per descriptor.
pub fn render_text(set: &DescriptorSet) -> String {
	let mut out = String::new();
	for descriptor in set {
		// Writing into a String cannot fail.
		let _ = writeln!(
			out,
			"{}\t{}\t{}\t{}",
			descriptor.tag_name(),
			descriptor.type_name(),
			descriptor.assembly_name(),
			attribute_list(descriptor)
		);
	}
	out
}

fn attribute_list(descriptor: &TagHelperDescriptor) -> String {
	descriptor
		.attributes()
		.iter()
		.map(|attr| attr.name.as_str())
		.collect::<Vec<_>>()
		.join(",")
}

/// Pretty JSON array in resolution order.
pub fn render_json(set: &DescriptorSet) -> serde_json::Result<String> {
	serde_json::to_string_pretty(set)
}
