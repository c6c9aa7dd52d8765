use indexmap::IndexMap;
use indexmap::map::Entry;
use serde::{Serialize, Serializer};

use crate::{DescriptorKey, TagHelperDescriptor};


/// A collection of [`TagHelperDescriptor`]s that never holds two equal
/// descriptors.
///
/// Entries are keyed by [`DescriptorKey`]. Inserting a descriptor equal to
/// one already present keeps the existing entry. Iteration follows first
/// insertion, but equality between sets ignores order.
#[derive(Debug, Clone, Default)]
pub struct DescriptorSet {
	entries: IndexMap<DescriptorKey, TagHelperDescriptor>,
}

impl DescriptorSet {
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds `descriptor`, returning `false` if an equal one was already present.
	pub fn insert(&mut self, descriptor: TagHelperDescriptor) -> bool {
		match self.entries.entry(descriptor.key()) {
			Entry::Occupied(_) => false,
			Entry::Vacant(slot) => {
				slot.insert(descriptor);
				true
			}
		}
	}

	/// Adds every descriptor, returning how many were new.
	pub fn union<I>(&mut self, descriptors: I) -> usize
	where
		I: IntoIterator<Item = TagHelperDescriptor>,
	{
		let mut added = 0;
		for descriptor in descriptors {
			if self.insert(descriptor) {
				added += 1;
			}
		}
		added
	}

	/// Removes every descriptor for which `predicate` holds, returning how many
	/// were removed.
	pub fn remove_where<F>(&mut self, mut predicate: F) -> usize
	where
		F: FnMut(&TagHelperDescriptor) -> bool,
	{
		let before = self.entries.len();
		self.entries.retain(|_, descriptor| !predicate(descriptor));
		before - self.entries.len()
	}

	pub fn contains(&self, descriptor: &TagHelperDescriptor) -> bool {
		self.entries.contains_key(&descriptor.key())
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn clear(&mut self) {
		self.entries.clear();
	}

	/// Iterates descriptors in first-insertion order.
	pub fn iter(&self) -> impl ExactSizeIterator<Item = &TagHelperDescriptor> + '_ {
		self.entries.values()
	}

	pub fn into_vec(self) -> Vec<TagHelperDescriptor> {
		self.entries.into_values().collect()
	}
}

impl PartialEq for DescriptorSet {
	fn eq(&self, other: &Self) -> bool {
		self.len() == other.len() && self.entries.keys().all(|key| other.entries.contains_key(key))
	}
}

impl Eq for DescriptorSet {}

impl FromIterator<TagHelperDescriptor> for DescriptorSet {
	fn from_iter<I: IntoIterator<Item = TagHelperDescriptor>>(iter: I) -> Self {
		let mut set = Self::new();
		set.union(iter);
		set
	}
}

impl Extend<TagHelperDescriptor> for DescriptorSet {
	fn extend<I: IntoIterator<Item = TagHelperDescriptor>>(&mut self, iter: I) {
		self.union(iter);
	}
}

impl IntoIterator for DescriptorSet {
	type Item = TagHelperDescriptor;
	type IntoIter = indexmap::map::IntoValues<DescriptorKey, TagHelperDescriptor>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.into_values()
	}
}

impl<'a> IntoIterator for &'a DescriptorSet {
	type Item = &'a TagHelperDescriptor;
	type IntoIter = indexmap::map::Values<'a, DescriptorKey, TagHelperDescriptor>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.values()
	}
}

impl Serialize for DescriptorSet {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.collect_seq(self.entries.values())
	}
}
