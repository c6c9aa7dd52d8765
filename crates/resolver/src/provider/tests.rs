use std::sync::atomic::{AtomicUsize, Ordering};

use pretty_assertions::assert_eq;
use tagscope_primitives::ErrorBag;

use super::*;

fn descriptor(tag: &str, type_name: &str, assembly: &str) -> TagHelperDescriptor {
	TagHelperDescriptor::new(tag, type_name, assembly, [])
}

fn provide(provider: &impl DescriptorProvider, assembly: &str) -> Result<Vec<TagHelperDescriptor>, ProviderError> {
	provider.provide(assembly, SourceLocation::ZERO, &mut ErrorBag::new())
}

#[test]
fn catalog_serves_registered_assemblies() {
	let catalog = AssemblyCatalog::new().with_assembly("Shop", [descriptor("p", "Shop.PTagHelper", "Shop")]);

	assert_eq!(provide(&catalog, "Shop").unwrap(), vec![descriptor("p", "Shop.PTagHelper", "Shop")]);
}

#[test]
fn catalog_reports_unknown_assembly() {
	let catalog = AssemblyCatalog::new();

	let err = provide(&catalog, "Missing").unwrap_err();
	assert!(matches!(err, ProviderError::AssemblyNotFound(ref name) if name == "Missing"));
	assert_eq!(err.to_string(), "Cannot resolve assembly 'Missing'.");
}

#[test]
fn catalog_groups_by_assembly() {
	let catalog: AssemblyCatalog = [
		descriptor("p", "Shop.PTagHelper", "Shop"),
		descriptor("input", "Forms.InputTagHelper", "Forms"),
		descriptor("div", "Shop.DivTagHelper", "Shop"),
	]
	.into_iter()
	.collect();

	assert_eq!(catalog.assembly_names(), ["Forms", "Shop"]);
	assert_eq!(provide(&catalog, "Shop").unwrap().len(), 2);
}

#[test]
fn catalog_keeps_empty_assemblies() {
	let catalog = AssemblyCatalog::new().with_assembly("Empty", []);

	assert!(catalog.contains("Empty"));
	assert_eq!(provide(&catalog, "Empty").unwrap(), Vec::new());
}

fn counting_provider(calls: &AtomicUsize) -> impl DescriptorProvider + '_ {
	FnProvider::new(move |assembly: &str, _: SourceLocation, _: &mut dyn ErrorSink| {
		calls.fetch_add(1, Ordering::SeqCst);
		match assembly {
			"Shop" => Ok(vec![descriptor("p", "Shop.PTagHelper", "Shop")]),
			other => Err(ProviderError::AssemblyNotFound(other.to_string())),
		}
	})
}

#[test]
fn cache_queries_inner_once_per_assembly() {
	let calls = AtomicUsize::new(0);
	let cache = CachingProvider::new(counting_provider(&calls));

	let first = provide(&cache, "Shop").unwrap();
	let second = provide(&cache, "Shop").unwrap();

	assert_eq!(first, second);
	assert_eq!(calls.load(Ordering::SeqCst), 1);
	assert_eq!(cache.len(), 1);
}

#[test]
fn cache_does_not_remember_failures() {
	let calls = AtomicUsize::new(0);
	let cache = CachingProvider::new(counting_provider(&calls));

	assert!(provide(&cache, "Missing").is_err());
	assert!(provide(&cache, "Missing").is_err());

	assert_eq!(calls.load(Ordering::SeqCst), 2);
	assert!(cache.is_empty());
}

#[test]
fn cache_invalidation_forces_reload() {
	let calls = AtomicUsize::new(0);
	let cache = CachingProvider::new(counting_provider(&calls));

	provide(&cache, "Shop").unwrap();
	assert!(cache.invalidate("Shop"));
	assert!(!cache.invalidate("Shop"));
	provide(&cache, "Shop").unwrap();
	cache.clear();
	provide(&cache, "Shop").unwrap();

	assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[test]
fn inner_reports_reach_the_sink() {
	let provider = FnProvider::new(|_: &str, location: SourceLocation, errors: &mut dyn ErrorSink| {
		errors.on_error(location, "skipped an ineligible type".to_string());
		Ok(Vec::new())
	});
	let mut errors = ErrorBag::new();
	let location = SourceLocation::new(3, 0, 3);

	provider.provide("Shop", location, &mut errors).unwrap();

	assert_eq!(errors.len(), 1);
	assert_eq!(errors.errors()[0].location, location);
}

#[test]
fn shared_providers_forward() {
	let catalog = Arc::new(AssemblyCatalog::new().with_assembly("Shop", [descriptor("p", "Shop.PTagHelper", "Shop")]));
	let boxed: Box<dyn DescriptorProvider> = Box::new(catalog.clone());

	assert_eq!(provide(&catalog, "Shop").unwrap().len(), 1);
	assert_eq!(provide(&boxed, "Shop").unwrap().len(), 1);
	assert_eq!(provide(&&*catalog, "Shop").unwrap().len(), 1);
}
