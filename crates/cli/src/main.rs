//! `tagscope` binary.
//!
//! Reads a directive file, resolves it against assembly manifests and prints
//! the tag helpers left in scope.

use std::io::{Read, Write};
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tagscope_manifest::ManifestProvider;
use tagscope_primitives::ErrorBag;
use tagscope_resolver::{CachingProvider, DescriptorProvider, DescriptorResolver};
use tracing::{debug, info};

mod cli;
mod config;
mod directives;
mod output;

use cli::Cli;
use config::Config;

fn main() -> anyhow::Result<ExitCode> {
	let cli = Cli::parse();

	setup_tracing(cli.verbose);

	let cwd = std::env::current_dir().context("failed to read the working directory")?;
	let config = Config::discover(cli.config.as_deref(), &cwd)?;
	debug!(?config, "loaded config");

	let mut manifests = ManifestProvider::new(config.manifest_dirs);
	for dir in &cli.manifest_dirs {
		manifests.push_dir(dir);
	}
	info!(dirs = ?manifests.search_dirs(), "manifest search path");

	let provider: Box<dyn DescriptorProvider> = if config.cache && !cli.no_cache {
		Box::new(CachingProvider::new(manifests))
	} else {
		Box::new(manifests)
	};
	let resolver = DescriptorResolver::new(provider);

	let source = read_directives(&cli)?;
	let mut errors = ErrorBag::new();
	let parsed = directives::parse_directives(&source, &mut errors);
	let resolved = resolver.resolve(&parsed, &mut errors);
	info!(directives = parsed.len(), descriptors = resolved.len(), errors = errors.len(), "resolved");

	let rendered = if cli.json {
		let mut json = output::render_json(&resolved)?;
		json.push('\n');
		json
	} else {
		output::render_text(&resolved)
	};
	std::io::stdout()
		.lock()
		.write_all(rendered.as_bytes())
		.context("failed to write output")?;

	let label = cli.directives.display();
	for error in errors.errors() {
		eprintln!(
			"{label}:{}:{}: {}",
			error.location.line_index + 1,
			error.location.character_index + 1,
			error.message
		);
	}

	Ok(if errors.is_empty() { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

fn read_directives(cli: &Cli) -> anyhow::Result<String> {
	if cli.reads_stdin() {
		let mut source = String::new();
		std::io::stdin()
			.read_to_string(&mut source)
			.context("failed to read directives from stdin")?;
		return Ok(source);
	}
	read_file(&cli.directives)
}

fn read_file(path: &Path) -> anyhow::Result<String> {
	std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn setup_tracing(verbose: bool) {
	use tracing_subscriber::EnvFilter;

	let filter = EnvFilter::try_from_env("TAGSCOPE_LOG").unwrap_or_else(|_| {
		if verbose {
			EnvFilter::new("debug")
		} else {
			EnvFilter::new("warn")
		}
	});

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.init();
}
