use std::path::PathBuf;

use clap::Parser;


#[derive(Parser, Debug)]
#[command(name = "tagscope")]
#[command(about = "Resolve the tag helpers in scope after a list of directives")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Directive file, one `@addTagHelper`/`@removeTagHelper` per line ("-" reads stdin)
	pub directives: PathBuf,

	/// Config file (defaults to ./tagscope.toml when present)
	#[arg(long, short = 'c', value_name = "FILE")]
	pub config: Option<PathBuf>,

	/// Additional directory to search for assembly manifests; may repeat
	#[arg(long = "manifest-dir", short = 'm', value_name = "DIR")]
	pub manifest_dirs: Vec<PathBuf>,

	/// Read every manifest on each request instead of caching per assembly
	#[arg(long)]
	pub no_cache: bool,

	/// Print descriptors as JSON
	#[arg(long)]
	pub json: bool,

	/// Verbose logging
	#[arg(long, short = 'v')]
	pub verbose: bool,
}

impl Cli {
	/// Whether directives come from standard input.
	pub fn reads_stdin(&self) -> bool {
		self.directives.as_os_str() == "-"
	}
}
