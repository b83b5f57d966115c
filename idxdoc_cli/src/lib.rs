use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Generate indexer support tables for the documentation site.",
	long_about = "idxdoc scans a directory of indexer definition files and renders markdown \
	              tables of the supported indexers and their freeleech support.\n\nQuick \
	              start:\n  idxdoc generate  Write the tables\n  idxdoc check     Verify the \
	              committed tables are up to date"
)]
pub struct IdxdocCli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	/// Path to the project root directory. Config and output paths are
	/// resolved against it.
	#[arg(long, short, global = true)]
	pub path: Option<PathBuf>,

	/// Directory containing the definition files. Overrides `definitions`
	/// from idxdoc.toml.
	#[arg(long, global = true)]
	pub definitions: Option<PathBuf>,

	/// Enable verbose output.
	#[arg(long, short, global = true, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, global = true, default_value_t = false)]
	pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
	/// Render the markdown tables and write them to their output paths.
	///
	/// Parent directories are created when missing and existing files are
	/// overwritten.
	Generate {
		/// Print which files would be written without touching the disk.
		#[arg(long, default_value_t = false)]
		dry_run: bool,
	},
	/// Check that the output files match what `generate` would write.
	///
	/// Exits with a non-zero status code when any output is missing or out
	/// of date. Intended for CI.
	Check {
		/// Show a line diff for each stale output.
		#[arg(long, default_value_t = false)]
		diff: bool,

		/// Output format for check results.
		#[arg(long, value_enum, default_value_t = OutputFormat::Text)]
		format: OutputFormat,
	},
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
	/// Human-readable text output.
	Text,
	/// JSON output for programmatic consumption.
	Json,
}
