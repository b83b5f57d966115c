use std::path::Path;
use std::path::PathBuf;
use std::process;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;

use clap::Parser;
use idxdoc_cli::Commands;
use idxdoc_cli::IdxdocCli;
use idxdoc_cli::OutputFormat;
use idxdoc_core::GeneratedDocs;
use idxdoc_core::IdxdocConfig;
use idxdoc_core::check_outputs;
use idxdoc_core::generate;
use idxdoc_core::write_outputs;
use owo_colors::OwoColorize;
use similar::ChangeTag;
use similar::TextDiff;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive.
const LOG_ENV: &str = "IDXDOC_LOG";

static USE_COLOR: AtomicBool = AtomicBool::new(true);

fn color_enabled() -> bool {
	USE_COLOR.load(Ordering::Relaxed)
}

/// Apply ANSI color codes only when color is enabled.
macro_rules! colored {
	($text:expr,red) => {
		if color_enabled() {
			format!("{}", $text.red())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,green) => {
		if color_enabled() {
			format!("{}", $text.green())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,bold) => {
		if color_enabled() {
			format!("{}", $text.bold())
		} else {
			format!("{}", $text)
		}
	};
}

fn main() {
	let args = IdxdocCli::parse();

	// Respect NO_COLOR env var, --no-color flag and terminal capabilities.
	let use_color = !args.no_color
		&& std::env::var_os("NO_COLOR").is_none()
		&& supports_color::on(supports_color::Stream::Stdout).is_some();
	if !use_color {
		USE_COLOR.store(false, Ordering::Relaxed);
	}

	init_logging(args.verbose, use_color);

	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	let result = match args.command {
		Some(Commands::Generate { dry_run }) => run_generate(&args, dry_run),
		Some(Commands::Check { diff, format }) => run_check(&args, diff, format),
		None => {
			eprintln!("No subcommand specified. Run `idxdoc --help` for usage.");
			process::exit(1);
		}
	};

	match result {
		Ok(true) => {}
		Ok(false) => process::exit(1),
		Err(e) => {
			match e.downcast::<idxdoc_core::IdxdocError>() {
				Ok(idxdoc_err) => {
					let report: miette::Report = (*idxdoc_err).into();
					eprintln!("{report:?}");
				}
				Err(e) => {
					eprintln!("{} {e}", colored!("error:", red));
				}
			}
			process::exit(2);
		}
	}
}

fn init_logging(verbose: bool, use_color: bool) {
	let default_directive = if verbose { "debug" } else { "warn" };
	let filter =
		EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_directive));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_ansi(use_color)
		.without_time()
		.init();
}

fn resolve_root(args: &IdxdocCli) -> PathBuf {
	args.path
		.clone()
		.unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

fn load_config(args: &IdxdocCli, root: &Path) -> Result<IdxdocConfig, Box<dyn std::error::Error>> {
	let mut config = IdxdocConfig::load_or_default(root)?;
	if let Some(definitions) = &args.definitions {
		config.definitions.clone_from(definitions);
	}
	tracing::debug!(?config, root = %root.display(), "resolved config");
	Ok(config)
}

fn generate_docs(args: &IdxdocCli) -> Result<(PathBuf, GeneratedDocs), Box<dyn std::error::Error>> {
	let root = resolve_root(args);
	let config = load_config(args, &root)?;
	let docs = generate(&config, &root)?;
	Ok((root, docs))
}

/// Returns `Ok(true)` on success.
fn run_generate(args: &IdxdocCli, dry_run: bool) -> Result<bool, Box<dyn std::error::Error>> {
	let (root, docs) = generate_docs(args)?;

	if dry_run {
		println!("Dry run: would write {} file(s):", docs.files.len());
		for file in &docs.files {
			println!("  {} ({})", make_relative(&file.path, &root), file.kind);
		}
		return Ok(true);
	}

	write_outputs(&docs)?;
	println!(
		"{} {} file(s) from {} definition(s).",
		colored!("Generated", green),
		docs.files.len(),
		docs.record_count
	);

	if args.verbose {
		for file in &docs.files {
			println!("  {}", make_relative(&file.path, &root));
		}
	}

	Ok(true)
}

/// Returns `Ok(false)` when any output is stale.
fn run_check(
	args: &IdxdocCli,
	show_diff: bool,
	format: OutputFormat,
) -> Result<bool, Box<dyn std::error::Error>> {
	let (root, docs) = generate_docs(args)?;
	let result = check_outputs(&docs)?;

	match format {
		OutputFormat::Json => {
			let stale: Vec<serde_json::Value> = result
				.stale
				.iter()
				.map(|entry| {
					serde_json::json!({
						"kind": entry.kind.as_str(),
						"file": make_relative(&entry.path, &root),
						"missing": entry.is_missing(),
					})
				})
				.collect();
			let output = serde_json::json!({
				"ok": result.is_ok(),
				"definitions": docs.record_count,
				"stale": stale,
			});
			println!("{output}");
		}
		OutputFormat::Text if result.is_ok() => {
			println!("Check passed: all outputs are up to date.");
		}
		OutputFormat::Text => {
			eprintln!("{}", colored!("Check failed.", bold));
			for entry in &result.stale {
				let rel = make_relative(&entry.path, &root);
				if entry.is_missing() {
					eprintln!("  {} output is missing: {rel}", entry.kind);
				} else {
					eprintln!("  {} output is out of date: {rel}", entry.kind);
				}

				if show_diff {
					print_diff(
						entry.current_content.as_deref().unwrap_or_default(),
						&entry.expected_content,
					);
				}
			}
			eprintln!();
			eprintln!(
				"{} stale output(s). Run `idxdoc generate` to update them.",
				result.stale.len()
			);
		}
	}

	Ok(result.is_ok())
}

fn print_diff(current: &str, expected: &str) {
	let diff = TextDiff::from_lines(current, expected);
	for change in diff.iter_all_changes() {
		match change.tag() {
			ChangeTag::Delete => {
				eprint!("  {}", colored!(format!("-{change}"), red));
			}
			ChangeTag::Insert => {
				eprint!("  {}", colored!(format!("+{change}"), green));
			}
			ChangeTag::Equal => {
				eprint!("   {change}");
			}
		}
	}
	if !expected.ends_with('\n') {
		eprintln!();
	}
}

fn make_relative(path: &Path, root: &Path) -> String {
	path.strip_prefix(root)
		.unwrap_or(path)
		.display()
		.to_string()
}
