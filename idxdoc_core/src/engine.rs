use std::fmt;
use std::path::Path;
use std::path::PathBuf;

use crate::IdxdocConfig;
use crate::IdxdocError;
use crate::IdxdocResult;
use crate::IndexerRecord;
use crate::loader::load_definitions;
use crate::render::render_freeleech_table;
use crate::render::render_indexers_table;
use crate::transform::is_generic;
use crate::transform::sort_records;

/// The tables idxdoc knows how to render.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum OutputKind {
	/// Every indexer with its description and IRC/RSS support.
	Indexers,
	/// Indexers that declare freeleech variables.
	Freeleech,
}

impl OutputKind {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Indexers => "indexers",
			Self::Freeleech => "freeleech",
		}
	}

	/// Render this table from already sorted records.
	pub fn render(self, records: &[IndexerRecord]) -> String {
		match self {
			Self::Indexers => render_indexers_table(records),
			Self::Freeleech => render_freeleech_table(records),
		}
	}
}

impl fmt::Display for OutputKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// One rendered table and the absolute path it belongs at.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GeneratedFile {
	pub kind: OutputKind,
	pub path: PathBuf,
	pub content: String,
}

/// Result of running the pipeline once.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GeneratedDocs {
	/// Number of definition files loaded.
	pub record_count: usize,
	/// Rendered outputs, in configuration order (indexers, then freeleech).
	pub files: Vec<GeneratedFile>,
}

/// An output whose on-disk content differs from what would be generated.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct StaleOutput {
	pub kind: OutputKind,
	pub path: PathBuf,
	/// Current file content, or `None` when the file does not exist.
	pub current_content: Option<String>,
	pub expected_content: String,
}

impl StaleOutput {
	pub fn is_missing(&self) -> bool {
		self.current_content.is_none()
	}
}

/// Result of comparing generated outputs with the files on disk.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct CheckResult {
	pub stale: Vec<StaleOutput>,
}

impl CheckResult {
	pub fn is_ok(&self) -> bool {
		self.stale.is_empty()
	}
}

/// Load, sort and render every output enabled in `config`. Paths in the
/// config are resolved against `root`. Nothing is written.
pub fn generate(config: &IdxdocConfig, root: &Path) -> IdxdocResult<GeneratedDocs> {
	let records = load_definitions(&config.definitions_dir(root), &config.extension)?;
	let record_count = records.len();
	let records = sort_records(records);

	tracing::info!(
		total = record_count,
		generic = records.iter().filter(|record| is_generic(record)).count(),
		freeleech = records.iter().filter(|record| record.has_freeleech()).count(),
		"sorted indexer records"
	);

	let targets = [
		(OutputKind::Indexers, config.output.indexers.as_ref()),
		(OutputKind::Freeleech, config.output.freeleech.as_ref()),
	];
	let files = targets
		.into_iter()
		.filter_map(|(kind, path)| path.map(|path| (kind, root.join(path))))
		.map(|(kind, path)| {
			GeneratedFile {
				kind,
				path,
				content: kind.render(&records),
			}
		})
		.collect();

	Ok(GeneratedDocs {
		record_count,
		files,
	})
}

/// Write every generated file, creating parent directories as needed and
/// overwriting existing content.
pub fn write_outputs(docs: &GeneratedDocs) -> IdxdocResult<()> {
	for file in &docs.files {
		let write_error = |e: std::io::Error| {
			IdxdocError::WriteOutput {
				path: file.path.display().to_string(),
				reason: e.to_string(),
			}
		};

		if let Some(parent) = file.path.parent() {
			std::fs::create_dir_all(parent).map_err(write_error)?;
		}
		std::fs::write(&file.path, &file.content).map_err(write_error)?;
		tracing::debug!(kind = %file.kind, path = %file.path.display(), "wrote output");
	}

	Ok(())
}

/// Compare every generated file with the file currently on disk.
pub fn check_outputs(docs: &GeneratedDocs) -> IdxdocResult<CheckResult> {
	let mut stale = Vec::new();

	for file in &docs.files {
		let current_bytes = match std::fs::read(&file.path) {
			Ok(bytes) => Some(bytes),
			Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
			Err(e) => return Err(e.into()),
		};

		if current_bytes.as_deref() != Some(file.content.as_bytes()) {
			stale.push(StaleOutput {
				kind: file.kind,
				path: file.path.clone(),
				current_content: current_bytes
					.map(|bytes| String::from_utf8_lossy(&bytes).into_owned()),
				expected_content: file.content.clone(),
			});
		}
	}

	Ok(CheckResult { stale })
}
