use std::borrow::Cow;
use std::path::Path;
use std::path::PathBuf;
use std::sync::LazyLock;

use regex::Regex;

use crate::IdxdocError;
use crate::IdxdocResult;
use crate::IndexerRecord;

static NAME_RE: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"name:\s*(.*)").expect("valid regex"));

static DESCRIPTION_RE: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"description:\s*(.*)").expect("valid regex"));

/// Captures the run of dash-prefixed lines directly following `supports:`.
static SUPPORTS_BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"supports:\s*\n((?:\s*-\s*[^\n]+\n)*)").expect("valid regex")
});

static LIST_ENTRY_RE: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"-\s*(\w+)").expect("valid regex"));

static FREELEECH_RE: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"(?ms)vars:.*?-\s*freeleech\s*$").expect("valid regex"));

static FREELEECH_PERCENT_RE: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"(?ms)vars:.*?-\s*freeleechPercent\s*$").expect("valid regex")
});

/// Extract an [`IndexerRecord`] from the raw text of a definition file.
///
/// This is pattern matching, not YAML parsing. Fields that can't be found
/// come back empty or `false`; nothing here fails.
pub fn parse_definition(content: &str) -> IndexerRecord {
	// The supports pattern needs every entry terminated by a newline.
	let content: Cow<'_, str> = if content.ends_with('\n') {
		Cow::Borrowed(content)
	} else {
		Cow::Owned(format!("{content}\n"))
	};

	IndexerRecord {
		name: first_field(&NAME_RE, &content),
		description: first_field(&DESCRIPTION_RE, &content),
		supports: supports_list(&content),
		freeleech: FREELEECH_RE.is_match(&content),
		freeleech_percent: FREELEECH_PERCENT_RE.is_match(&content),
		source: None,
	}
}

fn first_field(pattern: &Regex, content: &str) -> String {
	pattern
		.captures(content)
		.and_then(|caps| caps.get(1))
		.map(|value| value.as_str().trim().to_string())
		.unwrap_or_default()
}

fn supports_list(content: &str) -> Vec<String> {
	let Some(block) = SUPPORTS_BLOCK_RE
		.captures(content)
		.and_then(|caps| caps.get(1))
	else {
		return Vec::new();
	};

	LIST_ENTRY_RE
		.captures_iter(block.as_str())
		.filter_map(|caps| caps.get(1))
		.map(|tag| tag.as_str().to_string())
		.collect()
}

/// Load one record per definition file in `dir`.
///
/// Only regular files whose name ends in `.<extension>` are read. Files are
/// visited in file-name order so repeated runs see the same sequence.
pub fn load_definitions(dir: &Path, extension: &str) -> IdxdocResult<Vec<IndexerRecord>> {
	let paths = definition_paths(dir, extension)?;
	let mut records = Vec::with_capacity(paths.len());

	for path in paths {
		let bytes = std::fs::read(&path).map_err(|e| IdxdocError::ReadDefinition {
			path: path.display().to_string(),
			reason: e.to_string(),
		})?;
		let content = String::from_utf8_lossy(&bytes);
		let mut record = parse_definition(&content);
		tracing::debug!(
			path = %path.display(),
			name = %record.name,
			supports = ?record.supports,
			freeleech = record.freeleech,
			freeleech_percent = record.freeleech_percent,
			"loaded definition"
		);
		record.source = Some(path);
		records.push(record);
	}

	tracing::info!(count = records.len(), dir = %dir.display(), "loaded definitions");
	Ok(records)
}

/// The definition files in `dir`, sorted by file name.
pub fn definition_paths(dir: &Path, extension: &str) -> IdxdocResult<Vec<PathBuf>> {
	let dir_error = |e: std::io::Error| {
		IdxdocError::DefinitionsDir {
			path: dir.display().to_string(),
			reason: e.to_string(),
		}
	};
	let suffix = format!(".{}", extension.trim_start_matches('.'));
	let mut paths = Vec::new();

	for entry in std::fs::read_dir(dir).map_err(dir_error)? {
		let entry = entry.map_err(dir_error)?;
		let path = entry.path();

		let matches_suffix = entry
			.file_name()
			.to_str()
			.is_some_and(|name| name.ends_with(&suffix));
		if matches_suffix && path.is_file() {
			paths.push(path);
		}
	}

	paths.sort();
	Ok(paths)
}
