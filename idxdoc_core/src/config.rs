use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::IdxdocError;
use crate::IdxdocResult;

/// Supported config file locations in discovery order (highest precedence
/// first).
pub const CONFIG_FILE_CANDIDATES: [&str; 3] =
	["idxdoc.toml", ".idxdoc.toml", ".config/idxdoc.toml"];

/// Default directory holding the indexer definition files.
pub const DEFAULT_DEFINITIONS_DIR: &str = "internal/indexer/definitions";

/// Default file extension (without the dot) of definition files.
pub const DEFAULT_EXTENSION: &str = "yaml";

/// Default path of the generated indexer table.
pub const DEFAULT_INDEXERS_OUTPUT: &str = "snippets/indexers.mdx";

/// Default path of the generated freeleech table.
pub const DEFAULT_FREELEECH_OUTPUT: &str = "snippets/freeleech.mdx";

/// Configuration loaded from an `idxdoc.toml` file.
///
/// ```toml
/// definitions = "internal/indexer/definitions"
/// extension = "yaml"
///
/// [output]
/// indexers = "snippets/indexers.mdx"
/// freeleech = "snippets/freeleech.mdx"
/// ```
///
/// All paths are relative to the project root.
#[derive(Debug, Clone, Deserialize, Eq, PartialEq)]
pub struct IdxdocConfig {
	/// Directory scanned for definition files.
	#[serde(default = "default_definitions")]
	pub definitions: PathBuf,
	/// Only files ending in `.<extension>` are loaded.
	#[serde(default = "default_extension")]
	pub extension: String,
	/// Which tables to render and where to write them.
	#[serde(default)]
	pub output: OutputConfig,
}

/// Output targets. When the `[output]` table is present only the listed
/// outputs are generated; when it is absent both are.
#[derive(Debug, Clone, Deserialize, Eq, PartialEq)]
pub struct OutputConfig {
	#[serde(default)]
	pub indexers: Option<PathBuf>,
	#[serde(default)]
	pub freeleech: Option<PathBuf>,
}

impl Default for OutputConfig {
	fn default() -> Self {
		Self {
			indexers: Some(PathBuf::from(DEFAULT_INDEXERS_OUTPUT)),
			freeleech: Some(PathBuf::from(DEFAULT_FREELEECH_OUTPUT)),
		}
	}
}

impl Default for IdxdocConfig {
	fn default() -> Self {
		Self {
			definitions: default_definitions(),
			extension: default_extension(),
			output: OutputConfig::default(),
		}
	}
}

fn default_definitions() -> PathBuf {
	PathBuf::from(DEFAULT_DEFINITIONS_DIR)
}

fn default_extension() -> String {
	DEFAULT_EXTENSION.to_string()
}

impl IdxdocConfig {
	/// Resolve the config path from known discovery candidates.
	#[must_use]
	pub fn resolve_path(root: &Path) -> Option<PathBuf> {
		CONFIG_FILE_CANDIDATES
			.iter()
			.map(|candidate| root.join(candidate))
			.find(|path| path.is_file())
	}

	/// Load the config from the first discovered config file at `root`.
	/// Returns `None` if no config file exists.
	pub fn load(root: &Path) -> IdxdocResult<Option<IdxdocConfig>> {
		let Some(config_path) = Self::resolve_path(root) else {
			return Ok(None);
		};

		tracing::debug!(path = %config_path.display(), "loading config");
		let content = std::fs::read_to_string(&config_path)?;
		let config = Self::from_toml(&content)?;

		Ok(Some(config))
	}

	/// Load the discovered config, falling back to defaults when none exists.
	pub fn load_or_default(root: &Path) -> IdxdocResult<IdxdocConfig> {
		Ok(Self::load(root)?.unwrap_or_default())
	}

	/// Parse config from TOML text.
	pub fn from_toml(content: &str) -> IdxdocResult<IdxdocConfig> {
		toml::from_str(content).map_err(|e| IdxdocError::ConfigParse(e.to_string()))
	}

	/// The definitions directory resolved against `root`.
	pub fn definitions_dir(&self, root: &Path) -> PathBuf {
		root.join(&self.definitions)
	}
}
