use std::path::PathBuf;

/// Feature tag for announce-channel support.
pub const FEATURE_IRC: &str = "irc";

/// Feature tag for feed support.
pub const FEATURE_RSS: &str = "rss";

/// The fields of one indexer definition that end up in the generated tables.
///
/// Every field is always present: values missing from the definition file are
/// empty strings, an empty feature list, or `false`.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct IndexerRecord {
	/// Display name of the indexer.
	pub name: String,
	/// One-line description.
	pub description: String,
	/// Feature tags as written in the `supports:` list, in source order.
	pub supports: Vec<String>,
	/// Whether the definition declares a `freeleech` variable.
	pub freeleech: bool,
	/// Whether the definition declares a `freeleechPercent` variable.
	pub freeleech_percent: bool,
	/// File the record was loaded from. `None` for records built in memory.
	pub source: Option<PathBuf>,
}

impl IndexerRecord {
	/// Case-insensitive membership check against `supports`.
	pub fn supports(&self, feature: &str) -> bool {
		let feature = feature.to_lowercase();
		self.supports
			.iter()
			.any(|tag| tag.to_lowercase() == feature)
	}

	pub fn supports_irc(&self) -> bool {
		self.supports(FEATURE_IRC)
	}

	pub fn supports_rss(&self) -> bool {
		self.supports(FEATURE_RSS)
	}

	/// True when either freeleech variable is declared.
	pub fn has_freeleech(&self) -> bool {
		self.freeleech || self.freeleech_percent
	}

	/// Lowercased name used for ordering.
	pub(crate) fn sort_name(&self) -> String {
		self.name.to_lowercase()
	}
}
