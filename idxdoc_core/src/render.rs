use std::fmt::Write;

use crate::IndexerRecord;

pub const CHECK_MARK: &str = "✓";
pub const CROSS_MARK: &str = "✗";

/// Table cell glyph for a boolean feature.
pub fn checkmark(value: bool) -> &'static str {
	if value { CHECK_MARK } else { CROSS_MARK }
}

/// Render the collapsible table of every indexer with its IRC and RSS
/// support. The output has no trailing newline after `</details>`.
pub fn render_indexers_table(records: &[IndexerRecord]) -> String {
	let mut markdown = String::from("<details>\n\n");
	markdown.push_str("<summary>Click to view supported indexers</summary>\n\n");
	markdown.push_str("| Indexer | Description | IRC | RSS |\n");
	markdown.push_str("|---------|-------------|-----|-----|\n");

	for record in records {
		writeln!(
			markdown,
			"| {} | {} | {} | {} |",
			record.name,
			record.description,
			checkmark(record.supports_irc()),
			checkmark(record.supports_rss()),
		)
		.ok();
	}

	markdown.push_str("\n</details>");
	markdown
}

/// Render the freeleech table. Indexers declaring neither freeleech variable
/// are left out.
pub fn render_freeleech_table(records: &[IndexerRecord]) -> String {
	let mut markdown = String::from("| Indexer | Freeleech | Freeleech Percent |\n");
	markdown.push_str("|---------|-----------|------------------|\n");

	for record in records.iter().filter(|record| record.has_freeleech()) {
		writeln!(
			markdown,
			"| {} | {} | {} |",
			record.name,
			checkmark(record.freeleech),
			checkmark(record.freeleech_percent),
		)
		.ok();
	}

	markdown
}
