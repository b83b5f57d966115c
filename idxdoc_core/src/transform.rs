use crate::IndexerRecord;

/// Names starting with this prefix (case-insensitive) sort after all others.
pub const GENERIC_PREFIX: &str = "generic";

/// Order records for display: alphabetically by lowercased name, with every
/// `generic*` indexer moved after the rest. The sort is stable, so records
/// with equal names keep their load order.
pub fn sort_records(mut records: Vec<IndexerRecord>) -> Vec<IndexerRecord> {
	records.sort_by_cached_key(|record| {
		let name = record.sort_name();
		(name.starts_with(GENERIC_PREFIX), name)
	});
	records
}

/// Whether `record` belongs to the trailing generic group.
pub fn is_generic(record: &IndexerRecord) -> bool {
	record.sort_name().starts_with(GENERIC_PREFIX)
}
