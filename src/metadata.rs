/// Metadata-driven sample grouping
///
/// Reads a delimited table with a `sample_id` column and a configurable
/// group column, and partitions samples into groups. Group order and
/// in-group sample order both follow the order rows appear in the file.
use anyhow::{Context, Result};
use indexmap::IndexMap;
use log::warn;
use std::path::Path;

/// Group name -> ordered sample list.
pub type GroupMapping = IndexMap<String, Vec<String>>;

/// Read `path` with the given delimiter and partition samples by the
/// `group_col` column.
///
/// Rows with an empty sample_id or group cell are skipped with a warning.
/// Sample ids are not deduplicated: a sample listed under two groups is
/// merged into both, and a sample listed twice in one group is appended
/// twice.
pub fn read_group_mapping(path: &Path, group_col: &str, delimiter: u8) -> Result<GroupMapping> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("failed to open metadata file {}", path.display()))?;

    let headers = reader
        .headers()
        .with_context(|| format!("failed to read metadata header from {}", path.display()))?
        .clone();
    let sample_idx = headers.iter().position(|h| h == "sample_id");
    let group_idx = headers.iter().position(|h| h == group_col);
    let (sample_idx, group_idx) = match (sample_idx, group_idx) {
        (Some(s), Some(g)) => (s, g),
        _ => anyhow::bail!("metadata must have columns: sample_id and {group_col}"),
    };

    let mut mapping = GroupMapping::new();
    for (row, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("failed to parse metadata row {row}"))?;
        let sample_id = cell(&record, sample_idx);
        let group = cell(&record, group_idx);
        match (sample_id, group) {
            (Some(sample_id), Some(group)) => {
                mapping
                    .entry(group.to_string())
                    .or_insert_with(Vec::new)
                    .push(sample_id.to_string());
            }
            (sample_id, group) => {
                warn!(
                    "metadata row {row}: sample_id = {sample_id:?}, {group_col} = {group:?}; \
                     one of both is unset, this row will be ignored"
                );
            }
        }
    }

    Ok(mapping)
}

/// A cell is unset when the column is missing from the record or empty.
fn cell<'a>(record: &'a csv::StringRecord, idx: usize) -> Option<&'a str> {
    record.get(idx).filter(|v| !v.is_empty())
}
