//! JSONL serialization and deserialization for mobile records.
//!
//! The snapshot file holds one `{"identifier":…,"label":…}` object per
//! line, sorted by IMEI so that rewriting an unchanged set produces an
//! identical file.

use std::collections::HashMap;

use crate::error::CoreError;

use super::types::Mobile;

/// Parse JSONL content into an IMEI-keyed record map, skipping empty lines.
/// Duplicate IMEIs are accepted but logged; the later line wins.
pub fn parse_jsonl_records(content: &str) -> Result<HashMap<String, Mobile>, CoreError> {
    content
        .lines()
        .enumerate()
        .try_fold(HashMap::new(), |mut map, (line_num, line)| {
            let line = line.trim();
            if line.is_empty() {
                return Ok(map);
            }

            let mobile: Mobile =
                serde_json::from_str(line).map_err(|e| CoreError::SnapshotParse {
                    line: line_num + 1,
                    message: e.to_string(),
                })?;
            if map.contains_key(&mobile.imei) {
                tracing::warn!(
                    line = line_num + 1,
                    imei = %mobile.imei,
                    "duplicate IMEI in snapshot overwrites previous entry"
                );
            }
            map.insert(mobile.imei.clone(), mobile);
            Ok(map)
        })
}

/// Export records to JSONL ordered by IMEI. An empty set encodes to an
/// empty string.
pub fn export_records_to_jsonl<'a, I>(records: I) -> Result<String, CoreError>
where
    I: IntoIterator<Item = &'a Mobile>,
{
    let mut entries: Vec<&Mobile> = records.into_iter().collect();
    entries.sort_by(|a, b| a.imei.cmp(&b.imei));

    entries.into_iter().try_fold(String::new(), |mut out, mobile| {
        let line =
            serde_json::to_string(mobile).map_err(|e| CoreError::SnapshotEncode(e.to_string()))?;
        out.push_str(&line);
        out.push('\n');
        Ok(out)
    })
}
