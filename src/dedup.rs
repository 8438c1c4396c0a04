//! Identifier-based deduplication and deterministic output ordering.

use std::collections::BTreeMap;

use tracing::debug;

use crate::error::SiftError;
use crate::record::{COL_ID, Record};

/// Collapse a record set to one record per unique `ID` and sort the
/// survivors ascending by identifier.
///
/// Later occurrences win whole: when two records share an `ID`, the one
/// seen later in input order replaces the earlier one entirely, field by
/// field merging never happens. Identifiers compare as opaque strings, so
/// `"10"` sorts before `"2"`. Empty input yields empty output; a record
/// without an `ID` column fails the run.
pub fn dedupe(rows: Vec<Record>) -> Result<Vec<Record>, SiftError> {
    let before = rows.len();
    let mut by_id: BTreeMap<String, Record> = BTreeMap::new();
    for record in rows {
        let id = record
            .get(COL_ID)
            .ok_or(SiftError::SchemaError { column: COL_ID })?
            .to_string();
        by_id.insert(id, record);
    }
    debug!(before, after = by_id.len(), "deduplicated by ID");
    Ok(by_id.into_values().collect())
}
