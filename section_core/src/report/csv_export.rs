//! Tabular (CSV) export of capacity records.
//!
//! The column set is the union of keys across all records: preferred keys
//! first in their fixed order, then any other key alphabetically. A record
//! without a column gets an empty cell.

use std::collections::{BTreeMap, BTreeSet};

use crate::errors::{CalcError, CalcResult};
use crate::sections::{CapacityRecord, RecordValue, PREFERRED_COLUMNS};

/// Ordered column headers for a set of records
pub fn column_order(records: &[CapacityRecord]) -> Vec<String> {
    let all_keys: BTreeSet<&str> = records
        .iter()
        .flat_map(|r| r.fields().into_iter().map(|(k, _)| k))
        .collect();

    let preferred = PREFERRED_COLUMNS.iter().copied().filter(|k| all_keys.contains(k));
    let rest = all_keys.iter().copied().filter(|k| !PREFERRED_COLUMNS.contains(k));
    preferred.chain(rest).map(str::to_string).collect()
}

/// Render records as CSV text (header row + one row per record).
///
/// Returns an empty string for an empty slice.
pub fn to_csv_string(records: &[CapacityRecord]) -> CalcResult<String> {
    if records.is_empty() {
        return Ok(String::new());
    }

    let headers = column_order(records);
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(&headers)
        .map_err(|e| CalcError::serialization(e.to_string()))?;

    for record in records {
        let cells: BTreeMap<&str, RecordValue> = record.fields().into_iter().collect();
        let row: Vec<String> = headers
            .iter()
            .map(|h| cells.get(h.as_str()).map(|v| v.to_string()).unwrap_or_default())
            .collect();
        writer
            .write_record(&row)
            .map_err(|e| CalcError::serialization(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| CalcError::serialization(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| CalcError::serialization(e.to_string()))
}

/// Parse CSV text produced by [`to_csv_string`] back into rows keyed by
/// column. Empty cells are omitted from a row.
pub fn read_csv_rows(text: &str) -> CalcResult<Vec<BTreeMap<String, String>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(text.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| CalcError::serialization(e.to_string()))?
        .clone();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| CalcError::serialization(e.to_string()))?;
        let row = headers
            .iter()
            .zip(record.iter())
            .filter(|(_, value)| !value.is_empty())
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        rows.push(row);
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::{Section, SectionStrategy};
    use approx::assert_relative_eq;

    fn reference_records() -> Vec<CapacityRecord> {
        Section::documented_defaults()
            .iter()
            .map(|s| s.compute().unwrap())
            .collect()
    }

    #[test]
    fn test_column_order_is_union_preferred_first() {
        let columns = column_order(&reference_records());
        assert_eq!(columns.len(), 16);
        assert_eq!(columns[0], "section");
        assert_eq!(columns[1], "A_mm2");
        assert_eq!(&columns[14..], ["x_c_mm", "y_c_mm"]);
    }

    #[test]
    fn test_column_order_without_offsets() {
        let records = vec![Section::documented_defaults()[0].compute().unwrap()];
        let columns = column_order(&records);
        assert_eq!(columns.len(), 14);
        assert!(!columns.iter().any(|c| c.ends_with("_c_mm")));
    }

    #[test]
    fn test_missing_keys_are_empty_cells() {
        let csv_text = to_csv_string(&reference_records()).unwrap();
        let mut lines = csv_text.lines();
        let header = lines.next().unwrap();
        assert!(header.ends_with("x_c_mm,y_c_mm"));

        // Built-up I has neither offset; L-R has only x_c; T-B only y_c
        let built_up = lines.next().unwrap();
        assert!(built_up.ends_with(",,"));
        let lr = lines.next().unwrap();
        assert!(lr.ends_with(",217.9,"));
        let tb = lines.next().unwrap();
        assert!(tb.ends_with(",190.4"));
    }

    #[test]
    fn test_round_trip_recovers_values() {
        let records = reference_records();
        let csv_text = to_csv_string(&records).unwrap();
        let rows = read_csv_rows(&csv_text).unwrap();
        assert_eq!(rows.len(), records.len());

        for (record, row) in records.iter().zip(&rows) {
            for (key, value) in record.fields() {
                let cell = &row[key];
                match value {
                    RecordValue::Text(text) => assert_eq!(cell, &text),
                    RecordValue::Number(expected) => {
                        let parsed: f64 = cell.parse().unwrap();
                        assert_relative_eq!(parsed, expected, max_relative = 1e-6);
                    }
                }
            }
            assert_eq!(row.len(), record.fields().len());
        }
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(to_csv_string(&[]).unwrap(), "");
        assert!(column_order(&[]).is_empty());
    }
}
