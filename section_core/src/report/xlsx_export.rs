//! Spreadsheet (.xlsx) export of capacity records.
//!
//! One "Summary" sheet with the same columns as the CSV export: bold,
//! centred, shaded header cells with thin borders, then one row per record.
//! Numbers are written as numeric cells. Column widths follow the longest
//! cell text, clamped to 12..=28.

use std::collections::BTreeMap;

use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook, XlsxError};

use crate::errors::{CalcError, CalcResult};
use crate::report::csv_export::column_order;
use crate::sections::{CapacityRecord, RecordValue};

/// Worksheet name
pub const SHEET_NAME: &str = "Summary";

const MIN_COLUMN_WIDTH: usize = 12;
const MAX_COLUMN_WIDTH: usize = 28;
const HEADER_FILL: u32 = 0xD9E1F2;
const BORDER_COLOR: u32 = 0x999999;

/// Width of one column: longest cell text plus two, clamped.
pub fn column_width(header: &str, cells: &[Option<RecordValue>]) -> usize {
    let longest = cells
        .iter()
        .flatten()
        .map(|v| v.to_string().chars().count())
        .chain(std::iter::once(header.chars().count()))
        .max()
        .unwrap_or(0);
    (longest + 2).clamp(MIN_COLUMN_WIDTH, MAX_COLUMN_WIDTH)
}

/// Build the workbook and return the file bytes.
///
/// Returns an empty buffer for an empty slice.
pub fn to_xlsx_bytes(records: &[CapacityRecord]) -> CalcResult<Vec<u8>> {
    if records.is_empty() {
        return Ok(Vec::new());
    }
    build_workbook(records).map_err(|e| CalcError::serialization(format!("xlsx: {}", e)))
}

fn build_workbook(records: &[CapacityRecord]) -> Result<Vec<u8>, XlsxError> {
    let headers = column_order(records);
    let rows: Vec<BTreeMap<&str, RecordValue>> =
        records.iter().map(|r| r.fields().into_iter().collect()).collect();

    let header_format = Format::new()
        .set_bold()
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
        .set_background_color(Color::RGB(HEADER_FILL))
        .set_border(FormatBorder::Thin)
        .set_border_color(Color::RGB(BORDER_COLOR));

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    for (col, header) in headers.iter().enumerate() {
        let col = col as u16;
        sheet.write_string_with_format(0, col, header.as_str(), &header_format)?;

        let cells: Vec<Option<RecordValue>> =
            rows.iter().map(|row| row.get(header.as_str()).cloned()).collect();
        for (i, cell) in cells.iter().enumerate() {
            let row = i as u32 + 1;
            match cell {
                Some(RecordValue::Text(text)) => {
                    sheet.write_string(row, col, text.as_str())?;
                }
                Some(RecordValue::Number(value)) => {
                    sheet.write_number(row, col, *value)?;
                }
                None => {}
            }
        }
        sheet.set_column_width(col, column_width(header, &cells) as f64)?;
    }

    workbook.save_to_buffer()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::{Section, SectionStrategy};
    use approx::assert_relative_eq;
    use calamine::{open_workbook_from_rs, Data, Reader, Xlsx};
    use std::io::Cursor;

    fn reference_records() -> Vec<CapacityRecord> {
        Section::documented_defaults()
            .iter()
            .map(|s| s.compute().unwrap())
            .collect()
    }

    #[test]
    fn test_column_width_clamps() {
        assert_eq!(column_width("A_mm2", &[]), MIN_COLUMN_WIDTH);
        let long = RecordValue::Text("x".repeat(40));
        assert_eq!(column_width("section", &[Some(long)]), MAX_COLUMN_WIDTH);
        let mid = RecordValue::Number(1_645_068.123_456);
        assert_eq!(column_width("Wp_x_mm3", &[Some(mid), None]), 16);
    }

    #[test]
    fn test_summary_sheet_reads_back() {
        let records = reference_records();
        let bytes = to_xlsx_bytes(&records).unwrap();
        assert!(bytes.starts_with(b"PK"));

        let mut workbook: Xlsx<_> = open_workbook_from_rs(Cursor::new(bytes)).unwrap();
        let range = workbook.worksheet_range(SHEET_NAME).unwrap();
        let rows: Vec<&[Data]> = range.rows().collect();
        assert_eq!(rows.len(), 4);

        let header: Vec<String> = rows[0].iter().map(|c| c.to_string()).collect();
        assert_eq!(header, column_order(&records));

        assert_eq!(rows[1][0], Data::String("Built-up I".to_string()));
        match &rows[1][7] {
            Data::Float(mp) => assert_relative_eq!(*mp, records[0].mp_x_knm, max_relative = 1e-12),
            other => panic!("Mp_x_kNm should be numeric, got {:?}", other),
        }
        // Built-up I has no channel offsets
        assert_eq!(rows[1][14], Data::Empty);
        assert_eq!(rows[2][14], Data::Float(217.9));
    }

    #[test]
    fn test_empty_input() {
        assert!(to_xlsx_bytes(&[]).unwrap().is_empty());
    }
}
