//! Console formatting for capacity records.
//!
//! Everything here returns a `String`; printing is left to the caller.

use std::fmt::Write;

use crate::sections::CapacityRecord;

/// Default box width in characters
pub const BOX_WIDTH: usize = 64;

/// Horizontal rule
pub fn line(width: usize) -> String {
    "─".repeat(width)
}

/// Box top edge with an inline title: `┌ title ─────┐`
pub fn box_open(title: &str, width: usize) -> String {
    let t = format!(" {} ", title);
    let pad = width.saturating_sub(t.chars().count() + 2);
    format!("┌{}{}┐", t, line(pad))
}

/// Box bottom edge
pub fn box_close(width: usize) -> String {
    format!("└{}┘", line(width.saturating_sub(2)))
}

/// Format a number with six significant digits, like `%.6g`.
pub fn format_sig(value: f64) -> String {
    const DIGITS: i32 = 6;

    if value == 0.0 || !value.is_finite() {
        return format!("{}", value);
    }
    // Exponent after rounding to DIGITS significant digits, so 999999.7
    // becomes 1e6 rather than a seven-digit integer
    let sci = format!("{:.*e}", (DIGITS - 1) as usize, value);
    let (mantissa, exponent) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => return sci,
    };
    if !(-5..DIGITS).contains(&exponent) {
        // 1.42688e9 rather than 1.42688000e9
        return format!("{}e{}", trim_zeros(mantissa), exponent);
    }
    let decimals = (DIGITS - 1 - exponent).max(0) as usize;
    trim_zeros(&format!("{:.*}", decimals, value)).to_string()
}

fn trim_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// One aligned `key : value unit` row
pub fn kv(key: &str, value: f64, unit: &str) -> String {
    let unit_str = if unit.is_empty() { String::new() } else { format!(" {}", unit) };
    format!("{:<20} : {:>18}{}", key, format_sig(value), unit_str)
}

/// Verbose explanation bullets
pub fn explain(notes: &[String]) -> String {
    let mut out = String::new();
    for note in notes {
        for l in note.trim().lines() {
            let _ = writeln!(out, "  • {}", l.trim());
        }
    }
    out
}

/// Header block for one section
pub fn section_header(title: &str) -> String {
    format!(
        "{}\n│ {:<60}│\n{}",
        box_open(title, BOX_WIDTH),
        "Computation & Results",
        box_close(BOX_WIDTH)
    )
}

/// Boxed summary table of one record.
///
/// Offsets are listed only for the composite sections that carry them.
pub fn summary_table(record: &CapacityRecord) -> String {
    let mut rows: Vec<(&str, f64, &str)> = vec![
        ("Area", record.area_mm2, "mm²"),
        ("Ix", record.ix_mm4, "mm⁴"),
        ("Iy", record.iy_mm4, "mm⁴"),
        ("We_x", record.we_x_mm3, "mm³"),
        ("Wp_x", record.wp_x_mm3, "mm³"),
        ("Me_x", record.me_x_knm, "kN·m"),
        ("Mp_x", record.mp_x_knm, "kN·m"),
        ("shape_x", record.shape_x, "—"),
        ("We_y", record.we_y_mm3, "mm³"),
        ("Wp_y", record.wp_y_mm3, "mm³"),
        ("Me_y", record.me_y_knm, "kN·m"),
        ("Mp_y", record.mp_y_knm, "kN·m"),
        ("shape_y", record.shape_y, "—"),
    ];
    if let Some(x_c) = record.x_c_mm {
        rows.push(("x_c", x_c, "mm"));
    }
    if let Some(y_c) = record.y_c_mm {
        rows.push(("y_c", y_c, "mm"));
    }

    let mut out = String::new();
    let _ = writeln!(out, "{}", box_open("Section Summary", BOX_WIDTH));
    for (key, value, unit) in rows {
        let _ = writeln!(out, "{}", kv(key, value, unit));
    }
    out.push_str(&box_close(BOX_WIDTH));
    out
}

/// Full console block: header, optional notes, summary table.
pub fn render_section(title: &str, record: &CapacityRecord, notes: Option<&[String]>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n{}", section_header(title));
    if let Some(notes) = notes {
        out.push_str(&explain(notes));
    }
    out.push_str(&summary_table(record));
    out
}

/// One-line boxed message, e.g. `Saved CSV → path`
pub fn banner(message: &str) -> String {
    format!("{}\n{}", box_open(message, BOX_WIDTH), box_close(BOX_WIDTH))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::{BuiltUpISection, CompositeLRSection, SectionStrategy};

    #[test]
    fn test_format_sig() {
        assert_eq!(format_sig(15600.0), "15600");
        assert_eq!(format_sig(1.42688e9), "1.42688e9");
        assert_eq!(format_sig(1478.22), "1478.22");
        assert_eq!(format_sig(1.459106), "1.45911");
        assert_eq!(format_sig(311_533.333_3), "311533");
        assert_eq!(format_sig(0.0), "0");
        assert_eq!(format_sig(-2.5), "-2.5");
    }

    #[test]
    fn test_format_sig_rounds_before_choosing_notation() {
        assert_eq!(format_sig(999_999.7), "1e6");
        assert_eq!(format_sig(999_999.4), "999999");
        assert_eq!(format_sig(9.999_996), "10");
        assert_eq!(format_sig(0.000_099_999_99), "0.0001");
    }

    #[test]
    fn test_box_width() {
        assert_eq!(box_open("Section Summary", BOX_WIDTH).chars().count(), BOX_WIDTH);
        assert_eq!(box_close(BOX_WIDTH).chars().count(), BOX_WIDTH);
        // Overlong titles never underflow
        let long = "x".repeat(100);
        assert!(box_open(&long, BOX_WIDTH).starts_with("┌ x"));
    }

    #[test]
    fn test_render_section() {
        let section = BuiltUpISection::default();
        let record = section.compute().unwrap();
        let notes = section.notes();

        let verbose = render_section("Section 1 - Built-up I", &record, Some(&notes));
        assert!(verbose.contains("Section 1 - Built-up I"));
        assert!(verbose.contains("  • Built-up I: compute plate areas"));
        assert!(verbose.contains("Mp_x"));
        assert!(verbose.contains("1478.22 kN·m"));
        assert!(!verbose.contains("x_c"));

        let quiet = render_section("Section 1 - Built-up I", &record, None);
        assert!(!quiet.contains('•'));
    }

    #[test]
    fn test_offset_row_for_composites() {
        let record = CompositeLRSection::default().compute().unwrap();
        let table = summary_table(&record);
        assert!(table.contains("217.9 mm"));
    }
}
