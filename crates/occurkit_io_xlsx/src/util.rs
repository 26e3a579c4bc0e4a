//! Stateless helper utilities used by the XLSX store.

use occurkit_io::SpecSubmissionRecord;

use crate::conf::{
    N_LEN_EXCEL_SHEET_NAME_MAX, N_NCOLS_EXCEL_MAX, N_NROWS_EXCEL_MAX, TUP_EXCEL_ILLEGAL,
};
use crate::spec::EnumCellValue;

////////////////////////////////////////////////////////////////////////////////
// #region RecordProjection

/// Project `record` onto `headers`, one cell per header, `""` for absent keys.
pub fn project_record_onto_headers(
    record: &SpecSubmissionRecord,
    headers: &[String],
) -> Vec<String> {
    headers
        .iter()
        .map(|c_header| record.get_or_empty(c_header).to_string())
        .collect()
}

/// Record keys that have no column in `headers` (excluding `ignored`).
pub fn derive_dropped_keys(
    record: &SpecSubmissionRecord,
    headers: &[String],
    ignored: &[&str],
) -> Vec<String> {
    record
        .keys()
        .filter(|key| !ignored.contains(key))
        .filter(|key| !headers.iter().any(|c_header| c_header == key))
        .map(ToString::to_string)
        .collect()
}

/// Header text of a loaded row 1, with trailing blank cells removed.
pub fn derive_header_from_row(row: &[EnumCellValue]) -> Vec<String> {
    let n_len = row
        .iter()
        .rposition(|value| !value.is_blank())
        .map_or(0, |n_idx| n_idx + 1);
    row[..n_len].iter().map(EnumCellValue::to_text).collect()
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region SheetNormalization

/// Replace invalid chars and trim to valid Excel sheet name.
pub fn sanitize_sheet_name(name: &str, replace_to: &str) -> String {
    let mut c_name = name.to_string();
    for c_illegal in TUP_EXCEL_ILLEGAL {
        c_name = c_name.replace(c_illegal, replace_to);
    }
    c_name = c_name.trim().to_string();
    if c_name.is_empty() {
        c_name = "Sheet".to_string();
    }

    c_name.chars().take(N_LEN_EXCEL_SHEET_NAME_MAX).collect()
}

/// Check a sheet's dimensions against Excel limits.
pub fn validate_sheet_dimensions(
    sheet_name: &str,
    n_rows: usize,
    n_cols: usize,
) -> Result<(), String> {
    if n_rows > N_NROWS_EXCEL_MAX {
        return Err(format!(
            "Sheet {sheet_name:?} exceeds Excel row limit: {n_rows} > {N_NROWS_EXCEL_MAX}."
        ));
    }
    if n_cols > N_NCOLS_EXCEL_MAX {
        return Err(format!(
            "Sheet {sheet_name:?} exceeds Excel column limit: {n_cols} > {N_NCOLS_EXCEL_MAX}."
        ));
    }
    Ok(())
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region CellAddressing

pub fn cast_row_num(value: usize) -> Result<u32, String> {
    u32::try_from(value).map_err(|_| format!("row index overflow: {value}"))
}

pub fn cast_col_num(value: usize) -> Result<u16, String> {
    u16::try_from(value).map_err(|_| format!("column index overflow: {value}"))
}

/// Estimate displayed width units; non-ASCII glyphs count wider.
pub fn estimate_unicode_string_width(s: &str) -> usize {
    let n_ascii = s.chars().filter(|chr| chr.is_ascii()).count();
    let n_non_ascii = s.chars().count().saturating_sub(n_ascii);
    n_ascii + (n_non_ascii as f64 * 1.6).round() as usize
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
