//! XLSX constants and default preset factories.

use std::collections::BTreeMap;

use crate::spec::SpecCellFormat;

/// Excel worksheet maximum row count.
pub const N_NROWS_EXCEL_MAX: usize = 1_048_576;
/// Excel worksheet maximum column count.
pub const N_NCOLS_EXCEL_MAX: usize = 16_384;
/// Excel sheet name maximum length.
pub const N_LEN_EXCEL_SHEET_NAME_MAX: usize = 31;
/// Characters not allowed in sheet names.
pub const TUP_EXCEL_ILLEGAL: [&str; 7] = ["*", ":", "?", "/", "\\", "[", "]"];

/// Sheet holding one row per saved occurrence.
pub const C_SHEET_NAME_DEFAULT: &str = "Ocorrencias";
/// Store file name used when no path is configured.
pub const C_FILE_STORE_DEFAULT: &str = "Relatorio_Ocorrencias.xlsx";

/// Minimum autofit column width.
pub const N_WIDTH_CELL_MIN: usize = 8;
/// Maximum autofit column width.
pub const N_WIDTH_CELL_MAX: usize = 60;
/// Width padding added after header-based inference.
pub const N_WIDTH_CELL_PADDING: usize = 2;

/// Number format applied to serial dates without a time part.
pub const C_NUM_FORMAT_DATE: &str = "yyyy-mm-dd";
/// Number format applied to serial dates with a time part.
pub const C_NUM_FORMAT_DATETIME: &str = "yyyy-mm-dd hh:mm:ss";

/// Build default named format presets used by [`crate::writer::XlsxWorkbookWriter`].
///
/// Keys: `text` for record-sheet body cells (blanks included), `header` for
/// row 1 of the record sheet, `date`/`datetime` for serial dates on any sheet.
pub fn derive_default_xlsx_formats() -> BTreeMap<String, SpecCellFormat> {
    let cfg_base_fmt_spec = SpecCellFormat::default();

    let mut dict_fmt = BTreeMap::new();
    dict_fmt.insert(
        "text".to_string(),
        cfg_base_fmt_spec.with_(SpecCellFormat {
            num_format: Some("@".to_string()),
            ..Default::default()
        }),
    );
    dict_fmt.insert(
        "header".to_string(),
        cfg_base_fmt_spec.with_(SpecCellFormat {
            bold: Some(true),
            ..Default::default()
        }),
    );
    dict_fmt.insert(
        "date".to_string(),
        cfg_base_fmt_spec.with_(SpecCellFormat {
            num_format: Some(C_NUM_FORMAT_DATE.to_string()),
            ..Default::default()
        }),
    );
    dict_fmt.insert(
        "datetime".to_string(),
        cfg_base_fmt_spec.with_(SpecCellFormat {
            num_format: Some(C_NUM_FORMAT_DATETIME.to_string()),
            ..Default::default()
        }),
    );

    dict_fmt
}
