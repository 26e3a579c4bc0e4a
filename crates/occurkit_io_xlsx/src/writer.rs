//! XLSX serializer turning a [`SpecWorkbookGrid`] into workbook bytes.

use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};

use crate::conf::{
    N_WIDTH_CELL_MAX, N_WIDTH_CELL_MIN, N_WIDTH_CELL_PADDING, derive_default_xlsx_formats,
};
use crate::spec::{EnumCellValue, SpecCellFormat};
use crate::store::{SpecSheetGrid, SpecWorkbookGrid};
use crate::util::{
    cast_col_num, cast_row_num, estimate_unicode_string_width, validate_sheet_dimensions,
};

/// Stateless workbook serializer.
///
/// The record sheet gets a header format on row 1, frozen header pane,
/// header-based column widths and text-formatted body cells, blanks included,
/// so an all-blank row still counts as a row. Every other sheet keeps its
/// values, formulas and dates; cell styles of those sheets are not carried.
#[derive(Debug, Clone)]
pub struct XlsxWorkbookWriter {
    fmt_text: SpecCellFormat,
    fmt_header: SpecCellFormat,
    fmt_date: SpecCellFormat,
    fmt_datetime: SpecCellFormat,
}

impl Default for XlsxWorkbookWriter {
    fn default() -> Self {
        let dict_default_fmts = derive_default_xlsx_formats();
        let derive_preset = |key: &str| dict_default_fmts.get(key).cloned().unwrap_or_default();
        Self {
            fmt_text: derive_preset("text"),
            fmt_header: derive_preset("header"),
            fmt_date: derive_preset("date"),
            fmt_datetime: derive_preset("datetime"),
        }
    }
}

/// Resolved formats for one serialization pass.
struct XlsxFormatSet {
    text: Format,
    header: Format,
    plain: Format,
    date: Format,
    datetime: Format,
}

impl XlsxWorkbookWriter {
    /// Serialize `grid` to xlsx bytes; `sheet_name_record` receives header styling.
    pub fn write_to_buffer(
        &self,
        grid: &SpecWorkbookGrid,
        sheet_name_record: &str,
    ) -> Result<Vec<u8>, String> {
        let mut workbook = Workbook::new();
        let formats = XlsxFormatSet {
            text: derive_rust_xlsx_format(&self.fmt_text),
            header: derive_rust_xlsx_format(&self.fmt_header),
            plain: Format::new(),
            date: derive_rust_xlsx_format(&self.fmt_date),
            datetime: derive_rust_xlsx_format(&self.fmt_datetime),
        };

        for sheet in &grid.sheets {
            validate_sheet_dimensions(&sheet.sheet_name, sheet.rows.len(), sheet.width())?;

            let worksheet = workbook.add_worksheet();
            worksheet
                .set_name(&sheet.sheet_name)
                .map_err(derive_xlsx_error_text)?;

            if sheet.sheet_name == sheet_name_record {
                write_record_sheet(worksheet, sheet, &formats)?;
            } else {
                write_plain_sheet(worksheet, sheet, &formats)?;
            }
        }

        workbook.save_to_buffer().map_err(derive_xlsx_error_text)
    }
}

fn write_record_sheet(
    worksheet: &mut Worksheet,
    sheet: &SpecSheetGrid,
    formats: &XlsxFormatSet,
) -> Result<(), String> {
    let Some((row_header, l_rows_body)) = sheet.rows.split_first() else {
        return Ok(());
    };

    for (col_idx, value) in row_header.iter().enumerate() {
        write_cell_with_format(worksheet, 0, col_idx, value, &formats.header, formats, false)?;
    }

    let n_width_header = row_header.len();
    for (row_idx, row_values) in l_rows_body.iter().enumerate() {
        let n_width_row = usize::max(n_width_header, row_values.len());
        for col_idx in 0..n_width_row {
            let value = row_values.get(col_idx).unwrap_or(&EnumCellValue::None);
            let if_keep_blank = col_idx < n_width_header;
            write_cell_with_format(
                worksheet,
                row_idx + 1,
                col_idx,
                value,
                &formats.text,
                formats,
                if_keep_blank,
            )?;
        }
    }

    worksheet
        .set_freeze_panes(1, 0)
        .map_err(derive_xlsx_error_text)?;

    for (col_idx, value) in row_header.iter().enumerate() {
        let n_width_recorded = estimate_unicode_string_width(&value.to_text());
        let n_width_final = usize::min(
            N_WIDTH_CELL_MAX,
            usize::max(N_WIDTH_CELL_MIN, n_width_recorded + N_WIDTH_CELL_PADDING),
        );
        worksheet
            .set_column_width(cast_col_num(col_idx)?, n_width_final as f64)
            .map_err(derive_xlsx_error_text)?;
    }

    Ok(())
}

fn write_plain_sheet(
    worksheet: &mut Worksheet,
    sheet: &SpecSheetGrid,
    formats: &XlsxFormatSet,
) -> Result<(), String> {
    for (row_idx, row_values) in sheet.rows.iter().enumerate() {
        for (col_idx, value) in row_values.iter().enumerate() {
            write_cell_with_format(
                worksheet,
                row_idx,
                col_idx,
                value,
                &formats.plain,
                formats,
                false,
            )?;
        }
    }
    Ok(())
}

/// Write one cell; blanks are skipped unless `if_keep_blank`, in which case
/// they are written as formatted empty cells.
fn write_cell_with_format(
    worksheet: &mut Worksheet,
    row_idx: usize,
    col_idx: usize,
    value: &EnumCellValue,
    format: &Format,
    formats: &XlsxFormatSet,
    if_keep_blank: bool,
) -> Result<(), String> {
    let n_row = cast_row_num(row_idx)?;
    let n_col = cast_col_num(col_idx)?;
    let result = match value {
        EnumCellValue::None => None,
        EnumCellValue::String(val) if val.is_empty() => None,
        EnumCellValue::String(val) => {
            Some(
                worksheet
                    .write_string_with_format(n_row, n_col, val, format)
                    .map(|_| ()),
            )
        }
        EnumCellValue::Number(val) => {
            Some(
                worksheet
                    .write_number_with_format(n_row, n_col, *val, format)
                    .map(|_| ()),
            )
        }
        EnumCellValue::DateTime(val) => {
            let format_date = if val.fract() == 0.0 {
                &formats.date
            } else {
                &formats.datetime
            };
            Some(
                worksheet
                    .write_number_with_format(n_row, n_col, *val, format_date)
                    .map(|_| ()),
            )
        }
        EnumCellValue::Formula(val) => {
            Some(
                worksheet
                    .write_formula_with_format(n_row, n_col, val.as_str(), format)
                    .map(|_| ()),
            )
        }
    };

    match result {
        Some(result) => result.map_err(derive_xlsx_error_text),
        None if if_keep_blank => worksheet
            .write_blank(n_row, n_col, format)
            .map(|_| ())
            .map_err(derive_xlsx_error_text),
        None => Ok(()),
    }
}

fn derive_rust_xlsx_format(spec: &SpecCellFormat) -> Format {
    let mut format = Format::new();

    if spec.bold.unwrap_or(false) {
        format = format.set_bold();
    }
    if let Some(val) = &spec.num_format {
        format = format.set_num_format(val.as_str());
    }

    format
}

fn derive_xlsx_error_text(err: XlsxError) -> String {
    format!("xlsx write error: {err}")
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::reader::load_workbook_grid;
    use crate::store::TabularStore;

    fn names(l_names: &[&str]) -> Vec<String> {
        l_names.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn written_workbook_loads_back_with_all_sheets() {
        let mut grid = SpecWorkbookGrid::new();
        grid.sheets.push(SpecSheetGrid {
            sheet_name: "Notas".to_string(),
            rows: vec![vec![
                EnumCellValue::String("total".to_string()),
                EnumCellValue::Number(12.5),
            ]],
        });
        grid.create_sheet("Ocorrencias", &names(&["Timestamp", "tipo", "descricao"]))
            .expect("create");
        grid.append_row("Ocorrencias", &names(&["2025-01-01 10:00:00", "Outro", ""]))
            .expect("append");

        let v_bytes = XlsxWorkbookWriter::default()
            .write_to_buffer(&grid, "Ocorrencias")
            .expect("serialize");

        let tmp = TempDir::new().expect("temp dir");
        let path = tmp.path().join("book.xlsx");
        fs::write(&path, &v_bytes).expect("write");

        let grid_loaded = load_workbook_grid(&path).expect("load");
        assert_eq!(
            grid_loaded
                .sheets
                .iter()
                .map(|s| s.sheet_name.as_str())
                .collect::<Vec<_>>(),
            vec!["Notas", "Ocorrencias"]
        );
        assert_eq!(
            grid_loaded.sheet_header("Ocorrencias"),
            Some(names(&["Timestamp", "tipo", "descricao"]))
        );
        assert_eq!(grid_loaded.count_data_rows("Ocorrencias"), Some(1));
        assert_eq!(
            grid_loaded.sheet("Notas").expect("notas").rows[0][1],
            EnumCellValue::Number(12.5)
        );
    }

    #[test]
    fn record_sheet_keeps_blank_rows_and_foreign_cells() {
        let mut grid = SpecWorkbookGrid::new();
        grid.sheets.push(SpecSheetGrid {
            sheet_name: "Resumo".to_string(),
            rows: vec![vec![
                EnumCellValue::Number(5.0),
                EnumCellValue::Formula("A1*10".to_string()),
                EnumCellValue::DateTime(45691.0),
            ]],
        });
        grid.create_sheet("Ocorrencias", &names(&["Timestamp", "tipo"]))
            .expect("create");
        grid.append_row("Ocorrencias", &names(&["", ""])).expect("blank row");

        let v_bytes = XlsxWorkbookWriter::default()
            .write_to_buffer(&grid, "Ocorrencias")
            .expect("serialize");

        let tmp = TempDir::new().expect("temp dir");
        let path = tmp.path().join("book.xlsx");
        fs::write(&path, &v_bytes).expect("write");

        let grid_loaded = load_workbook_grid(&path).expect("load");
        assert_eq!(grid_loaded.count_data_rows("Ocorrencias"), Some(1));
        assert_eq!(
            grid_loaded.sheet("Resumo").expect("resumo").rows[0],
            vec![
                EnumCellValue::Number(5.0),
                EnumCellValue::Formula("A1*10".to_string()),
                EnumCellValue::DateTime(45691.0),
            ]
        );
    }
}
