//! XLSX loader producing a [`SpecWorkbookGrid`].

use std::path::Path;

use calamine::{Data, Range, Reader, Xlsx, open_workbook};

use crate::spec::EnumCellValue;
use crate::store::{SpecSheetGrid, SpecWorkbookGrid};

/// Load every worksheet's cell values from the workbook at `path_file`.
///
/// Cells keep their absolute positions: a sheet whose used range starts at
/// `C3` yields two leading empty rows and two leading blank cells per row.
/// Formula cells load as [`EnumCellValue::Formula`] rather than their cached
/// result. Trailing blank rows inside the sheet's declared dimension are kept.
pub fn load_workbook_grid(path_file: &Path) -> Result<SpecWorkbookGrid, String> {
    let mut workbook: Xlsx<_> = open_workbook(path_file)
        .map_err(|err: calamine::XlsxError| format!("xlsx read error: {err}"))?;

    let mut grid = SpecWorkbookGrid::new();
    for sheet_name in workbook.sheet_names() {
        let range = workbook
            .worksheet_range(&sheet_name)
            .map_err(|err| format!("xlsx read error in sheet {sheet_name:?}: {err}"))?;
        let range_formula = workbook
            .worksheet_formula(&sheet_name)
            .map_err(|err| format!("xlsx read error in sheet {sheet_name:?}: {err}"))?;
        let n_rows_declared = workbook
            .worksheet_cells_reader(&sheet_name)
            .map(|reader| reader.dimensions().end.0 as usize + 1)
            .unwrap_or(0);

        let mut l_rows = derive_rows_from_range(&range);
        overlay_formulas_onto_rows(&mut l_rows, &range_formula);
        if !l_rows.is_empty() && l_rows.len() < n_rows_declared {
            l_rows.resize_with(n_rows_declared, Vec::new);
        }

        grid.sheets.push(SpecSheetGrid {
            rows: l_rows,
            sheet_name,
        });
    }

    Ok(grid)
}

fn derive_rows_from_range(range: &Range<Data>) -> Vec<Vec<EnumCellValue>> {
    let Some((n_row_start, n_col_start)) = range.start() else {
        return Vec::new();
    };

    let mut l_rows: Vec<Vec<EnumCellValue>> = (0..n_row_start).map(|_| Vec::new()).collect();
    for row in range.rows() {
        let mut l_cells = vec![EnumCellValue::None; n_col_start as usize];
        l_cells.extend(row.iter().map(derive_cell_value_from_data));
        l_rows.push(l_cells);
    }
    l_rows
}

fn overlay_formulas_onto_rows(l_rows: &mut Vec<Vec<EnumCellValue>>, range: &Range<String>) {
    let Some((n_row_start, n_col_start)) = range.start() else {
        return;
    };

    for (n_row, n_col, c_formula) in range.used_cells() {
        if c_formula.is_empty() {
            continue;
        }
        let row_idx = n_row_start as usize + n_row;
        let col_idx = n_col_start as usize + n_col;
        if l_rows.len() <= row_idx {
            l_rows.resize_with(row_idx + 1, Vec::new);
        }
        let row = &mut l_rows[row_idx];
        if row.len() <= col_idx {
            row.resize(col_idx + 1, EnumCellValue::None);
        }
        row[col_idx] = EnumCellValue::Formula(c_formula.clone());
    }
}

fn derive_cell_value_from_data(value: &Data) -> EnumCellValue {
    match value {
        Data::Empty => EnumCellValue::None,
        Data::String(val) => EnumCellValue::from_text(val),
        Data::Float(val) => EnumCellValue::Number(*val),
        Data::Int(val) => EnumCellValue::Number(*val as f64),
        Data::DateTime(val) => EnumCellValue::DateTime(val.as_f64()),
        Data::Bool(val) => {
            EnumCellValue::String(if *val { "TRUE" } else { "FALSE" }.to_string())
        }
        _ => EnumCellValue::String(value.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn load_rejects_non_xlsx_bytes() {
        let tmp = TempDir::new().expect("temp dir");
        let path = tmp.path().join("broken.xlsx");
        fs::write(&path, b"not a zip archive").expect("write");

        let err = load_workbook_grid(&path).expect_err("garbage must not parse");
        assert!(err.starts_with("xlsx read error"));
    }

    #[test]
    fn cell_conversion_covers_scalar_kinds() {
        assert_eq!(derive_cell_value_from_data(&Data::Empty), EnumCellValue::None);
        assert_eq!(
            derive_cell_value_from_data(&Data::Int(4)),
            EnumCellValue::Number(4.0)
        );
        assert_eq!(
            derive_cell_value_from_data(&Data::Bool(true)),
            EnumCellValue::String("TRUE".to_string())
        );
        assert_eq!(
            derive_cell_value_from_data(&Data::String(String::new())),
            EnumCellValue::None
        );
    }

    #[test]
    fn formulas_replace_cached_values_at_absolute_positions() {
        let mut l_rows = vec![vec![EnumCellValue::Number(5.0), EnumCellValue::Number(0.0)]];
        let range = Range::from_sparse(vec![
            calamine::Cell::new((0, 1), "A1*10".to_string()),
            calamine::Cell::new((2, 0), "SUM(A1:B1)".to_string()),
        ]);

        overlay_formulas_onto_rows(&mut l_rows, &range);

        assert_eq!(l_rows.len(), 3);
        assert_eq!(l_rows[0][1], EnumCellValue::Formula("A1*10".to_string()));
        assert!(l_rows[1].is_empty());
        assert_eq!(l_rows[2], vec![EnumCellValue::Formula("SUM(A1:B1)".to_string())]);
    }
}
