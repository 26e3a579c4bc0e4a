//! Tabular-store port and the in-memory workbook grid implementing it.

use crate::spec::EnumCellValue;
use crate::util::{derive_header_from_row, validate_sheet_dimensions};

/// Minimal sheet-level operations the record appender depends on.
///
/// Row 1 of a sheet is its header row; "data rows" are every row after it.
pub trait TabularStore {
    /// Header names of `sheet_name`, or `None` when the sheet does not exist.
    ///
    /// An existing but empty sheet yields `Some(vec![])`.
    fn sheet_header(&self, sheet_name: &str) -> Option<Vec<String>>;

    /// Create `sheet_name` (if missing) and write `headers` as row 1.
    ///
    /// Fails when the sheet already holds rows.
    fn create_sheet(&mut self, sheet_name: &str, headers: &[String]) -> Result<(), String>;

    /// Append `row` after the last row; returns the 1-based row number.
    fn append_row(&mut self, sheet_name: &str, row: &[String]) -> Result<usize, String>;

    /// Number of rows after the header row, or `None` when the sheet is missing.
    fn count_data_rows(&self, sheet_name: &str) -> Option<usize>;
}

////////////////////////////////////////////////////////////////////////////////
// #region WorkbookGrid

/// One worksheet's cell values, row-major, row 0 being the header row.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SpecSheetGrid {
    /// Worksheet name.
    pub sheet_name: String,
    /// Cell rows; rows may be ragged.
    pub rows: Vec<Vec<EnumCellValue>>,
}

impl SpecSheetGrid {
    pub fn new(sheet_name: impl Into<String>) -> Self {
        Self {
            sheet_name: sheet_name.into(),
            rows: Vec::new(),
        }
    }

    /// Widest row length.
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }
}

/// Workbook contents in sheet order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SpecWorkbookGrid {
    /// Worksheets in workbook order.
    pub sheets: Vec<SpecSheetGrid>,
}

impl SpecWorkbookGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sheet(&self, sheet_name: &str) -> Option<&SpecSheetGrid> {
        self.sheets.iter().find(|s| s.sheet_name == sheet_name)
    }

    fn sheet_mut(&mut self, sheet_name: &str) -> Option<&mut SpecSheetGrid> {
        self.sheets.iter_mut().find(|s| s.sheet_name == sheet_name)
    }
}

impl TabularStore for SpecWorkbookGrid {
    fn sheet_header(&self, sheet_name: &str) -> Option<Vec<String>> {
        let sheet = self.sheet(sheet_name)?;
        Some(
            sheet
                .rows
                .first()
                .map(|row| derive_header_from_row(row))
                .unwrap_or_default(),
        )
    }

    fn create_sheet(&mut self, sheet_name: &str, headers: &[String]) -> Result<(), String> {
        validate_sheet_dimensions(sheet_name, 1, headers.len())?;
        let l_header_row: Vec<EnumCellValue> = headers
            .iter()
            .map(|c_header| EnumCellValue::from_text(c_header))
            .collect();

        match self.sheet_mut(sheet_name) {
            Some(sheet) => {
                if sheet.rows.iter().any(|row| row.iter().any(|v| !v.is_blank())) {
                    return Err(format!(
                        "Sheet {sheet_name:?} has data but no header row."
                    ));
                }
                sheet.rows = vec![l_header_row];
            }
            None => {
                let mut sheet = SpecSheetGrid::new(sheet_name);
                sheet.rows.push(l_header_row);
                self.sheets.push(sheet);
            }
        }
        Ok(())
    }

    fn append_row(&mut self, sheet_name: &str, row: &[String]) -> Result<usize, String> {
        let sheet = self
            .sheet_mut(sheet_name)
            .ok_or_else(|| format!("Sheet not found: {sheet_name:?}"))?;
        validate_sheet_dimensions(sheet_name, sheet.rows.len() + 1, row.len())?;

        sheet
            .rows
            .push(row.iter().map(|value| EnumCellValue::from_text(value)).collect());
        Ok(sheet.rows.len())
    }

    fn count_data_rows(&self, sheet_name: &str) -> Option<usize> {
        self.sheet(sheet_name)
            .map(|sheet| sheet.rows.len().saturating_sub(1))
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    fn names(l_names: &[&str]) -> Vec<String> {
        l_names.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn create_then_append_tracks_row_numbers() {
        let mut grid = SpecWorkbookGrid::new();
        assert_eq!(grid.sheet_header("Ocorrencias"), None);

        grid.create_sheet("Ocorrencias", &names(&["Timestamp", "tipo"]))
            .expect("create");
        assert_eq!(
            grid.sheet_header("Ocorrencias"),
            Some(names(&["Timestamp", "tipo"]))
        );
        assert_eq!(grid.count_data_rows("Ocorrencias"), Some(0));

        let n_row = grid
            .append_row("Ocorrencias", &names(&["t", ""]))
            .expect("append");
        assert_eq!(n_row, 2);
        assert_eq!(grid.count_data_rows("Ocorrencias"), Some(1));
        assert_eq!(
            grid.sheet("Ocorrencias").expect("sheet").rows[1],
            vec![EnumCellValue::String("t".to_string()), EnumCellValue::None]
        );
    }

    #[test]
    fn create_sheet_initializes_empty_existing_sheet() {
        let mut grid = SpecWorkbookGrid {
            sheets: vec![SpecSheetGrid::new("Ocorrencias")],
        };
        assert_eq!(grid.sheet_header("Ocorrencias"), Some(vec![]));

        grid.create_sheet("Ocorrencias", &names(&["Timestamp"]))
            .expect("init header");
        assert_eq!(grid.sheets.len(), 1);
        assert_eq!(grid.sheet_header("Ocorrencias"), Some(names(&["Timestamp"])));
    }

    #[test]
    fn create_sheet_refuses_headerless_data() {
        let mut grid = SpecWorkbookGrid {
            sheets: vec![SpecSheetGrid {
                sheet_name: "Ocorrencias".to_string(),
                rows: vec![
                    vec![EnumCellValue::None],
                    vec![EnumCellValue::String("orphan".to_string())],
                ],
            }],
        };
        assert!(grid.create_sheet("Ocorrencias", &names(&["Timestamp"])).is_err());
    }

    #[test]
    fn append_to_missing_sheet_fails() {
        let mut grid = SpecWorkbookGrid::new();
        assert!(grid.append_row("nope", &names(&["x"])).is_err());
        assert_eq!(grid.count_data_rows("nope"), None);
    }
}
