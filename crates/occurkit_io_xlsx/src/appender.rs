//! Record append orchestration: load (or start) a workbook, project one record
//! onto the sheet's established header row, append it, and commit atomically.

use occurkit_io::{C_FIELD_ACTION, SpecSubmissionRecord, derive_header_sequence};
use occurkit_io_fs::{WriteFileError, ensure_dir, write_bytes_atomic};

use crate::reader::load_workbook_grid;
use crate::spec::{AppendRecordError, SpecAppendReport, SpecRecordAppenderOptions};
use crate::store::{SpecWorkbookGrid, TabularStore};
use crate::util::{derive_dropped_keys, project_record_onto_headers, sanitize_sheet_name};
use crate::writer::XlsxWorkbookWriter;

/// Append `record` as one row of `sheet_name` in `store`.
///
/// When the sheet is missing (or empty) it is created with the record's own
/// header sequence. Otherwise the existing row-1 header is authoritative: the
/// record is projected onto it and keys without a column are reported as
/// warnings, never added as new columns.
pub fn append_record_to_store<S: TabularStore + ?Sized>(
    store: &mut S,
    sheet_name: &str,
    record: &SpecSubmissionRecord,
    report: &mut SpecAppendReport,
) -> Result<(), String> {
    let l_headers = match store.sheet_header(sheet_name) {
        Some(l_headers) if !l_headers.is_empty() => l_headers,
        _ => {
            let l_headers = derive_header_sequence(record);
            store.create_sheet(sheet_name, &l_headers)?;
            report.if_created_sheet = true;
            l_headers
        }
    };

    let l_row = project_record_onto_headers(record, &l_headers);

    let l_dropped = derive_dropped_keys(record, &l_headers, &[C_FIELD_ACTION]);
    if !l_dropped.is_empty() {
        report.warn(format!(
            "Fields without a column in sheet {sheet_name:?} were not saved: {}",
            l_dropped.join(", ")
        ));
    }

    report.row_number = store.append_row(sheet_name, &l_row)?;
    report.sheet_name = sheet_name.to_string();
    report.headers = l_headers;
    Ok(())
}

/// Appends submission records to the configured workbook file.
#[derive(Debug, Clone, Default)]
pub struct RecordAppender {
    options: SpecRecordAppenderOptions,
    writer: XlsxWorkbookWriter,
}

impl RecordAppender {
    pub fn new(options: SpecRecordAppenderOptions) -> Self {
        Self {
            options,
            writer: XlsxWorkbookWriter::default(),
        }
    }

    pub fn options(&self) -> &SpecRecordAppenderOptions {
        &self.options
    }

    /// Append one record and commit the workbook.
    ///
    /// The workbook is rebuilt in memory and written through a temporary file,
    /// so on any error the file on disk is exactly what it was before the call.
    pub fn append(
        &self,
        record: &SpecSubmissionRecord,
    ) -> Result<SpecAppendReport, AppendRecordError> {
        let path_file_store = self.options.path_file_store.as_path();
        let sheet_name = sanitize_sheet_name(&self.options.sheet_name, "_");

        let mut report = SpecAppendReport {
            sheet_name: sheet_name.clone(),
            ..Default::default()
        };

        let mut grid = if path_file_store.exists() {
            load_workbook_grid(path_file_store).map_err(|message| AppendRecordError::Open {
                path: path_file_store.to_path_buf(),
                message,
            })?
        } else {
            report.if_created_store = true;
            SpecWorkbookGrid::new()
        };

        append_record_to_store(&mut grid, &sheet_name, record, &mut report)
            .map_err(AppendRecordError::Unexpected)?;

        let v_bytes = self
            .writer
            .write_to_buffer(&grid, &sheet_name)
            .map_err(AppendRecordError::Unexpected)?;

        if let Some(path_dir_parent) = path_file_store.parent()
            && !path_dir_parent.as_os_str().is_empty()
        {
            ensure_dir(path_dir_parent).map_err(derive_append_error_from_write)?;
        }
        write_bytes_atomic(path_file_store, &v_bytes).map_err(derive_append_error_from_write)?;

        tracing::info!(
            path = %path_file_store.display(),
            sheet = %report.sheet_name,
            row = report.row_number,
            created_store = report.if_created_store,
            created_sheet = report.if_created_sheet,
            "appended record"
        );
        for c_warning in &report.warnings {
            tracing::warn!(path = %path_file_store.display(), "{c_warning}");
        }

        Ok(report)
    }
}

fn derive_append_error_from_write(err: WriteFileError) -> AppendRecordError {
    match err {
        WriteFileError::PermissionDenied { path, message } => {
            AppendRecordError::Permission { path, message }
        }
        WriteFileError::Io { path, message } => AppendRecordError::Save { path, message },
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::{Path, PathBuf};

    use tempfile::TempDir;

    use super::*;
    use crate::spec::EnumCellValue;
    use crate::store::SpecSheetGrid;

    fn names(l_names: &[&str]) -> Vec<String> {
        l_names.iter().map(ToString::to_string).collect()
    }

    fn appender_at(path: &Path) -> RecordAppender {
        RecordAppender::new(SpecRecordAppenderOptions {
            path_file_store: path.to_path_buf(),
            ..Default::default()
        })
    }

    fn sheet_text_rows(path: &Path, sheet_name: &str) -> Vec<Vec<String>> {
        let grid = load_workbook_grid(path).expect("load store");
        grid.sheet(sheet_name)
            .expect("sheet present")
            .rows
            .iter()
            .map(|row| row.iter().map(EnumCellValue::to_text).collect())
            .collect()
    }

    fn store_path(tmp: &TempDir) -> PathBuf {
        tmp.path().join("Relatorio_Ocorrencias.xlsx")
    }

    #[test]
    fn first_save_creates_store_with_header_and_row() {
        let tmp = TempDir::new().expect("temp dir");
        let path = store_path(&tmp);
        let record = SpecSubmissionRecord::from_pairs([
            ("tipo", "Incidente"),
            ("descricao", "teste"),
            ("action", "save"),
            ("Timestamp", "2025-02-03 14:05:09"),
        ]);

        let report = appender_at(&path).append(&record).expect("append");

        assert!(report.if_created_store);
        assert!(report.if_created_sheet);
        assert_eq!(report.row_number, 2);
        assert!(report.warnings.is_empty());
        assert_eq!(
            sheet_text_rows(&path, "Ocorrencias"),
            vec![
                names(&["Timestamp", "tipo", "descricao"]),
                names(&["2025-02-03 14:05:09", "Incidente", "teste"]),
            ]
        );
    }

    #[test]
    fn later_records_follow_the_first_header() {
        let tmp = TempDir::new().expect("temp dir");
        let path = store_path(&tmp);
        let appender = appender_at(&path);

        let l_records = [
            SpecSubmissionRecord::from_pairs([
                ("Timestamp", "t1"),
                ("tipo", "Incidente"),
                ("descricao", "a"),
            ]),
            SpecSubmissionRecord::from_pairs([
                ("descricao", "b"),
                ("local", "Armazém"),
                ("Timestamp", "t2"),
            ]),
            SpecSubmissionRecord::from_pairs([("Timestamp", "t3"), ("tipo", "Outro")]),
        ];
        let mut l_reports = Vec::new();
        for record in &l_records {
            l_reports.push(appender.append(record).expect("append"));
        }

        let l_rows = sheet_text_rows(&path, "Ocorrencias");
        let l_header = names(&["Timestamp", "tipo", "descricao"]);
        assert_eq!(l_rows[0], l_header);
        assert_eq!(l_rows.len(), 4);
        for row in &l_rows[1..] {
            assert_eq!(row.len(), l_header.len());
        }
        assert_eq!(l_rows[2], names(&["t2", "", "b"]));
        assert_eq!(l_rows[3], names(&["t3", "Outro", ""]));

        assert!(!l_reports[1].if_created_store);
        assert!(!l_reports[1].if_created_sheet);
        assert_eq!(l_reports[1].warnings.len(), 1);
        assert!(l_reports[1].warnings[0].contains("local"));
        assert_eq!(
            l_reports.iter().map(|r| r.row_number).collect::<Vec<_>>(),
            vec![2, 3, 4]
        );
    }

    #[test]
    fn unreadable_store_is_reported_and_left_untouched() {
        let tmp = TempDir::new().expect("temp dir");
        let path = store_path(&tmp);
        fs::write(&path, b"definitely not xlsx").expect("seed garbage");

        let record = SpecSubmissionRecord::from_pairs([("Timestamp", "t"), ("tipo", "x")]);
        let err = appender_at(&path).append(&record).expect_err("must fail");

        assert!(matches!(err, AppendRecordError::Open { .. }));
        assert_eq!(fs::read(&path).expect("read"), b"definitely not xlsx");
    }

    #[test]
    fn record_without_matching_keys_appends_blank_row() {
        let tmp = TempDir::new().expect("temp dir");
        let path = store_path(&tmp);
        let appender = appender_at(&path);

        appender
            .append(&SpecSubmissionRecord::from_pairs([
                ("tipo", "Incidente"),
                ("descricao", "a"),
            ]))
            .expect("seed row");

        let report = appender
            .append(&SpecSubmissionRecord::from_pairs([("outro", "v")]))
            .expect("blank row is still a row");
        assert_eq!(report.row_number, 3);
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("outro"));

        let grid = load_workbook_grid(&path).expect("load");
        assert_eq!(grid.count_data_rows("Ocorrencias"), Some(2));

        let report = appender
            .append(&SpecSubmissionRecord::from_pairs([("tipo", "Outro")]))
            .expect("append after blank row");
        assert_eq!(report.row_number, 4);
        let l_rows = sheet_text_rows(&path, "Ocorrencias");
        assert_eq!(l_rows.len(), 4);
        assert_eq!(l_rows[3], names(&["", "Outro", ""]));
    }

    #[test]
    fn read_only_store_is_reported_and_left_untouched() {
        let tmp = TempDir::new().expect("temp dir");
        let path = store_path(&tmp);
        let appender = appender_at(&path);

        appender
            .append(&SpecSubmissionRecord::from_pairs([
                ("Timestamp", "t1"),
                ("tipo", "Incidente"),
            ]))
            .expect("seed row");
        let v_bytes_before = fs::read(&path).expect("read");
        let mut perms = fs::metadata(&path).expect("meta").permissions();
        perms.set_readonly(true);
        fs::set_permissions(&path, perms).expect("lock store");

        let err = appender
            .append(&SpecSubmissionRecord::from_pairs([
                ("Timestamp", "t2"),
                ("tipo", "Outro"),
            ]))
            .expect_err("store is read-only");
        assert!(matches!(err, AppendRecordError::Permission { .. }));

        assert_eq!(fs::read(&path).expect("read"), v_bytes_before);
        assert_eq!(sheet_text_rows(&path, "Ocorrencias").len(), 2);
    }

    #[test]
    fn append_keeps_formulas_and_dates_of_other_sheets() {
        use calamine::{Data, Reader, Xlsx, open_workbook};
        use rust_xlsxwriter::{Format, Workbook};

        let tmp = TempDir::new().expect("temp dir");
        let path = store_path(&tmp);

        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name("Resumo").expect("name");
        worksheet.write_number(0, 0, 5.0).expect("A1");
        worksheet.write_formula(0, 1, "=A1*10").expect("B1");
        worksheet
            .write_number_with_format(0, 2, 45691.0, &Format::new().set_num_format("yyyy-mm-dd"))
            .expect("C1");
        workbook.save(&path).expect("seed workbook");

        appender_at(&path)
            .append(&SpecSubmissionRecord::from_pairs([
                ("Timestamp", "t1"),
                ("tipo", "Incidente"),
            ]))
            .expect("append");

        let mut workbook: Xlsx<_> = open_workbook(&path).expect("reopen");
        assert_eq!(workbook.sheet_names(), vec!["Resumo", "Ocorrencias"]);

        let range_formula = workbook.worksheet_formula("Resumo").expect("formulas");
        assert!(
            range_formula
                .used_cells()
                .any(|(_, _, c_formula)| c_formula.contains("A1*10"))
        );

        let range = workbook.worksheet_range("Resumo").expect("values");
        match range.get_value((0, 2)) {
            Some(Data::DateTime(val)) => assert_eq!(val.as_f64(), 45691.0),
            other => panic!("expected a date cell, got {other:?}"),
        }
        assert_eq!(range.get_value((0, 0)), Some(&Data::Float(5.0)));
    }

    #[test]
    fn missing_sheet_is_added_next_to_existing_ones() {
        let tmp = TempDir::new().expect("temp dir");
        let path = store_path(&tmp);

        let grid_seed = SpecWorkbookGrid {
            sheets: vec![SpecSheetGrid {
                sheet_name: "Notas".to_string(),
                rows: vec![vec![EnumCellValue::String("keep me".to_string())]],
            }],
        };
        let v_bytes = XlsxWorkbookWriter::default()
            .write_to_buffer(&grid_seed, "Ocorrencias")
            .expect("seed workbook");
        fs::write(&path, v_bytes).expect("write seed");

        let report = appender_at(&path)
            .append(&SpecSubmissionRecord::from_pairs([
                ("Timestamp", "t1"),
                ("tipo", "Observação"),
            ]))
            .expect("append");

        assert!(!report.if_created_store);
        assert!(report.if_created_sheet);
        assert_eq!(sheet_text_rows(&path, "Notas"), vec![names(&["keep me"])]);
        assert_eq!(
            sheet_text_rows(&path, "Ocorrencias"),
            vec![names(&["Timestamp", "tipo"]), names(&["t1", "Observação"])]
        );
    }

    #[test]
    fn store_directory_is_created_on_first_save() {
        let tmp = TempDir::new().expect("temp dir");
        let path = tmp.path().join("nested").join("store.xlsx");

        appender_at(&path)
            .append(&SpecSubmissionRecord::from_pairs([("Timestamp", "t1")]))
            .expect("append");
        assert!(path.is_file());
    }

    #[test]
    fn in_memory_store_never_rederives_header() {
        let mut grid = SpecWorkbookGrid::new();
        let mut report = SpecAppendReport::default();

        append_record_to_store(
            &mut grid,
            "Ocorrencias",
            &SpecSubmissionRecord::from_pairs([("Timestamp", "t1"), ("b", "1"), ("a", "2")]),
            &mut report,
        )
        .expect("first");
        append_record_to_store(
            &mut grid,
            "Ocorrencias",
            &SpecSubmissionRecord::from_pairs([("a", "3"), ("c", "4"), ("Timestamp", "t2")]),
            &mut report,
        )
        .expect("second");

        assert_eq!(report.headers, names(&["Timestamp", "b", "a"]));
        assert_eq!(grid.count_data_rows("Ocorrencias"), Some(2));
        assert_eq!(
            grid.sheet_header("Ocorrencias"),
            Some(names(&["Timestamp", "b", "a"]))
        );
    }

    #[test]
    fn write_errors_map_to_append_errors() {
        let path = PathBuf::from("store.xlsx");
        let err = derive_append_error_from_write(WriteFileError::PermissionDenied {
            path: path.clone(),
            message: "denied".to_string(),
        });
        assert!(matches!(err, AppendRecordError::Permission { .. }));

        let err = derive_append_error_from_write(WriteFileError::Io {
            path,
            message: "disk full".to_string(),
        });
        assert!(matches!(err, AppendRecordError::Save { .. }));
    }
}
