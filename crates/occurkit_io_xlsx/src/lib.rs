//! `occurkit_io_xlsx` v1:
//! Spreadsheet-backed occurrence store.
//!
//! - `conf`     : Excel limits and default presets
//! - `spec`     : formats, options, reports, errors
//! - `util`     : pure helper functions
//! - `store`    : tabular-store port and in-memory workbook grid
//! - `reader`   : xlsx -> grid loader
//! - `writer`   : grid -> xlsx serializer
//! - `appender` : record append orchestration
pub mod appender;
pub mod conf;
pub mod reader;
pub mod spec;
pub mod store;
pub mod util;
pub mod writer;

pub use appender::{RecordAppender, append_record_to_store};
pub use conf::{
    C_FILE_STORE_DEFAULT, C_SHEET_NAME_DEFAULT, N_LEN_EXCEL_SHEET_NAME_MAX, N_NCOLS_EXCEL_MAX,
    N_NROWS_EXCEL_MAX, TUP_EXCEL_ILLEGAL,
};
pub use reader::load_workbook_grid;
pub use spec::{
    AppendRecordError, EnumCellValue, SpecAppendReport, SpecCellFormat, SpecRecordAppenderOptions,
};
pub use store::{SpecSheetGrid, SpecWorkbookGrid, TabularStore};
pub use util::{project_record_onto_headers, sanitize_sheet_name};
pub use writer::XlsxWorkbookWriter;
