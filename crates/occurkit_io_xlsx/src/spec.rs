//! Shared XLSX store models, options and errors.

use std::fmt;
use std::path::PathBuf;

use crate::conf::{C_FILE_STORE_DEFAULT, C_SHEET_NAME_DEFAULT};

////////////////////////////////////////////////////////////////////////////////
// #region CellFormatSpecification

/// Cell format specification.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SpecCellFormat {
    /// Bold style.
    pub bold: Option<bool>,
    /// Excel number format code (`@` for text, `yyyy-mm-dd` for dates).
    pub num_format: Option<String>,
}

impl SpecCellFormat {
    /// Return a new format by overlaying `patch` onto `self`.
    pub fn with_(&self, patch: SpecCellFormat) -> SpecCellFormat {
        self.merge(&patch)
    }

    /// Merge two formats with right-side non-`None` overwrite semantics.
    pub fn merge(&self, other: &SpecCellFormat) -> SpecCellFormat {
        SpecCellFormat {
            bold: other.bold.or(self.bold),
            num_format: other.num_format.clone().or_else(|| self.num_format.clone()),
        }
    }
}

/// Normalized cell value held by the workbook grid.
#[derive(Debug, Clone, PartialEq)]
pub enum EnumCellValue {
    /// Missing/blank value.
    None,
    /// Text value.
    String(String),
    /// Numeric value (only produced when loading foreign sheets).
    Number(f64),
    /// Excel serial date-time, written back with a date format.
    DateTime(f64),
    /// Formula text without the leading `=`.
    Formula(String),
}

impl EnumCellValue {
    /// Cell from record text; the empty string is stored as a blank.
    pub fn from_text(value: &str) -> Self {
        if value.is_empty() {
            return Self::None;
        }
        Self::String(value.to_string())
    }

    /// Display text; blanks read back as `""`.
    pub fn to_text(&self) -> String {
        match self {
            Self::None => String::new(),
            Self::String(s) => s.clone(),
            Self::Number(n) | Self::DateTime(n) => n.to_string(),
            Self::Formula(f) => format!("={f}"),
        }
    }

    pub fn is_blank(&self) -> bool {
        match self {
            Self::None => true,
            Self::String(s) => s.is_empty(),
            Self::Number(_) | Self::DateTime(_) | Self::Formula(_) => false,
        }
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region AppendOptions

/// Options for [`crate::appender::RecordAppender`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecRecordAppenderOptions {
    /// Workbook file accumulating saved records.
    pub path_file_store: PathBuf,
    /// Sheet receiving the rows; sanitized before use.
    pub sheet_name: String,
}

impl Default for SpecRecordAppenderOptions {
    fn default() -> Self {
        Self {
            path_file_store: PathBuf::from(C_FILE_STORE_DEFAULT),
            sheet_name: C_SHEET_NAME_DEFAULT.to_string(),
        }
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region ReportSpecification

/// Per-append call report.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpecAppendReport {
    /// Sheet that received the row.
    pub sheet_name: String,
    /// Authoritative header sequence the row was projected onto.
    pub headers: Vec<String>,
    /// 1-based worksheet row number of the appended row.
    pub row_number: usize,
    /// Store file did not exist before this call.
    pub if_created_store: bool,
    /// Sheet did not exist (or was empty) before this call.
    pub if_created_sheet: bool,
    /// Non-fatal warnings.
    pub warnings: Vec<String>,
}

impl SpecAppendReport {
    /// Add a warning message.
    pub fn warn(&mut self, msg: impl AsRef<str>) {
        self.warnings.push(msg.as_ref().to_string());
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Errors

/// "Append call failed" errors. Nothing is committed to disk when returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppendRecordError {
    /// Existing store could not be opened or parsed.
    Open {
        /// Store path.
        path: PathBuf,
        /// Underlying reader error text.
        message: String,
    },
    /// Store could not be written because access was denied.
    Permission {
        /// Store path.
        path: PathBuf,
        /// Underlying IO error text.
        message: String,
    },
    /// Store could not be written for another IO reason.
    Save {
        /// Store path.
        path: PathBuf,
        /// Underlying IO error text.
        message: String,
    },
    /// Any other failure (projection, limits, serialization).
    Unexpected(String),
}

impl fmt::Display for AppendRecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open { path, message } => {
                write!(f, "Failed to open store {}: {message}", path.display())
            }
            Self::Permission { path, message } => {
                write!(
                    f,
                    "Permission denied saving store {}: {message}",
                    path.display()
                )
            }
            Self::Save { path, message } => {
                write!(f, "Failed to save store {}: {message}", path.display())
            }
            Self::Unexpected(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for AppendRecordError {}

// #endregion
////////////////////////////////////////////////////////////////////////////////
