use std::fmt;
use std::path::PathBuf;

use occurkit_io_fs::WriteFileError;

use crate::conf::{C_DIR_OUTPUT_DEFAULT, C_TITLE_DEFAULT, N_HEIGHT_PAGE_A4_PT, N_PT_PER_MM, N_WIDTH_PAGE_A4_PT};

////////////////////////////////////////////////////////////////////////////////
// #region Geometry

/// Page geometry in PDF points (1/72 inch).
#[derive(Debug, Clone, PartialEq)]
pub struct SpecPageGeometry {
    pub width_page: f32,
    pub height_page: f32,
    pub margin_left: f32,
    pub margin_right: f32,
    pub margin_top: f32,
    /// Distance from the page bottom that triggers a page break.
    pub margin_bottom: f32,
    pub height_line: f32,
    /// Extra vertical space after a wrapped paragraph.
    pub gap_after_paragraph: f32,
    /// Minimum width of the label column.
    pub width_label_min: f32,
    /// Space between label text and value column.
    pub gap_label_value: f32,
    pub font_size_body: f32,
    pub font_size_title: f32,
    pub height_title: f32,
    /// Space between the title line and the first field.
    pub gap_after_title: f32,
}

impl Default for SpecPageGeometry {
    fn default() -> Self {
        Self {
            width_page: N_WIDTH_PAGE_A4_PT,
            height_page: N_HEIGHT_PAGE_A4_PT,
            margin_left: 10.0 * N_PT_PER_MM,
            margin_right: 10.0 * N_PT_PER_MM,
            margin_top: 10.0 * N_PT_PER_MM,
            margin_bottom: 15.0 * N_PT_PER_MM,
            height_line: 7.0 * N_PT_PER_MM,
            gap_after_paragraph: 2.0 * N_PT_PER_MM,
            width_label_min: 60.0 * N_PT_PER_MM,
            gap_label_value: 2.0 * N_PT_PER_MM,
            font_size_body: 11.0,
            font_size_title: 16.0,
            height_title: 10.0 * N_PT_PER_MM,
            gap_after_title: 10.0 * N_PT_PER_MM,
        }
    }
}

impl SpecPageGeometry {
    /// Lowest y (measured from the top) a line may end at.
    pub fn y_limit(&self) -> f32 {
        self.height_page - self.margin_bottom
    }

    /// Right edge of the printable area.
    pub fn x_limit(&self) -> f32 {
        self.width_page - self.margin_right
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Options

#[derive(Debug, Clone)]
pub struct SpecDocumentRenderOptions {
    pub path_dir_output: PathBuf,
    pub title: String,
    pub geometry: SpecPageGeometry,
}

impl Default for SpecDocumentRenderOptions {
    fn default() -> Self {
        Self {
            path_dir_output: PathBuf::from(C_DIR_OUTPUT_DEFAULT),
            title: C_TITLE_DEFAULT.to_string(),
            geometry: SpecPageGeometry::default(),
        }
    }
}

impl SpecDocumentRenderOptions {
    pub fn with_output_dir(mut self, path_dir_output: impl Into<PathBuf>) -> Self {
        self.path_dir_output = path_dir_output.into();
        self
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Errors

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderDocumentError {
    /// The layout could not be serialized.
    Layout(String),
    /// Output directory or file could not be written.
    Write(WriteFileError),
}

impl fmt::Display for RenderDocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Layout(message) => write!(f, "pdf layout error: {message}"),
            Self::Write(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for RenderDocumentError {}

impl From<WriteFileError> for RenderDocumentError {
    fn from(err: WriteFileError) -> Self {
        Self::Write(err)
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
