//! Record -> document orchestration.

use std::path::PathBuf;

use chrono::NaiveDateTime;
use tracing::info;

use occurkit_io::{
    C_FIELD_ACTION, C_FIELD_TIMESTAMP, C_FIELD_TYPE, SpecSubmissionRecord, derive_header_sequence,
};
use occurkit_io_fs::{ensure_dir, write_bytes_atomic};

use crate::layout::{PageLayout, PdfPageLayout};
use crate::spec::{RenderDocumentError, SpecDocumentRenderOptions};
use crate::util::{EnumFieldDisplay, derive_field_display, derive_output_file_name, format_field_label};

/// Lay out `record` on `layout`: title, then one labeled block per field in
/// header order. `Timestamp` and `action` are not printed.
pub fn render_record_into<L: PageLayout + ?Sized>(
    layout: &mut L,
    record: &SpecSubmissionRecord,
    title: &str,
) {
    layout.add_title(title);

    for key in derive_header_sequence(record) {
        if key == C_FIELD_TIMESTAMP || key == C_FIELD_ACTION {
            continue;
        }
        let c_label = format_field_label(&key);
        match derive_field_display(&key, record.get_or_empty(&key)) {
            EnumFieldDisplay::Line(c_value) => layout.add_labeled_line(&c_label, &c_value),
            EnumFieldDisplay::Paragraph(c_value) => {
                layout.add_labeled_paragraph(&c_label, &c_value)
            }
        }
    }
}

/// Renders one record into a PDF file under the configured output directory.
#[derive(Debug, Clone, Default)]
pub struct DocumentRenderer {
    options: SpecDocumentRenderOptions,
}

impl DocumentRenderer {
    pub fn new(options: SpecDocumentRenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &SpecDocumentRenderOptions {
        &self.options
    }

    /// Render `record` and return the path of the written document.
    pub fn render(
        &self,
        record: &SpecSubmissionRecord,
        now: &NaiveDateTime,
    ) -> Result<PathBuf, RenderDocumentError> {
        let mut layout = PdfPageLayout::new(self.options.geometry.clone());
        render_record_into(&mut layout, record, &self.options.title);
        let n_pages = layout.page_count();
        let v_bytes = layout.finish().map_err(RenderDocumentError::Layout)?;

        ensure_dir(&self.options.path_dir_output)?;
        let path_file = self
            .options
            .path_dir_output
            .join(derive_output_file_name(record.get(C_FIELD_TYPE), now));
        write_bytes_atomic(&path_file, &v_bytes)?;

        info!(
            path = %path_file.display(),
            pages = n_pages,
            bytes = v_bytes.len(),
            "[RENDER] document written"
        );
        Ok(path_file)
    }
}
