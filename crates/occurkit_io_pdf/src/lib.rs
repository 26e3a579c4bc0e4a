//! `occurkit_io_pdf` v1:
//! Printable single-record occurrence documents.
//!
//! - `conf`   : page geometry, fonts and fixed texts
//! - `spec`   : options and errors
//! - `util`   : label/value formatting, encoding, wrapping
//! - `layout` : page-layout port and the PDF implementation
//! - `render` : record -> document orchestration
pub mod conf;
pub mod layout;
pub mod render;
pub mod spec;
pub mod util;

pub use layout::{PageLayout, PdfPageLayout};
pub use render::{DocumentRenderer, render_record_into};
pub use spec::{RenderDocumentError, SpecDocumentRenderOptions, SpecPageGeometry};
pub use util::{EnumFieldDisplay, derive_field_display, derive_output_file_name, format_field_label};
