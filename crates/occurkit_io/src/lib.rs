//! `occurkit_io` v1:
//! Shared occurrence-report record model.
//!
//! Module layout:
//! - `conf` : reserved field names and timestamp formats
//! - `spec` : ordered submission record
//! - `util` : header resolution and record helpers
pub mod conf;
pub mod spec;
pub mod util;

pub use conf::{
    C_FIELD_ACTION, C_FIELD_TIMESTAMP, C_FIELD_TYPE, C_FMT_TIMESTAMP_FILE, C_FMT_TIMESTAMP_RECORD,
    TUP_FIELDS_CHECKBOX, TUP_OCCURRENCE_TYPES,
};
pub use spec::SpecSubmissionRecord;
pub use util::{derive_header_sequence, format_record_timestamp, is_checkbox_field};
