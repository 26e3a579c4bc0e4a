//! `occurkit_io_fs` v1:
//! Commit-or-nothing file output helpers.
//!
//! - `spec` : error types
//! - `util` : atomic writes and file-name sanitization

pub mod spec;
mod util;

pub use spec::WriteFileError;
pub use util::{ensure_dir, sanitize_file_stem, write_bytes_atomic};
