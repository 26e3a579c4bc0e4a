//! Narration report model.

use std::fmt;
use std::path::PathBuf;

use crate::spec::SpecChunkError;

/// Aggregate counters for one `run_narration` call.
#[derive(Debug, Default, Clone)]
pub struct ReportNarration {
    /// Number of word windows derived from the input.
    pub cnt_chunks: u64,
    /// Number of chunk files written.
    pub cnt_written: u64,
    /// Number of chunks skipped after a backend failure.
    pub cnt_skipped: u64,
    /// Written chunk files, in chunk order.
    pub paths_written: Vec<PathBuf>,
    /// Per-chunk backend failures (skip policy only).
    pub errors: Vec<SpecChunkError>,
}

impl ReportNarration {
    /// One-line summary.
    pub fn format(&self, prefix: &str) -> String {
        format!(
            "{prefix} chunks={} written={} skipped={}",
            self.cnt_chunks, self.cnt_written, self.cnt_skipped
        )
    }
}

impl fmt::Display for ReportNarration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format("[NARRATE]"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_line_lists_counters() {
        let report = ReportNarration {
            cnt_chunks: 3,
            cnt_written: 2,
            cnt_skipped: 1,
            paths_written: Vec::new(),
            errors: vec![SpecChunkError {
                index: 2,
                exception: "http 429".to_string(),
            }],
        };
        assert_eq!(report.to_string(), "[NARRATE] chunks=3 written=2 skipped=1");
        assert_eq!(report.format(">>"), ">> chunks=3 written=2 skipped=1");
    }
}
