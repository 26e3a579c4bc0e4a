use std::fmt;
use std::path::PathBuf;

use occurkit_io_fs::WriteFileError;

use crate::conf::{
    C_DIR_OUTPUT_DEFAULT, C_FILE_INPUT_DEFAULT, C_TTS_LANG, C_TTS_TLD, N_WINDOW_SIZE_DEFAULT,
};

////////////////////////////////////////////////////////////////////////////////
// #region Enums

/// What to do when the backend fails on one chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnumChunkFailurePolicy {
    /// Stop the run at the first failed chunk.
    #[default]
    Abort,
    /// Record the failure and continue with the next chunk.
    Skip,
}

/// Parse a CLI policy name.
pub fn parse_rule_chunk_failure(value: &str) -> Result<EnumChunkFailurePolicy, String> {
    match value {
        "abort" => Ok(EnumChunkFailurePolicy::Abort),
        "skip" => Ok(EnumChunkFailurePolicy::Skip),
        _ => Err(format!(
            "Invalid chunk failure policy: `{value}`. Expected one of: ['abort', 'skip']"
        )),
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region StructsAndErrors

/// Input options for `run_narration`.
#[derive(Debug, Clone)]
pub struct SpecNarrationOptions {
    /// UTF-8 text file to narrate.
    pub path_file_input: PathBuf,
    /// Directory receiving `bloco_audio_<n>.mp3`.
    pub path_dir_output: PathBuf,
    /// Words per chunk; must be positive.
    pub window_size: usize,
    pub lang: String,
    pub tld: String,
    pub rule_chunk_failure: EnumChunkFailurePolicy,
}

impl Default for SpecNarrationOptions {
    fn default() -> Self {
        Self {
            path_file_input: PathBuf::from(C_FILE_INPUT_DEFAULT),
            path_dir_output: PathBuf::from(C_DIR_OUTPUT_DEFAULT),
            window_size: N_WINDOW_SIZE_DEFAULT,
            lang: C_TTS_LANG.to_string(),
            tld: C_TTS_TLD.to_string(),
            rule_chunk_failure: EnumChunkFailurePolicy::Abort,
        }
    }
}

/// One skipped chunk (1-based index) with the backend error text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecChunkError {
    pub index: usize,
    pub exception: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NarrationError {
    /// Window size of zero.
    InvalidWindowSize,
    /// Input file missing or not UTF-8.
    ReadInput { path: PathBuf, message: String },
    /// Backend failure under the abort policy.
    Synthesis { index: usize, message: String },
    /// Output directory or chunk file could not be written.
    Write(WriteFileError),
}

impl fmt::Display for NarrationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWindowSize => write!(f, "window size must be greater than zero"),
            Self::ReadInput { path, message } => {
                write!(f, "Failed to read input {}: {message}", path.display())
            }
            Self::Synthesis { index, message } => {
                write!(f, "Speech synthesis failed for chunk {index}: {message}")
            }
            Self::Write(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for NarrationError {}

impl From<WriteFileError> for NarrationError {
    fn from(err: WriteFileError) -> Self {
        Self::Write(err)
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
