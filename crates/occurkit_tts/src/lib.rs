//! `occurkit_tts` v1:
//! Batch narration of long text files into numbered MP3 chunks.
//!
//! - `conf`    : window size, locale and backend constants
//! - `spec`    : options, policies and errors
//! - `util`    : word windows and backend-sized text pieces
//! - `synth`   : speech-synthesis port and the Google Translate backend
//! - `report`  : run counters
//! - `narrate` : the sequential narration run
pub mod conf;
pub mod narrate;
pub mod report;
pub mod spec;
pub mod synth;
pub mod util;

pub use narrate::run_narration;
pub use report::ReportNarration;
pub use spec::{EnumChunkFailurePolicy, NarrationError, SpecChunkError, SpecNarrationOptions};
pub use synth::{GoogleTranslateTts, SpeechSynthesizer};
pub use util::{derive_chunk_file_name, partition_words, split_text_for_backend};
