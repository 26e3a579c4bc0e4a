/// Words per narrated chunk (about ten minutes of speech).
pub const N_WINDOW_SIZE_DEFAULT: usize = 1400;

/// Fixed voice locale: European Portuguese.
pub const C_TTS_LANG: &str = "pt";
pub const C_TTS_TLD: &str = "pt";

pub const C_FILE_INPUT_DEFAULT: &str = "03-02-2025 cleaned_transcription.txt";
pub const C_DIR_OUTPUT_DEFAULT: &str = ".";
pub const C_FILE_CHUNK_PREFIX: &str = "bloco_audio_";
pub const C_EXT_AUDIO: &str = "mp3";

/// Longest text the translate endpoint accepts per request (chars).
pub const N_LEN_BACKEND_PIECE_MAX: usize = 100;
pub const C_TTS_HOST_PREFIX: &str = "translate.google.";
pub const C_TTS_PATH: &str = "/translate_tts";
pub const C_TTS_CLIENT: &str = "tw-ob";
pub const N_TTS_TIMEOUT_MS: u64 = 30_000;
pub const C_TTS_USER_AGENT: &str = "Mozilla/5.0 (occurkit_narrate)";
