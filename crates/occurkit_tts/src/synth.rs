//! Speech-synthesis port and the Google Translate TTS backend.

use std::io::Read;
use std::time::Duration;

use tracing::debug;
use url::Url;

use crate::conf::{
    C_TTS_CLIENT, C_TTS_HOST_PREFIX, C_TTS_PATH, C_TTS_USER_AGENT, N_LEN_BACKEND_PIECE_MAX,
    N_TTS_TIMEOUT_MS,
};
use crate::util::split_text_for_backend;

/// Turns text into MP3 bytes for a language and regional domain.
pub trait SpeechSynthesizer {
    fn synthesize(&self, text: &str, lang: &str, tld: &str) -> Result<Vec<u8>, String>;
}

/// Unofficial Google Translate speech endpoint, one GET per text piece.
///
/// The endpoint only accepts short texts, so the input is cut into pieces of
/// at most 100 chars and the returned MP3 frames are concatenated.
#[derive(Debug, Clone)]
pub struct GoogleTranslateTts {
    agent: ureq::Agent,
    n_len_piece_max: usize,
}

impl Default for GoogleTranslateTts {
    fn default() -> Self {
        Self::new(Duration::from_millis(N_TTS_TIMEOUT_MS))
    }
}

impl GoogleTranslateTts {
    pub fn new(timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(timeout)
            .timeout_read(timeout)
            .timeout_write(timeout)
            .user_agent(C_TTS_USER_AGENT)
            .build();
        Self {
            agent,
            n_len_piece_max: N_LEN_BACKEND_PIECE_MAX,
        }
    }

    fn fetch_piece(&self, url: &Url) -> Result<Vec<u8>, String> {
        let response = self
            .agent
            .request_url("GET", url)
            .call()
            .map_err(derive_ureq_error_text)?;

        let mut v_bytes: Vec<u8> = Vec::new();
        response
            .into_reader()
            .read_to_end(&mut v_bytes)
            .map_err(|err| format!("tts read error: {err}"))?;
        if v_bytes.is_empty() {
            return Err("tts backend returned an empty payload".to_string());
        }
        Ok(v_bytes)
    }
}

impl SpeechSynthesizer for GoogleTranslateTts {
    fn synthesize(&self, text: &str, lang: &str, tld: &str) -> Result<Vec<u8>, String> {
        let l_pieces = split_text_for_backend(text, self.n_len_piece_max);
        if l_pieces.is_empty() {
            return Err("no text to speak".to_string());
        }

        let mut v_audio: Vec<u8> = Vec::new();
        for (idx, c_piece) in l_pieces.iter().enumerate() {
            let url = derive_tts_request_url(c_piece, lang, tld, idx, l_pieces.len())?;
            debug!(piece = idx, total = l_pieces.len(), "[TTS] requesting piece");
            v_audio.extend(self.fetch_piece(&url)?);
        }
        Ok(v_audio)
    }
}

/// Request URL for piece `idx` of `total`.
pub fn derive_tts_request_url(
    piece: &str,
    lang: &str,
    tld: &str,
    idx: usize,
    total: usize,
) -> Result<Url, String> {
    if tld.is_empty()
        || !tld
            .chars()
            .all(|chr| chr.is_ascii_alphanumeric() || chr == '.')
    {
        return Err(format!("Invalid top-level domain: `{tld}`"));
    }
    let c_base = format!("https://{C_TTS_HOST_PREFIX}{tld}{C_TTS_PATH}");
    let c_idx = idx.to_string();
    let c_total = total.to_string();
    let c_textlen = piece.chars().count().to_string();

    Url::parse_with_params(
        &c_base,
        &[
            ("ie", "UTF-8"),
            ("client", C_TTS_CLIENT),
            ("tl", lang),
            ("q", piece),
            ("idx", c_idx.as_str()),
            ("total", c_total.as_str()),
            ("textlen", c_textlen.as_str()),
        ],
    )
    .map_err(|err| format!("Invalid tts url: {err}"))
}

fn derive_ureq_error_text(err: ureq::Error) -> String {
    match err {
        ureq::Error::Status(status, _) => format!("tts backend returned http {status}"),
        ureq::Error::Transport(transport) => format!("tts transport error: {transport}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_url_targets_regional_host_with_query() {
        let url = derive_tts_request_url("olá mundo", "pt", "pt", 0, 2).expect("url");

        assert_eq!(url.host_str(), Some("translate.google.pt"));
        assert_eq!(url.path(), "/translate_tts");
        let l_pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert!(l_pairs.contains(&("client".to_string(), "tw-ob".to_string())));
        assert!(l_pairs.contains(&("q".to_string(), "olá mundo".to_string())));
        assert!(l_pairs.contains(&("textlen".to_string(), "9".to_string())));
        assert!(l_pairs.contains(&("total".to_string(), "2".to_string())));
    }

    #[test]
    fn request_url_rejects_host_injection() {
        assert!(derive_tts_request_url("x", "pt", "pt/evil?", 0, 1).is_err());
        assert!(derive_tts_request_url("x", "pt", "", 0, 1).is_err());
        assert!(derive_tts_request_url("x", "pt", "com.br", 0, 1).is_ok());
    }

    #[test]
    fn empty_text_fails_without_network() {
        let backend = GoogleTranslateTts::default();
        assert!(backend.synthesize("   ", "pt", "pt").is_err());
    }
}
