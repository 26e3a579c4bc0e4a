use crate::conf::{C_EXT_AUDIO, C_FILE_CHUNK_PREFIX};
use crate::spec::NarrationError;

/// Group whitespace-separated words into windows of `window_size` words.
///
/// Windows are joined with single spaces; the last one may be shorter.
/// Text without words yields no windows.
pub fn partition_words(text: &str, window_size: usize) -> Result<Vec<String>, NarrationError> {
    if window_size == 0 {
        return Err(NarrationError::InvalidWindowSize);
    }
    let l_words: Vec<&str> = text.split_whitespace().collect();
    Ok(l_words
        .chunks(window_size)
        .map(|window| window.join(" "))
        .collect())
}

/// `bloco_audio_<n>.mp3` for 1-based chunk `n`.
pub fn derive_chunk_file_name(n_chunk: usize) -> String {
    format!("{C_FILE_CHUNK_PREFIX}{n_chunk}.{C_EXT_AUDIO}")
}

/// Cut `text` into pieces of at most `n_len_max` chars on word boundaries.
///
/// A single word longer than the limit is split mid-word.
pub fn split_text_for_backend(text: &str, n_len_max: usize) -> Vec<String> {
    let n_len_max = n_len_max.max(1);
    let mut l_pieces: Vec<String> = Vec::new();
    let mut c_current = String::new();
    let mut n_len_current = 0usize;

    for word in text.split_whitespace() {
        let n_len_word = word.chars().count();
        let n_len_joined = if c_current.is_empty() {
            n_len_word
        } else {
            n_len_current + 1 + n_len_word
        };
        if n_len_joined <= n_len_max {
            if !c_current.is_empty() {
                c_current.push(' ');
            }
            c_current.push_str(word);
            n_len_current = n_len_joined;
            continue;
        }

        if !c_current.is_empty() {
            l_pieces.push(std::mem::take(&mut c_current));
        }
        let l_chars: Vec<char> = word.chars().collect();
        let mut l_slices = l_chars.chunks(n_len_max).peekable();
        while let Some(slice) = l_slices.next() {
            let c_slice: String = slice.iter().collect();
            if l_slices.peek().is_some() {
                l_pieces.push(c_slice);
            } else {
                n_len_current = slice.len();
                c_current = c_slice;
            }
        }
    }
    if !c_current.is_empty() {
        l_pieces.push(c_current);
    }
    l_pieces
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partition_yields_ceil_windows_and_preserves_words() {
        let c_text = (1..=10).map(|n| format!("w{n}")).collect::<Vec<_>>().join("\n  ");
        let l_chunks = partition_words(&c_text, 4).expect("partition");

        assert_eq!(l_chunks.len(), 3);
        assert_eq!(l_chunks[0], "w1 w2 w3 w4");
        assert_eq!(l_chunks[2], "w9 w10");
        let l_words: Vec<&str> = l_chunks.iter().flat_map(|c| c.split(' ')).collect();
        assert_eq!(l_words, c_text.split_whitespace().collect::<Vec<_>>());
    }

    #[test]
    fn partition_edge_cases() {
        assert_eq!(
            partition_words("a b", 0),
            Err(NarrationError::InvalidWindowSize)
        );
        assert!(partition_words(" \n\t ", 3).expect("empty").is_empty());
        assert_eq!(
            partition_words("um dois", 1400).expect("short"),
            vec!["um dois".to_string()]
        );
    }

    #[test]
    fn chunk_names_are_one_based() {
        assert_eq!(derive_chunk_file_name(1), "bloco_audio_1.mp3");
        assert_eq!(derive_chunk_file_name(12), "bloco_audio_12.mp3");
    }

    #[test]
    fn backend_pieces_respect_limit() {
        let c_text = "palavra ".repeat(40);
        let l_pieces = split_text_for_backend(&c_text, 100);
        assert!(l_pieces.len() > 1);
        assert!(l_pieces.iter().all(|p| p.chars().count() <= 100));
        assert_eq!(l_pieces.join(" "), c_text.trim_end());
    }

    #[test]
    fn backend_pieces_split_overlong_words() {
        let c_word = "ç".repeat(250);
        let l_pieces = split_text_for_backend(&format!("início {c_word} fim"), 100);
        assert_eq!(l_pieces[0], "início");
        assert_eq!(l_pieces[1].chars().count(), 100);
        assert_eq!(l_pieces[2].chars().count(), 100);
        assert_eq!(l_pieces[3], format!("{} fim", "ç".repeat(50)));
    }
}
