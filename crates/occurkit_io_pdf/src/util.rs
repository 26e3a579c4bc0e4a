use chrono::NaiveDateTime;

use occurkit_io::{C_FMT_TIMESTAMP_FILE, is_checkbox_field};
use occurkit_io_fs::sanitize_file_stem;

use crate::conf::{
    C_EXT_DOCUMENT, C_FILE_STEM_FALLBACK, C_TEXT_EMPTY, C_TEXT_NO, C_TEXT_YES, CHR_UNENCODABLE,
    N_BOLD_WIDTH_FACTOR, N_LEN_FILE_STEM_MAX, N_WIDTH_GLYPH_DEFAULT, TUP_HELVETICA_WIDTHS,
    TUP_LABEL_ACRONYMS, TUP_LABEL_PREFIX_EXPANSION,
};

////////////////////////////////////////////////////////////////////////////////
// #region Labels and values

/// How a single field value is laid out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnumFieldDisplay {
    /// Fits on the label line.
    Line(String),
    /// Word-wrapped in the value column, possibly across pages.
    Paragraph(String),
}

/// Human label for a field name: `5w2h_o_que` -> `5W2H - O Que`.
pub fn format_field_label(key: &str) -> String {
    let (c_prefix_raw, c_prefix_expanded) = TUP_LABEL_PREFIX_EXPANSION;
    let c_spaced = key.replace('_', " ").replace(c_prefix_raw, c_prefix_expanded);

    let mut c_label = to_title_case(&c_spaced);
    for acronym in TUP_LABEL_ACRONYMS {
        let c_titled = to_title_case(acronym);
        if c_titled != acronym {
            c_label = c_label.replace(&c_titled, acronym);
        }
    }
    c_label
}

/// Upper-case every letter that follows a non-letter, lower-case the rest.
fn to_title_case(text: &str) -> String {
    let mut c_out = String::with_capacity(text.len());
    let mut if_prev_letter = false;
    for chr in text.chars() {
        if chr.is_alphabetic() {
            if if_prev_letter {
                c_out.extend(chr.to_lowercase());
            } else {
                c_out.extend(chr.to_uppercase());
            }
            if_prev_letter = true;
        } else {
            c_out.push(chr);
            if_prev_letter = false;
        }
    }
    c_out
}

pub fn derive_field_display(key: &str, value: &str) -> EnumFieldDisplay {
    if is_checkbox_field(key) {
        let c_text = if value == "true" { C_TEXT_YES } else { C_TEXT_NO };
        return EnumFieldDisplay::Line(c_text.to_string());
    }
    if value.trim().is_empty() {
        return EnumFieldDisplay::Line(C_TEXT_EMPTY.to_string());
    }
    EnumFieldDisplay::Paragraph(value.to_string())
}

/// `<stem>_<YYYYMMDD_HHMMSS>.pdf` derived from the category value.
pub fn derive_output_file_name(value_type: Option<&str>, now: &NaiveDateTime) -> String {
    let c_stem = sanitize_file_stem(
        value_type.unwrap_or_default(),
        N_LEN_FILE_STEM_MAX,
        C_FILE_STEM_FALLBACK,
    );
    format!(
        "{c_stem}_{}.{C_EXT_DOCUMENT}",
        now.format(C_FMT_TIMESTAMP_FILE)
    )
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Encoding and metrics

/// Replace characters WinAnsi cannot carry with `?`; tabs become spaces.
///
/// The C1 block (U+0080..U+009F) is replaced as well, since WinAnsi reuses
/// those byte values for unrelated glyphs.
pub fn replace_unencodable(text: &str) -> String {
    text.chars()
        .map(|chr| match chr as u32 {
            0x09 => ' ',
            0x20..=0x7E | 0xA0..=0xFF => chr,
            _ => CHR_UNENCODABLE,
        })
        .collect()
}

/// Single-byte WinAnsi encoding of `text`. Never fails.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    replace_unencodable(text)
        .chars()
        .map(|chr| u8::try_from(chr as u32).unwrap_or(b'?'))
        .collect()
}

/// Rendered width of `text` in points for Helvetica at `font_size`.
pub fn measure_text_width(text: &str, font_size: f32, if_bold: bool) -> f32 {
    let n_units: u32 = text
        .chars()
        .map(|chr| match chr {
            ' '..='~' => u32::from(TUP_HELVETICA_WIDTHS[(chr as usize) - 32]),
            _ => u32::from(N_WIDTH_GLYPH_DEFAULT),
        })
        .sum();
    let n_width = n_units as f32 * font_size / 1000.0;
    if if_bold {
        n_width * N_BOLD_WIDTH_FACTOR
    } else {
        n_width
    }
}

/// Greedy word wrap to `width_max` points.
///
/// Explicit line breaks are kept; a word wider than the column is split
/// at character boundaries.
pub fn wrap_text(text: &str, width_max: f32, font_size: f32) -> Vec<String> {
    let mut l_lines: Vec<String> = Vec::new();

    for c_line_raw in text.split('\n') {
        let c_line_raw = c_line_raw.trim_end_matches('\r');
        let mut c_current = String::new();

        for word in c_line_raw.split(' ').filter(|w| !w.is_empty()) {
            let c_candidate = if c_current.is_empty() {
                word.to_string()
            } else {
                format!("{c_current} {word}")
            };
            if measure_text_width(&c_candidate, font_size, false) <= width_max {
                c_current = c_candidate;
                continue;
            }

            if !c_current.is_empty() {
                l_lines.push(std::mem::take(&mut c_current));
            }
            for chr in word.chars() {
                c_current.push(chr);
                if measure_text_width(&c_current, font_size, false) > width_max
                    && c_current.chars().count() > 1
                {
                    c_current.pop();
                    l_lines.push(std::mem::take(&mut c_current));
                    c_current.push(chr);
                }
            }
        }
        l_lines.push(c_current);
    }

    l_lines
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
