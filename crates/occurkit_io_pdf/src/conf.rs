//! Document constants: geometry, fonts, fixed texts.

/// Points per millimetre.
pub const N_PT_PER_MM: f32 = 72.0 / 25.4;

/// A4 page size in points.
pub const N_WIDTH_PAGE_A4_PT: f32 = 595.28;
pub const N_HEIGHT_PAGE_A4_PT: f32 = 841.89;

/// Document title printed centered on the first page.
pub const C_TITLE_DEFAULT: &str = "Relatório de Ocorrência";
/// Output directory used when none is configured.
pub const C_DIR_OUTPUT_DEFAULT: &str = "PDFs_Ocorrencias";
/// Output file extension.
pub const C_EXT_DOCUMENT: &str = "pdf";

/// File stem used when the designated field sanitizes to nothing.
pub const C_FILE_STEM_FALLBACK: &str = "Ocorrencia";
/// Maximum file stem length (chars), before the timestamp suffix.
pub const N_LEN_FILE_STEM_MAX: usize = 30;

/// Checkbox rendering.
pub const C_TEXT_YES: &str = "Sim";
pub const C_TEXT_NO: &str = "Não";
/// Placeholder for empty values.
pub const C_TEXT_EMPTY: &str = "-";
/// Substitute for characters the output encoding cannot represent.
pub const CHR_UNENCODABLE: char = '?';

/// Field-name prefix token expanded before title-casing.
pub const TUP_LABEL_PREFIX_EXPANSION: (&str, &str) = ("5w2h ", "5W2H - ");
/// Acronyms restored to upper case after title-casing.
pub const TUP_LABEL_ACRONYMS: [&str; 2] = ["SGQ", "5W2H"];

/// PDF resource names of the two standard fonts.
pub const C_FONT_RESOURCE_REGULAR: &str = "F1";
pub const C_FONT_RESOURCE_BOLD: &str = "F2";

/// Helvetica advance widths (1/1000 em) for ASCII 32..=126.
pub const TUP_HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // '0'..'9'
    278, 278, 584, 584, 584, 556, 1015, // ':'..'@'
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, // 'A'..'M'
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // 'N'..'Z'
    278, 278, 278, 469, 556, 333, // '['..'`'
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, // 'a'..'m'
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, // 'n'..'z'
    334, 260, 334, 584, // '{'..'~'
];
/// Width used for Latin-1 glyphs outside the ASCII table.
pub const N_WIDTH_GLYPH_DEFAULT: u16 = 556;
/// Bold glyphs run slightly wider than regular ones.
pub const N_BOLD_WIDTH_FACTOR: f32 = 1.06;
