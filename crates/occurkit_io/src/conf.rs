//! Reserved field names and fixed presets for occurrence reports.

/// Server-side timestamp column, always the first header.
pub const C_FIELD_TIMESTAMP: &str = "Timestamp";
/// Control field selecting the requested action; never persisted.
pub const C_FIELD_ACTION: &str = "action";
/// Occurrence category field; also drives rendered document names.
pub const C_FIELD_TYPE: &str = "tipo";

/// Checkbox-style fields carried as literal `"true"`/`"false"`.
pub const TUP_FIELDS_CHECKBOX: [&str; 2] = ["atualizar_riscos", "mudancas_sgq"];

/// Category options offered by the submission form.
pub const TUP_OCCURRENCE_TYPES: [&str; 5] = [
    "Não Conformidade",
    "Oportunidade de Melhoria",
    "Incidente",
    "Observação",
    "Outro",
];

/// Timestamp stored in the record (`2025-02-03 14:05:09`).
pub const C_FMT_TIMESTAMP_RECORD: &str = "%Y-%m-%d %H:%M:%S";
/// Timestamp embedded in generated file names (`20250203_140509`).
pub const C_FMT_TIMESTAMP_FILE: &str = "%Y%m%d_%H%M%S";
