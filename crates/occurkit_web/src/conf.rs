//! Routes, environment keys and user-facing notice texts.

pub const C_BIND_DEFAULT: &str = "0.0.0.0:5000";
pub const C_ENV_BIND: &str = "OCCURKIT_BIND";
pub const C_ENV_STORE_PATH: &str = "OCCURKIT_STORE_PATH";
pub const C_ENV_PDF_DIR: &str = "OCCURKIT_PDF_DIR";

pub const C_ROUTE_INDEX: &str = "/";
pub const C_ROUTE_SUBMIT: &str = "/submit";

pub const C_QUERY_LEVEL: &str = "level";
pub const C_QUERY_MESSAGE: &str = "message";

pub const C_ACTION_SAVE: &str = "save";
pub const TUP_ACTIONS_RENDER: [&str; 2] = ["pdf", "render"];

pub const C_MIME_PDF: &str = "application/pdf";

pub const C_NOTICE_SAVED: &str = "Dados salvos com sucesso no Excel!";
pub const C_NOTICE_UNKNOWN_ACTION: &str = "Ação desconhecida.";
pub const C_NOTICE_SEND_FAILED: &str = "Erro ao tentar enviar o PDF gerado.";
pub const C_NOTICE_PREFIX_STORE_OPEN: &str = "Erro ao carregar ficheiro Excel:";
pub const C_NOTICE_PREFIX_STORE_SAVE: &str = "Erro ao salvar Excel:";
pub const C_NOTICE_PREFIX_STORE_UNEXPECTED: &str = "Erro inesperado no processamento do Excel:";
pub const C_NOTICE_PREFIX_RENDER: &str = "Erro inesperado ao gerar PDF:";
pub const C_NOTICE_PREFIX_FORM: &str = "Erro inesperado no processamento do formulário:";

/// Free-text fields of the form, in submission order.
pub const TUP_FORM_TEXT_FIELDS_HEAD: [(&str, &str, &str); 2] = [
    ("data", "Data", "date"),
    ("local", "Local", "text"),
];
pub const TUP_FORM_TEXTAREA_FIELDS: [(&str, &str); 8] = [
    ("descricao", "Descrição"),
    ("5w2h_o_que", "5W2H - O quê?"),
    ("5w2h_porque", "5W2H - Porquê?"),
    ("5w2h_onde", "5W2H - Onde?"),
    ("5w2h_quando", "5W2H - Quando?"),
    ("5w2h_quem", "5W2H - Quem?"),
    ("5w2h_como", "5W2H - Como?"),
    ("5w2h_quanto", "5W2H - Quanto custa?"),
];
pub const TUP_FORM_CHECKBOX_LABELS: [(&str, &str); 2] = [
    ("atualizar_riscos", "Atualizar riscos e oportunidades"),
    ("mudancas_sgq", "Mudanças no SGQ"),
];
pub const TUP_FORM_TEXT_FIELDS_TAIL: [(&str, &str, &str); 1] =
    [("responsavel", "Responsável", "text")];
