//! Server-rendered occurrence form.

use std::fmt::Write;

use occurkit_io::{C_FIELD_TYPE, TUP_OCCURRENCE_TYPES};

use crate::conf::{
    C_ACTION_SAVE, C_ROUTE_SUBMIT, TUP_ACTIONS_RENDER, TUP_FORM_CHECKBOX_LABELS,
    TUP_FORM_TEXTAREA_FIELDS, TUP_FORM_TEXT_FIELDS_HEAD, TUP_FORM_TEXT_FIELDS_TAIL,
};
use crate::spec::SpecNotice;

const C_PAGE_STYLE: &str = "body{font-family:Helvetica,Arial,sans-serif;max-width:820px;margin:2em auto;padding:0 1em}\
label{display:block;font-weight:bold;margin-top:1em}\
input[type=text],input[type=date],select,textarea{width:100%;padding:.4em;box-sizing:border-box}\
textarea{min-height:4em}\
.check label{display:inline;font-weight:normal}\
.notice{padding:.8em;margin-bottom:1em;border-radius:4px}\
.notice.success{background:#e3f4e1;color:#1d5e17}\
.notice.error{background:#fbe3e3;color:#8a1c1c}\
.actions{margin-top:1.5em}\
.actions button{padding:.6em 1.4em;margin-right:.6em}";

/// Escape text for HTML element and attribute content.
pub fn escape_html(text: &str) -> String {
    let mut c_out = String::with_capacity(text.len());
    for chr in text.chars() {
        match chr {
            '&' => c_out.push_str("&amp;"),
            '<' => c_out.push_str("&lt;"),
            '>' => c_out.push_str("&gt;"),
            '"' => c_out.push_str("&quot;"),
            '\'' => c_out.push_str("&#39;"),
            _ => c_out.push(chr),
        }
    }
    c_out
}

/// Full form page, optionally headed by a notice.
pub fn render_index_page(notice: Option<&SpecNotice>) -> String {
    let mut c_html = String::with_capacity(4096);
    c_html.push_str("<!DOCTYPE html>\n<html lang=\"pt\">\n<head>\n<meta charset=\"utf-8\">\n");
    c_html.push_str("<title>Relatório de Ocorrência</title>\n");
    let _ = writeln!(c_html, "<style>{C_PAGE_STYLE}</style>");
    c_html.push_str("</head>\n<body>\n<h1>Relatório de Ocorrência</h1>\n");

    if let Some(notice) = notice {
        let _ = writeln!(
            c_html,
            "<div class=\"notice {}\">{}</div>",
            notice.level.as_str(),
            escape_html(&notice.message)
        );
    }

    let _ = writeln!(c_html, "<form method=\"post\" action=\"{C_ROUTE_SUBMIT}\">");
    for (name, label, kind) in TUP_FORM_TEXT_FIELDS_HEAD {
        push_input(&mut c_html, name, label, kind);
    }

    let _ = writeln!(
        c_html,
        "<label for=\"{C_FIELD_TYPE}\">Tipo de ocorrência</label>\n<select id=\"{C_FIELD_TYPE}\" name=\"{C_FIELD_TYPE}\">"
    );
    for c_type in TUP_OCCURRENCE_TYPES {
        let c_type = escape_html(c_type);
        let _ = writeln!(c_html, "<option value=\"{c_type}\">{c_type}</option>");
    }
    c_html.push_str("</select>\n");

    for (name, label) in TUP_FORM_TEXTAREA_FIELDS {
        let _ = writeln!(
            c_html,
            "<label for=\"{name}\">{}</label>\n<textarea id=\"{name}\" name=\"{name}\"></textarea>",
            escape_html(label)
        );
    }
    for (name, label) in TUP_FORM_CHECKBOX_LABELS {
        let _ = writeln!(
            c_html,
            "<div class=\"check\"><input type=\"checkbox\" id=\"{name}\" name=\"{name}\" value=\"true\"> <label for=\"{name}\">{}</label></div>",
            escape_html(label)
        );
    }
    for (name, label, kind) in TUP_FORM_TEXT_FIELDS_TAIL {
        push_input(&mut c_html, name, label, kind);
    }

    let _ = writeln!(
        c_html,
        "<div class=\"actions\">\n<button type=\"submit\" name=\"action\" value=\"{C_ACTION_SAVE}\">Guardar no Excel</button>\n<button type=\"submit\" name=\"action\" value=\"{}\">Gerar PDF</button>\n</div>",
        TUP_ACTIONS_RENDER[0]
    );
    c_html.push_str("</form>\n</body>\n</html>\n");
    c_html
}

fn push_input(c_html: &mut String, name: &str, label: &str, kind: &str) {
    let _ = writeln!(
        c_html,
        "<label for=\"{name}\">{}</label>\n<input type=\"{kind}\" id=\"{name}\" name=\"{name}\">",
        escape_html(label)
    );
}
