//! Submission handling independent of the HTTP framework.

use std::fs;
use std::path::Path;

use chrono::NaiveDateTime;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use tracing::{error, info, warn};

use occurkit_io::{
    C_FIELD_ACTION, C_FIELD_TIMESTAMP, SpecSubmissionRecord, TUP_FIELDS_CHECKBOX,
    format_record_timestamp,
};
use occurkit_io_pdf::{DocumentRenderer, RenderDocumentError, SpecDocumentRenderOptions};
use occurkit_io_xlsx::{AppendRecordError, RecordAppender, SpecRecordAppenderOptions};

use crate::conf::{
    C_NOTICE_PREFIX_RENDER, C_NOTICE_PREFIX_STORE_OPEN, C_NOTICE_PREFIX_STORE_SAVE,
    C_NOTICE_PREFIX_STORE_UNEXPECTED, C_NOTICE_SAVED, C_NOTICE_SEND_FAILED,
    C_NOTICE_UNKNOWN_ACTION,
};
use crate::spec::{
    EnumGatewayOutcome, EnumSubmitAction, EnumSubmitReply, SpecAttachment, SpecGatewayOptions,
    SpecNotice,
};

/// Routes a submitted form to the store or the document renderer.
#[derive(Debug, Clone)]
pub struct FormGateway {
    appender: RecordAppender,
    renderer: DocumentRenderer,
}

impl FormGateway {
    pub fn new(options: &SpecGatewayOptions) -> Self {
        let appender = RecordAppender::new(SpecRecordAppenderOptions {
            path_file_store: options.path_file_store.clone(),
            sheet_name: options.sheet_name.clone(),
        });
        let renderer = DocumentRenderer::new(
            SpecDocumentRenderOptions::default().with_output_dir(options.path_dir_pdf.clone()),
        );
        Self { appender, renderer }
    }

    /// Process one submission received at `now`.
    pub fn submit<I, K, V>(&self, pairs: I, now: &NaiveDateTime) -> EnumGatewayOutcome
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let record = prepare_record(pairs, now);

        match EnumSubmitAction::parse(record.get(C_FIELD_ACTION)) {
            EnumSubmitAction::Save => match self.appender.append(&record) {
                Ok(_) => EnumGatewayOutcome::Notice(SpecNotice::success(C_NOTICE_SAVED)),
                Err(err) => {
                    error!(error = %err, "[SUBMIT] save failed");
                    EnumGatewayOutcome::Notice(derive_append_notice(&err))
                }
            },
            EnumSubmitAction::Render => match self.renderer.render(&record, now) {
                Ok(path_file) => EnumGatewayOutcome::Attachment(path_file),
                Err(err) => {
                    error!(error = %err, "[SUBMIT] render failed");
                    EnumGatewayOutcome::Notice(derive_render_notice(&err))
                }
            },
            EnumSubmitAction::Unknown => {
                warn!(action = ?record.get(C_FIELD_ACTION), "[SUBMIT] unknown action");
                EnumGatewayOutcome::Notice(SpecNotice::error(C_NOTICE_UNKNOWN_ACTION))
            }
        }
    }

    /// Process a submission and resolve any attachment into sendable bytes.
    pub fn handle<I, K, V>(&self, pairs: I, now: &NaiveDateTime) -> EnumSubmitReply
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        match self.submit(pairs, now) {
            EnumGatewayOutcome::Notice(notice) => EnumSubmitReply::Redirect(notice),
            EnumGatewayOutcome::Attachment(path_file) => match load_attachment(&path_file) {
                Ok(attachment) => {
                    info!(path = %path_file.display(), "[SUBMIT] sending document");
                    EnumSubmitReply::File(attachment)
                }
                Err(message) => {
                    error!(path = %path_file.display(), %message, "[SUBMIT] send failed");
                    EnumSubmitReply::Redirect(SpecNotice::error(C_NOTICE_SEND_FAILED))
                }
            },
        }
    }
}

/// Build the record: checkboxes default to `"false"`, `Timestamp` is set.
pub fn prepare_record<I, K, V>(pairs: I, now: &NaiveDateTime) -> SpecSubmissionRecord
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let mut record = SpecSubmissionRecord::from_pairs(pairs);
    for key in TUP_FIELDS_CHECKBOX {
        if !record.contains_key(key) {
            record.insert(key, "false");
        }
    }
    record.insert(C_FIELD_TIMESTAMP, format_record_timestamp(now));
    record
}

pub fn derive_append_notice(err: &AppendRecordError) -> SpecNotice {
    let message = match err {
        AppendRecordError::Open { message, .. } => {
            format!("{C_NOTICE_PREFIX_STORE_OPEN} {message}")
        }
        AppendRecordError::Permission { path, .. } => {
            let c_name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            format!(
                "Erro de Permissão ao salvar Excel. Feche o ficheiro '{c_name}' se estiver aberto."
            )
        }
        AppendRecordError::Save { message, .. } => {
            format!("{C_NOTICE_PREFIX_STORE_SAVE} {message}")
        }
        AppendRecordError::Unexpected(message) => {
            format!("{C_NOTICE_PREFIX_STORE_UNEXPECTED} {message}")
        }
    };
    SpecNotice::error(message)
}

pub fn derive_render_notice(err: &RenderDocumentError) -> SpecNotice {
    SpecNotice::error(format!("{C_NOTICE_PREFIX_RENDER} {err}"))
}

pub fn load_attachment(path_file: &Path) -> Result<SpecAttachment, String> {
    let file_name = path_file
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| format!("no file name in {}", path_file.display()))?
        .to_string();
    let v_bytes = fs::read(path_file).map_err(|err| err.to_string())?;
    Ok(SpecAttachment { file_name, v_bytes })
}

/// Bytes outside the RFC 5987 `attr-char` set.
const ATTR_CHAR_ENCODE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'!')
    .remove(b'#')
    .remove(b'$')
    .remove(b'&')
    .remove(b'+')
    .remove(b'-')
    .remove(b'.')
    .remove(b'^')
    .remove(b'_')
    .remove(b'`')
    .remove(b'|')
    .remove(b'~');

/// `Content-Disposition` value with an ASCII fallback and an RFC 5987 name.
pub fn derive_content_disposition(file_name: &str) -> String {
    let c_ascii: String = file_name
        .chars()
        .map(|chr| {
            if chr.is_ascii_graphic() && chr != '"' && chr != '\\' {
                chr
            } else {
                '_'
            }
        })
        .collect();
    if c_ascii == file_name {
        return format!("attachment; filename=\"{file_name}\"");
    }
    let c_encoded = utf8_percent_encode(file_name, ATTR_CHAR_ENCODE).to_string();
    format!("attachment; filename=\"{c_ascii}\"; filename*=UTF-8''{c_encoded}")
}
