use std::net::SocketAddr;
use std::path::PathBuf;

use serde::Deserialize;

use occurkit_io_pdf::conf::C_DIR_OUTPUT_DEFAULT;
use occurkit_io_xlsx::{C_FILE_STORE_DEFAULT, C_SHEET_NAME_DEFAULT};

use crate::conf::{C_ACTION_SAVE, C_BIND_DEFAULT, TUP_ACTIONS_RENDER};

////////////////////////////////////////////////////////////////////////////////
// #region Options

/// Runtime configuration of the web gateway.
#[derive(Debug, Clone)]
pub struct SpecGatewayOptions {
    pub bind: SocketAddr,
    pub path_file_store: PathBuf,
    pub path_dir_pdf: PathBuf,
    pub sheet_name: String,
}

impl Default for SpecGatewayOptions {
    fn default() -> Self {
        Self {
            bind: C_BIND_DEFAULT
                .parse()
                .unwrap_or_else(|_| SocketAddr::from(([0, 0, 0, 0], 5000))),
            path_file_store: PathBuf::from(C_FILE_STORE_DEFAULT),
            path_dir_pdf: PathBuf::from(C_DIR_OUTPUT_DEFAULT),
            sheet_name: C_SHEET_NAME_DEFAULT.to_string(),
        }
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Actions and notices

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumSubmitAction {
    Save,
    Render,
    Unknown,
}

impl EnumSubmitAction {
    /// Classify the raw `action` field; missing counts as unknown.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some(C_ACTION_SAVE) => Self::Save,
            Some(val) if TUP_ACTIONS_RENDER.contains(&val) => Self::Render,
            _ => Self::Unknown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumNoticeLevel {
    Success,
    Error,
}

impl EnumNoticeLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "success" => Some(Self::Success),
            "error" => Some(Self::Error),
            _ => None,
        }
    }
}

/// One-shot message shown on the next form page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecNotice {
    pub level: EnumNoticeLevel,
    pub message: String,
}

impl SpecNotice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: EnumNoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: EnumNoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// Query string of the form page carrying a notice after a redirect.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpecNoticeQuery {
    pub level: Option<String>,
    pub message: Option<String>,
}

impl SpecNoticeQuery {
    /// Notice to display; needs a known level and a non-empty message.
    pub fn to_notice(&self) -> Option<SpecNotice> {
        let level = EnumNoticeLevel::parse(self.level.as_deref()?)?;
        let message = self.message.as_deref().filter(|m| !m.trim().is_empty())?;
        Some(SpecNotice {
            level,
            message: message.to_string(),
        })
    }
}

/// Result of processing one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnumGatewayOutcome {
    Notice(SpecNotice),
    Attachment(PathBuf),
}

/// Rendered document ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecAttachment {
    pub file_name: String,
    pub v_bytes: Vec<u8>,
}

/// What the HTTP layer must answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnumSubmitReply {
    Redirect(SpecNotice),
    File(SpecAttachment),
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
