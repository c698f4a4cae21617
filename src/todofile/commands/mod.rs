use crate::model::Item;
use crate::store::{Diagnostic, DiagnosticKind};

pub mod add;
pub mod delete;
pub mod list;
pub mod load;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

impl From<&Diagnostic> for CmdMessage {
    fn from(diagnostic: &Diagnostic) -> Self {
        let level = match diagnostic.kind {
            DiagnosticKind::FileNotFound => MessageLevel::Info,
            DiagnosticKind::UnmatchedLine | DiagnosticKind::DuplicateId => MessageLevel::Warning,
            DiagnosticKind::MalformedId
            | DiagnosticKind::IdOverflow
            | DiagnosticKind::PermissionDenied
            | DiagnosticKind::Io
            | DiagnosticKind::Unexpected => MessageLevel::Error,
        };
        Self {
            level,
            content: diagnostic.detail.clone(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_items: Vec<Item>,
    pub listed_items: Vec<Item>,
    pub diagnostics: Vec<Diagnostic>,
    pub messages: Vec<CmdMessage>,
    /// Set when the command addressed an id that does not exist.
    pub not_found: bool,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    /// Record a diagnostic and surface it as a message.
    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.messages.push(CmdMessage::from(&diagnostic));
        self.diagnostics.push(diagnostic);
    }

    pub fn with_affected_items(mut self, items: Vec<Item>) -> Self {
        self.affected_items = items;
        self
    }

    pub fn with_listed_items(mut self, items: Vec<Item>) -> Self {
        self.listed_items = items;
        self
    }
}
