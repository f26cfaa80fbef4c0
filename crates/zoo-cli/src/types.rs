//! Structured results of a pipeline run.

use std::fmt;
use std::path::PathBuf;

/// Recoverable condition met during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueKind {
    /// Data file absent or unreadable; run continued with no records.
    MissingSource,
    /// Data file is not a JSON array of objects; run continued with no records.
    MalformedSource,
    /// Template absent or unreadable; nothing was rendered.
    MissingTemplate,
    /// Template lacks the placeholder; nothing was persisted.
    MissingPlaceholder,
    /// Output file could not be written.
    WriteFailure,
}

impl IssueKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::MissingSource => "missing-source",
            Self::MalformedSource => "malformed-source",
            Self::MissingTemplate => "missing-template",
            Self::MissingPlaceholder => "missing-placeholder",
            Self::WriteFailure => "write-failure",
        }
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunIssue {
    pub kind: IssueKind,
    pub message: String,
}

impl RunIssue {
    pub fn new(kind: IssueKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// What happened to the output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistStatus {
    Written { bytes: usize },
    Skipped,
    Failed,
}

#[derive(Debug)]
pub struct HtmlRun {
    pub record_count: usize,
    pub template_path: PathBuf,
    pub output_path: PathBuf,
    pub persist: PersistStatus,
    pub issues: Vec<RunIssue>,
}

impl HtmlRun {
    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }

    pub fn has_issue(&self, kind: IssueKind) -> bool {
        self.issues.iter().any(|issue| issue.kind == kind)
    }
}

#[derive(Debug)]
pub struct TextRun {
    pub record_count: usize,
    pub text: String,
    pub issues: Vec<RunIssue>,
}

impl TextRun {
    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }
}
