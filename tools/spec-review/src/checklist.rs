//! Parser for the checkbox list in a specification PR description.
//!
//! The PR template contains one `- [ ] ...` line per [`ChecklistItemKind`], in
//! enumeration order, each optionally followed by a line carrying the item's
//! value (usually a URL). The Nth checkbox line is the Nth kind.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;
use tracing::debug;

static CHECKBOX_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*- \[[\sx]\].*$").unwrap()
});

const CHECKED_MARK: &str = "[x]";

/// One checkbox of the specification PR template, in template order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ChecklistItemKind {
    SpecDir,
    SpecPdf,
    SpecHtml,
    SpecIndex,
    SpecTckPr,
    SpecTckRr,
    RrUpdated,
    RrGenIpLog,
    RrEmailPmc,
    RrStartReview,
    ApiStageRepo,
    TckStageUrl,
    CcrUrl,
    JavadocDir,
}

impl ChecklistItemKind {
    pub const ALL: [ChecklistItemKind; 14] = [
        Self::SpecDir,
        Self::SpecPdf,
        Self::SpecHtml,
        Self::SpecIndex,
        Self::SpecTckPr,
        Self::SpecTckRr,
        Self::RrUpdated,
        Self::RrGenIpLog,
        Self::RrEmailPmc,
        Self::RrStartReview,
        Self::ApiStageRepo,
        Self::TckStageUrl,
        Self::CcrUrl,
        Self::JavadocDir,
    ];

    /// Kind expected at the given zero-based checkbox position.
    pub fn at(position: usize) -> Option<Self> {
        Self::ALL.get(position).copied()
    }

    pub fn position(self) -> usize {
        self as usize
    }

    /// Short descriptive label for the item. Not the template's exact wording;
    /// parsing relies on position only.
    pub fn template_line(self) -> &'static str {
        match self {
            Self::SpecDir => "Directory of form {spec}/x.y",
            Self::SpecPdf => "PDF of form jakarta-{spec}-spec-x.y.pdf",
            Self::SpecHtml => "HTML of form jakarta-{spec}-spec-x.y.html",
            Self::SpecIndex => "Index pages following the spec page templates",
            Self::SpecTckPr => "TCK PR merged",
            Self::SpecTckRr => "TCK results summary published",
            Self::RrUpdated => "Release record updated",
            Self::RrGenIpLog => "IP log generated",
            Self::RrEmailPmc => "PMC approval requested by email",
            Self::RrStartReview => "Release review started",
            Self::ApiStageRepo => "Staging repository link",
            Self::TckStageUrl => "EFTL TCK link",
            Self::CcrUrl => "Compatibility certification link",
            Self::JavadocDir => "(Optional) Second PR for just apidocs",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistRecord {
    pub kind: ChecklistItemKind,
    /// Text after the checkbox, descriptive only.
    pub label: String,
    /// First non-blank line following the checkbox, trimmed.
    pub value: String,
    pub checked: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Checklist {
    records: Vec<ChecklistRecord>,
}

impl Checklist {
    pub fn records(&self) -> &[ChecklistRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// True when every template checkbox was found.
    pub fn is_complete(&self) -> bool {
        self.records.len() == ChecklistItemKind::ALL.len()
    }

    pub fn get(&self, kind: ChecklistItemKind) -> Option<&ChecklistRecord> {
        self.records
            .get(kind.position())
            .filter(|record| record.kind == kind)
    }

    /// Value of the record for `kind`; empty when the record is missing.
    pub fn value(&self, kind: ChecklistItemKind) -> &str {
        self.get(kind).map(|record| record.value.as_str()).unwrap_or("")
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChecklistError {
    #[error(
        "malformed checklist template: unexpected checklist item at position {position}: {line}"
    )]
    UnexpectedItem { position: usize, line: String },
}

/// Parse a PR description into its checklist records.
pub fn parse(body: &str) -> Result<Checklist, ChecklistError> {
    let records = body.split('\n').try_fold(
        Vec::<ChecklistRecord>::new(),
        |mut records, line| {
            if CHECKBOX_LINE.is_match(line) {
                let record = parse_checkbox(records.len(), line)?;
                debug!(
                    kind = ?record.kind,
                    checked = record.checked,
                    label = %record.label,
                    "checklist item"
                );
                records.push(record);
            } else if let Some(current) = records.last_mut().filter(|r| r.value.is_empty()) {
                current.value = line.trim().to_string();
                if !current.value.is_empty() {
                    debug!(kind = ?current.kind, value = %current.value, "checklist value");
                }
            }
            Ok::<_, ChecklistError>(records)
        },
    )?;

    debug!(count = records.len(), "parsed checklist");
    Ok(Checklist { records })
}

fn parse_checkbox(position: usize, line: &str) -> Result<ChecklistRecord, ChecklistError> {
    let kind = ChecklistItemKind::at(position).ok_or_else(|| ChecklistError::UnexpectedItem {
        position,
        line: line.trim().to_string(),
    })?;

    let close = line.find(']').map_or(line.len(), |idx| idx + 1);
    let (checkbox, label) = line.split_at(close);

    Ok(ChecklistRecord {
        kind,
        label: label.trim().to_string(),
        value: String::new(),
        checked: checkbox.contains(CHECKED_MARK),
    })
}
