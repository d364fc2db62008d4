pub mod layout;
pub mod links;
pub mod manual;
pub mod template;

use crate::checklist::Checklist;
use crate::classify::FileClassification;
use crate::probe::LinkProbe;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Pass,
    Fail,
    /// Cannot be verified automatically; a reviewer has to look.
    NeedsReview,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOutcome {
    /// Checklist line describing the rule.
    pub rule: String,
    pub status: Status,
    /// Diagnostics shown under the rule, e.g. offending files or URLs.
    pub details: Vec<String>,
}

impl RuleOutcome {
    pub fn pass(rule: &str) -> Self {
        Self {
            rule: rule.to_string(),
            status: Status::Pass,
            details: vec![],
        }
    }

    pub fn fail(rule: &str, details: Vec<String>) -> Self {
        Self {
            rule: rule.to_string(),
            status: Status::Fail,
            details,
        }
    }

    pub fn needs_review(rule: &str) -> Self {
        Self {
            rule: rule.to_string(),
            status: Status::NeedsReview,
            details: vec![],
        }
    }
}

/// Everything a rule may look at.
pub struct ReviewContext<'a> {
    pub checklist: &'a Checklist,
    pub files: &'a FileClassification,
    pub probe: &'a dyn LinkProbe,
}
