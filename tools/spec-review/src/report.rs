//! Markdown body of the review comment.

use crate::checks::{RuleOutcome, Status};
use crate::classify::FileClassification;

/// Heading that identifies the review comment on the PR.
pub const COMMENT_MARKER: &str = "# Spec Review Checklist";

// https://github.com/scotch-io/All-Github-Emoji-Icons
const PASS_MARK: &str = "- [x] :heavy_check_mark: ";
const FAIL_MARK: &str = "- [ ] :exclamation: ";
const REVIEW_MARK: &str = "- [ ] :question: ";

pub fn render(outcomes: &[RuleOutcome], files: &FileClassification) -> String {
    let mut report = format!(
        "Hello, I'm here to help you checking this pull request for __{}__, version __{}__\n\n",
        files.spec_name(),
        files.spec_version(),
    );
    report.push_str("1. Spec PR\n");

    for outcome in outcomes {
        let mark = match outcome.status {
            Status::Pass => PASS_MARK,
            Status::Fail => FAIL_MARK,
            Status::NeedsReview => REVIEW_MARK,
        };
        report.push_str(mark);
        report.push_str(&outcome.rule);
        report.push('\n');
        for detail in &outcome.details {
            report.push('\t');
            report.push_str(detail);
            report.push('\n');
        }
    }

    report
}

/// Full comment text: marker heading followed by the report.
pub fn comment_body(report: &str) -> String {
    format!("{COMMENT_MARKER}\n{report}")
}
