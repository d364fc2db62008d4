//! Terminal summary of a review.
//!
//! The writer is stdout in the binary and a byte buffer in tests, so color
//! support is decided on the real stdout stream.

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use std::io::{self, Write};

use crate::checks::{RuleOutcome, Status};
use crate::classify::FileClassification;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    pub passed: usize,
    pub failed: usize,
    pub needs_review: usize,
}

impl Totals {
    pub fn of(outcomes: &[RuleOutcome]) -> Self {
        let count = |status: Status| outcomes.iter().filter(|o| o.status == status).count();
        Self {
            passed: count(Status::Pass),
            failed: count(Status::Fail),
            needs_review: count(Status::NeedsReview),
        }
    }
}

pub fn write_header<W: Write>(out: &mut W, files: &FileClassification) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        format!(
            "\n=== Spec Review: {} {} ===\n",
            files.spec_name(),
            files.spec_version()
        )
        .if_supports_color(Stdout, |s| s.bold())
    )
}

pub fn write_outcome<W: Write>(out: &mut W, outcome: &RuleOutcome) -> io::Result<()> {
    match outcome.status {
        Status::Pass => writeln!(
            out,
            "{} {}",
            "\u{2713}".if_supports_color(Stdout, |s| s.green()),
            outcome.rule,
        )?,
        Status::Fail => writeln!(
            out,
            "{} {}",
            "\u{2717}".if_supports_color(Stdout, |s| s.red()),
            outcome.rule,
        )?,
        Status::NeedsReview => writeln!(
            out,
            "{} {}",
            "?".if_supports_color(Stdout, |s| s.yellow()),
            outcome.rule,
        )?,
    }
    for detail in &outcome.details {
        writeln!(out, "    {}", detail.if_supports_color(Stdout, |s| s.dimmed()))?;
    }
    Ok(())
}

/// Print every outcome plus a totals line. Returns the totals.
pub fn write_results<W: Write>(
    out: &mut W,
    files: &FileClassification,
    outcomes: &[RuleOutcome],
) -> io::Result<Totals> {
    write_header(out, files)?;
    for outcome in outcomes {
        write_outcome(out, outcome)?;
    }

    let totals = Totals::of(outcomes);
    writeln!(out, "{}", "\n--- Summary ---".if_supports_color(Stdout, |s| s.bold()))?;
    let line = format!(
        "\n{} passed, {} failed, {} need review.\n",
        totals.passed, totals.failed, totals.needs_review
    );
    if totals.failed == 0 {
        writeln!(out, "{}", line.if_supports_color(Stdout, |s| s.green()))?;
    } else {
        writeln!(out, "{}", line.if_supports_color(Stdout, |s| s.red()))?;
    }

    Ok(totals)
}
