pub mod checklist;
pub mod checks;
pub mod classify;
pub mod config;
pub mod error;
pub mod github;
pub mod probe;
pub mod report;
pub mod reporter;
pub mod review;
pub mod telemetry;

pub use error::{ReviewError, Result};

use checks::{ReviewContext, RuleOutcome};

/// Evaluate every checklist rule, in report order.
pub fn run_all_checks(ctx: &ReviewContext) -> Vec<RuleOutcome> {
    type CheckFn = fn(&ReviewContext) -> RuleOutcome;
    let check_fns: Vec<CheckFn> = vec![
        checks::template::check,
        checks::layout::directory,
        checks::layout::pdf,
        checks::layout::html,
        checks::manual::version_index,
        checks::manual::spec_index,
        checks::layout::no_other_files,
        checks::links::staging_repository,
        checks::links::tck_archive,
        checks::links::compatibility_certification,
        checks::manual::apidocs_pr,
    ];

    let mut results = Vec::new();
    for check_fn in &check_fns {
        results.push(check_fn(ctx));
    }
    results
}
