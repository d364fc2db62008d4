//! Items only a reviewer can judge.

use crate::checks::{ReviewContext, RuleOutcome};

pub const VERSION_INDEX_RULE: &str = "Index page {spec}/x.y/_index.md following [template](https://github.com/jakartaee/specification-committee/blob/master/spec_page_template.md)";
pub const SPEC_INDEX_RULE: &str = "Index page {spec}/_index.md following [template](https://github.com/jakartaee/specification-committee/blob/master/spec_index_template.md)";
pub const APIDOCS_PR_RULE: &str = "(Optional) Second PR for just apidocs";

pub fn version_index(_ctx: &ReviewContext) -> RuleOutcome {
    RuleOutcome::needs_review(VERSION_INDEX_RULE)
}

pub fn spec_index(_ctx: &ReviewContext) -> RuleOutcome {
    RuleOutcome::needs_review(SPEC_INDEX_RULE)
}

pub fn apidocs_pr(_ctx: &ReviewContext) -> RuleOutcome {
    RuleOutcome::needs_review(APIDOCS_PR_RULE)
}
