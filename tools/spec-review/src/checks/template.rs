use crate::checklist::ChecklistItemKind;
use crate::checks::{ReviewContext, RuleOutcome};

pub const RULE: &str =
    "PR uses [template](https://github.com/jakartaee/specifications/blob/master/pull_request_template.md)";

pub fn check(ctx: &ReviewContext) -> RuleOutcome {
    if ctx.checklist.is_complete() {
        return RuleOutcome::pass(RULE);
    }

    RuleOutcome::fail(
        RULE,
        vec![format!(
            "Found {} of {} checklist items",
            ctx.checklist.len(),
            ChecklistItemKind::ALL.len()
        )],
    )
}
