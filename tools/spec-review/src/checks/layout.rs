//! Rules on the shape of the changed files: directory, artifact names and
//! stray files.

use crate::checks::{ReviewContext, RuleOutcome};
use tracing::debug;

pub const DIRECTORY_RULE: &str = "Directory of form {spec}/x.y";
pub const PDF_RULE: &str =
    "PDF of form jakarta-{spec}-spec-x.y.pdf ('-spec' preferred but not required)";
pub const HTML_RULE: &str =
    "HTML of form jakarta-{spec}-spec-x.y.html ('-spec' preferred but not required)";
pub const NO_OTHER_FILES_RULE: &str = "No other files";

pub fn directory(ctx: &ReviewContext) -> RuleOutcome {
    if ctx.files.spec_name.is_some() && ctx.files.spec_version.is_some() {
        return RuleOutcome::pass(DIRECTORY_RULE);
    }

    RuleOutcome::fail(
        DIRECTORY_RULE,
        vec!["No changed file lives under a {spec}/x.y directory".to_string()],
    )
}

pub fn pdf(ctx: &ReviewContext) -> RuleOutcome {
    artifact(ctx, PDF_RULE, ctx.files.spec_pdf.as_deref(), "pdf")
}

pub fn html(ctx: &ReviewContext) -> RuleOutcome {
    artifact(ctx, HTML_RULE, ctx.files.spec_html.as_deref(), "html")
}

pub fn no_other_files(ctx: &ReviewContext) -> RuleOutcome {
    if ctx.files.other_files.is_empty() {
        return RuleOutcome::pass(NO_OTHER_FILES_RULE);
    }

    RuleOutcome::fail(NO_OTHER_FILES_RULE, ctx.files.other_files.clone())
}

fn artifact(ctx: &ReviewContext, rule: &str, found: Option<&str>, extension: &str) -> RuleOutcome {
    let (Some(name), Some(version)) = (
        ctx.files.spec_name.as_deref(),
        ctx.files.spec_version.as_deref(),
    ) else {
        return RuleOutcome::fail(
            rule,
            vec![format!(
                "Cannot derive the expected .{extension} name without a {{spec}}/x.y directory"
            )],
        );
    };

    let preferred = format!("jakarta-{name}-spec-{version}.{extension}");
    let bare = format!("jakarta-{name}-{version}.{extension}");
    debug!(expected = %preferred, found = ?found, "{extension} name check");

    match found {
        Some(file) if file == preferred || file == bare => RuleOutcome::pass(rule),
        Some(file) => RuleOutcome::fail(
            rule,
            vec![format!("Found {file}, expected {preferred} or {bare}")],
        ),
        None => RuleOutcome::fail(
            rule,
            vec![format!("No .{extension} file found, expected {preferred}")],
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checklist::Checklist;
    use crate::checks::Status;
    use crate::classify::{self, FileClassification};
    use crate::probe::fakes::StaticProbe;

    fn run(rule: fn(&ReviewContext) -> RuleOutcome, files: &FileClassification) -> RuleOutcome {
        let checklist = Checklist::default();
        let probe = StaticProbe::default();
        rule(&ReviewContext { checklist: &checklist, files, probe: &probe })
    }

    #[test]
    fn spec_pdf_name_passes() {
        let files = classify::classify(["foo/1.0/jakarta-foo-spec-1.0.pdf"]);
        assert_eq!(run(pdf, &files).status, Status::Pass);
        assert_eq!(run(directory, &files).status, Status::Pass);
    }

    #[test]
    fn bare_pdf_name_passes() {
        let files = classify::classify(["foo/1.0/jakarta-foo-1.0.pdf"]);
        assert_eq!(run(pdf, &files).status, Status::Pass);
    }

    #[test]
    fn pdf_name_is_case_sensitive() {
        let files = classify::classify(["foo/1.0/Jakarta-Foo-Spec-1.0.pdf"]);
        let outcome = run(pdf, &files);

        assert_eq!(outcome.status, Status::Fail);
        assert_eq!(
            outcome.details,
            vec!["Found Jakarta-Foo-Spec-1.0.pdf, expected jakarta-foo-spec-1.0.pdf or jakarta-foo-1.0.pdf"]
        );
    }

    #[test]
    fn missing_pdf_fails() {
        let files = classify::classify(["foo/1.0/jakarta-foo-spec-1.0.html"]);
        let outcome = run(pdf, &files);

        assert_eq!(outcome.status, Status::Fail);
        assert!(outcome.details[0].starts_with("No .pdf file found"));
        assert_eq!(run(html, &files).status, Status::Pass);
    }

    #[test]
    fn html_name_for_other_spec_fails() {
        let files = classify::classify(["foo/1.0/jakarta-bar-spec-1.0.html"]);
        assert_eq!(run(html, &files).status, Status::Fail);
    }

    #[test]
    fn unknown_directory_fails_directory_and_artifact_rules() {
        let files = classify::classify(["README.md"]);

        assert_eq!(run(directory, &files).status, Status::Fail);
        assert_eq!(run(pdf, &files).status, Status::Fail);
        assert_eq!(run(html, &files).status, Status::Fail);
    }

    #[test]
    fn stray_files_are_listed() {
        let files = classify::classify(["foo/1.0/jakarta-foo-spec-1.0.pdf", "logo.png"]);
        let outcome = run(no_other_files, &files);

        assert_eq!(outcome.status, Status::Fail);
        assert_eq!(outcome.details, vec!["logo.png"]);
    }

    #[test]
    fn javadoc_files_are_not_stray() {
        let files = classify::classify(["foo/1.0/apidocs/index.html"]);
        assert_eq!(run(no_other_files, &files).status, Status::Pass);
    }
}
