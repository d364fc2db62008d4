//! Rules on the links given under the release checkboxes.

use crate::checklist::ChecklistItemKind;
use crate::checks::{ReviewContext, RuleOutcome};
use crate::probe::LinkProbe;
use tracing::{debug, warn};

pub const STAGING_REPOSITORY_RULE: &str = "Staging repository link of the form https://jakarta.oss.sonatype.org/content/repositories/staging/jakarta/{spec}/jakarta.{spec}-api/x.y.z/";
pub const TCK_ARCHIVE_RULE: &str = "EFTL TCK link of the form http://download.eclipse.org/.../+.zip";
pub const COMPATIBILITY_CERTIFICATION_RULE: &str = "Compatibility certification link of the form https://github.com/eclipse-ee4j/{project}/#{issue}";

/// Required prefix for the EFTL TCK archive.
pub const TCK_HOST_PREFIX: &str = "http://download.eclipse.org/";

pub fn staging_repository(ctx: &ReviewContext) -> RuleOutcome {
    let url = ctx.checklist.value(ChecklistItemKind::ApiStageRepo);
    if url.is_empty() {
        return RuleOutcome::fail(STAGING_REPOSITORY_RULE, vec![missing_link("staging repository")]);
    }

    match reachability(ctx.probe, url) {
        None => RuleOutcome::pass(STAGING_REPOSITORY_RULE),
        Some(detail) => RuleOutcome::fail(STAGING_REPOSITORY_RULE, vec![detail]),
    }
}

pub fn tck_archive(ctx: &ReviewContext) -> RuleOutcome {
    let url = ctx.checklist.value(ChecklistItemKind::TckStageUrl);
    if url.is_empty() {
        return RuleOutcome::fail(TCK_ARCHIVE_RULE, vec![missing_link("EFTL TCK")]);
    }

    let mut details = Vec::new();
    if !url.starts_with(TCK_HOST_PREFIX) {
        details.push(format!("{url} not under {TCK_HOST_PREFIX}"));
    }
    details.extend(reachability(ctx.probe, url));

    if details.is_empty() {
        RuleOutcome::pass(TCK_ARCHIVE_RULE)
    } else {
        RuleOutcome::fail(TCK_ARCHIVE_RULE, details)
    }
}

/// The link has to exist, but whether the issue is a proper
/// certification request is up to the reviewer.
pub fn compatibility_certification(ctx: &ReviewContext) -> RuleOutcome {
    if ctx.checklist.value(ChecklistItemKind::CcrUrl).is_empty() {
        return RuleOutcome::fail(
            COMPATIBILITY_CERTIFICATION_RULE,
            vec![missing_link("compatibility certification")],
        );
    }
    RuleOutcome::needs_review(COMPATIBILITY_CERTIFICATION_RULE)
}

fn missing_link(what: &str) -> String {
    format!("No {what} link given under its checkbox in the PR description")
}

/// `None` when the URL serves content, otherwise the failure detail.
fn reachability(probe: &dyn LinkProbe, url: &str) -> Option<String> {
    match probe.content_length(url) {
        Ok(length) if length > 0 => {
            debug!(url, length, "link reachable");
            None
        }
        Ok(length) => {
            warn!(url, length, "link has no content");
            Some(format!("Content length was zero for: {url}"))
        }
        Err(err) => {
            warn!(url, error = %err, "link unreachable");
            Some(format!("Failed to access URL: {url}"))
        }
    }
}
