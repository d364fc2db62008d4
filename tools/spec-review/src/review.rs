//! One review run: fetch, parse, classify, evaluate, render, update.

use tracing::{debug, info, warn};

use crate::checklist::{self, Checklist};
use crate::checks::{ReviewContext, RuleOutcome};
use crate::classify::{self, FileClassification};
use crate::github::{IssueComment, PullRequestHost};
use crate::probe::LinkProbe;
use crate::report::{self, COMMENT_MARKER};
use crate::Result;

#[derive(Debug, Clone)]
pub struct ReviewSummary {
    pub checklist: Checklist,
    pub files: FileClassification,
    pub outcomes: Vec<RuleOutcome>,
    /// Markdown report, without the marker heading.
    pub report: String,
    /// Comment whose body was replaced, if any.
    pub updated_comment: Option<u64>,
}

/// Review a PR description and its changed paths.
pub fn evaluate<I, S>(body: &str, paths: I, probe: &dyn LinkProbe) -> Result<ReviewSummary>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let checklist = checklist::parse(body)?;
    info!(items = checklist.len(), "parsed checklist");
    for record in checklist.records() {
        debug!(kind = ?record.kind, value = %record.value, checked = record.checked, "record");
    }

    let files = classify::classify(paths);
    info!(
        spec = files.spec_name(),
        version = files.spec_version(),
        spec_files = files.spec_files.len(),
        javadoc_files = files.javadoc_files.len(),
        other_files = files.other_files.len(),
        "classified changed files"
    );

    let ctx = ReviewContext {
        checklist: &checklist,
        files: &files,
        probe,
    };
    let outcomes = crate::run_all_checks(&ctx);
    let report = report::render(&outcomes, &files);

    Ok(ReviewSummary {
        checklist,
        files,
        outcomes,
        report,
        updated_comment: None,
    })
}

/// Review PR `number` and, unless `dry_run`, replace the body of the
/// assignee's checklist comment with the report.
pub fn review_pull_request(
    host: &dyn PullRequestHost,
    probe: &dyn LinkProbe,
    number: u64,
    dry_run: bool,
) -> Result<ReviewSummary> {
    let pr = host.pull_request(number)?;
    info!(
        "PR#{}({}), changed files: {}, review comments: {}, url={}",
        pr.number, pr.title, pr.changed_files, pr.review_comments, pr.issue_url
    );
    let body = pr.body.as_deref().unwrap_or_default();
    debug!(body, "PR body");

    let files = host.files(number)?;
    for file in &files {
        debug!(
            filename = %file.filename,
            status = %file.status,
            raw_url = ?file.raw_url,
            contents_url = ?file.contents_url,
            "changed file"
        );
    }

    let mut summary = evaluate(body, files.into_iter().map(|f| f.filename), probe)?;

    let Some(assignee) = pr.assignee.as_ref() else {
        warn!("PR#{number} has no assignee, no checklist comment to update");
        return Ok(summary);
    };

    let comments = host.comments(number)?;
    let Some(comment) = find_checklist_comment(&comments, &assignee.login) else {
        info!(assignee = %assignee.login, "no checklist comment from the assignee, nothing to update");
        return Ok(summary);
    };

    if dry_run {
        info!(comment_id = comment.id, "dry run, leaving the checklist comment untouched");
        return Ok(summary);
    }

    info!(comment_id = comment.id, "updating spec review checklist");
    host.update_comment(comment.id, &report::comment_body(&summary.report))?;
    summary.updated_comment = Some(comment.id);

    Ok(summary)
}

/// First comment by `assignee` that starts with the checklist heading.
pub fn find_checklist_comment<'a>(
    comments: &'a [IssueComment],
    assignee: &str,
) -> Option<&'a IssueComment> {
    for comment in comments {
        debug!(
            id = comment.id,
            author = ?comment.user.as_ref().map(|u| u.login.as_str()),
            body = ?comment.body,
            "comment"
        );
    }

    comments.iter().find(|comment| {
        comment.user.as_ref().map(|u| u.login.as_str()) == Some(assignee)
            && comment
                .body
                .as_deref()
                .is_some_and(|body| body.starts_with(COMMENT_MARKER))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checklist::ChecklistItemKind;
    use crate::checks::Status;
    use crate::github::{HostError, PullRequest, PullRequestFile, User};
    use crate::probe::fakes::StaticProbe;
    use crate::ReviewError;
    use std::cell::RefCell;
    use tracing_test::traced_test;

    struct FakeHost {
        pr: PullRequest,
        files: Vec<&'static str>,
        comments: Vec<IssueComment>,
        updates: RefCell<Vec<(u64, String)>>,
        fail_fetch: bool,
        fail_update: bool,
    }

    fn server_error(method: &'static str) -> HostError {
        HostError::Request {
            method,
            url: "https://api.github.com/repos/o/r".to_string(),
            source: ureq::Error::StatusCode(500),
        }
    }

    impl FakeHost {
        fn new(body: &str, assignee: Option<&str>) -> Self {
            Self {
                pr: PullRequest {
                    number: 5,
                    title: "Jakarta Foo 1.0".to_string(),
                    body: Some(body.to_string()),
                    assignee: assignee.map(|login| User { login: login.to_string() }),
                    changed_files: 2,
                    review_comments: 0,
                    issue_url: "https://api.github.com/repos/o/r/issues/5".to_string(),
                },
                files: vec!["foo/1.0/jakarta-foo-spec-1.0.pdf", "foo/1.0/jakarta-foo-spec-1.0.html"],
                comments: vec![],
                updates: RefCell::new(vec![]),
                fail_fetch: false,
                fail_update: false,
            }
        }

        fn comment(mut self, id: u64, login: &str, body: &str) -> Self {
            self.comments.push(IssueComment {
                id,
                user: Some(User { login: login.to_string() }),
                body: Some(body.to_string()),
            });
            self
        }
    }

    impl PullRequestHost for FakeHost {
        fn pull_request(&self, _number: u64) -> std::result::Result<PullRequest, HostError> {
            if self.fail_fetch {
                return Err(server_error("GET"));
            }
            Ok(self.pr.clone())
        }

        fn files(&self, _number: u64) -> std::result::Result<Vec<PullRequestFile>, HostError> {
            Ok(self
                .files
                .iter()
                .map(|f| PullRequestFile {
                    filename: f.to_string(),
                    status: "added".to_string(),
                    raw_url: None,
                    contents_url: None,
                })
                .collect())
        }

        fn comments(&self, _number: u64) -> std::result::Result<Vec<IssueComment>, HostError> {
            Ok(self.comments.clone())
        }

        fn update_comment(&self, comment_id: u64, body: &str) -> std::result::Result<(), HostError> {
            if self.fail_update {
                return Err(server_error("PATCH"));
            }
            self.updates.borrow_mut().push((comment_id, body.to_string()));
            Ok(())
        }
    }

    fn body() -> String {
        ChecklistItemKind::ALL
            .iter()
            .map(|kind| format!("- [x] {}\n\n", kind.template_line()))
            .collect()
    }

    #[test]
    fn evaluate_runs_every_rule_in_order() {
        let summary = evaluate(&body(), ["foo/1.0/jakarta-foo-spec-1.0.pdf"], &StaticProbe::default())
            .unwrap();

        assert_eq!(summary.outcomes.len(), 11);
        assert_eq!(summary.outcomes[0].status, Status::Pass);
        assert_eq!(summary.outcomes[2].status, Status::Pass);
        assert_eq!(summary.outcomes[3].status, Status::Fail);
        assert_eq!(summary.outcomes[10].status, Status::NeedsReview);
        assert!(summary.report.contains("__foo__, version __1.0__"));
    }

    #[test]
    fn malformed_template_aborts() {
        let mut body = body();
        body.push_str("- [ ] one too many\n");

        let err = evaluate(&body, Vec::<String>::new(), &StaticProbe::default()).unwrap_err();
        assert!(matches!(err, ReviewError::Checklist(_)));
    }

    #[test]
    fn updates_first_checklist_comment_of_assignee() {
        let host = FakeHost::new(&body(), Some("reviewer"))
            .comment(1, "author", "# Spec Review Checklist\nold")
            .comment(2, "reviewer", "Looks good")
            .comment(3, "reviewer", "# Spec Review Checklist\nold")
            .comment(4, "reviewer", "# Spec Review Checklist\nolder");

        let summary = review_pull_request(&host, &StaticProbe::default(), 5, false).unwrap();

        assert_eq!(summary.updated_comment, Some(3));
        let updates = host.updates.borrow();
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].0, 3);
        assert!(updates[0].1.starts_with("# Spec Review Checklist\nHello, I'm here"));
    }

    #[test]
    fn never_creates_a_comment() {
        let host = FakeHost::new(&body(), Some("reviewer")).comment(1, "reviewer", "LGTM");

        let summary = review_pull_request(&host, &StaticProbe::default(), 5, false).unwrap();

        assert_eq!(summary.updated_comment, None);
        assert!(host.updates.borrow().is_empty());
    }

    #[test]
    fn dry_run_leaves_comment_untouched() {
        let host = FakeHost::new(&body(), Some("reviewer"))
            .comment(3, "reviewer", "# Spec Review Checklist\nold");

        let summary = review_pull_request(&host, &StaticProbe::default(), 5, true).unwrap();

        assert_eq!(summary.updated_comment, None);
        assert!(host.updates.borrow().is_empty());
        assert!(!summary.report.is_empty());
    }

    #[test]
    fn missing_assignee_skips_update() {
        let host = FakeHost::new(&body(), None)
            .comment(3, "reviewer", "# Spec Review Checklist\nold");

        let summary = review_pull_request(&host, &StaticProbe::default(), 5, false).unwrap();

        assert_eq!(summary.updated_comment, None);
        assert!(host.updates.borrow().is_empty());
    }

    #[test]
    fn comments_without_author_or_body_are_skipped() {
        let comments = vec![
            IssueComment { id: 1, user: None, body: Some("# Spec Review Checklist".to_string()) },
            IssueComment {
                id: 2,
                user: Some(User { login: "reviewer".to_string() }),
                body: None,
            },
        ];
        assert!(find_checklist_comment(&comments, "reviewer").is_none());
    }

    #[test]
    fn failed_pull_request_fetch_aborts_the_run() {
        let mut host = FakeHost::new(&body(), Some("reviewer"))
            .comment(3, "reviewer", "# Spec Review Checklist\nold");
        host.fail_fetch = true;

        let err = review_pull_request(&host, &StaticProbe::default(), 5, false).unwrap_err();

        assert!(matches!(err, ReviewError::Host(HostError::Request { method: "GET", .. })));
        assert!(host.updates.borrow().is_empty());
    }

    #[test]
    fn failed_comment_update_aborts_the_run() {
        let mut host = FakeHost::new(&body(), Some("reviewer"))
            .comment(3, "reviewer", "# Spec Review Checklist\nold");
        host.fail_update = true;

        let result = review_pull_request(&host, &StaticProbe::default(), 5, false);

        let Err(err) = result else {
            panic!("a failed update must not yield a summary with an updated comment");
        };
        assert!(matches!(err, ReviewError::Host(HostError::Request { method: "PATCH", .. })));
        assert!(err.to_string().contains("GitHub request PATCH"));
        assert!(host.updates.borrow().is_empty());
    }

    #[traced_test]
    #[test]
    fn every_comment_is_logged_before_the_match_is_picked() {
        let comments = vec![
            IssueComment {
                id: 41,
                user: Some(User { login: "reviewer".to_string() }),
                body: Some("# Spec Review Checklist\nold".to_string()),
            },
            IssueComment {
                id: 43,
                user: Some(User { login: "author".to_string() }),
                body: Some("Thanks!".to_string()),
            },
        ];

        let found = find_checklist_comment(&comments, "reviewer").map(|c| c.id);

        assert_eq!(found, Some(41));
        assert!(logs_contain("id=41"));
        assert!(logs_contain("id=43"));
    }
}
