//! Minimal GitHub REST client for the data a review needs.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use ureq::Agent;

const PER_PAGE: usize = 100;
const USER_AGENT: &str = concat!("spec-review/", env!("CARGO_PKG_VERSION"));
const ACCEPT: &str = "application/vnd.github+json";

#[derive(Debug, Error)]
pub enum HostError {
    #[error("GitHub request {method} {url} failed: {source}")]
    Request {
        method: &'static str,
        url: String,
        #[source]
        source: ureq::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct User {
    pub login: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PullRequest {
    pub number: u64,
    pub title: String,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub assignee: Option<User>,
    #[serde(default)]
    pub changed_files: u64,
    #[serde(default)]
    pub review_comments: u64,
    #[serde(default)]
    pub issue_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PullRequestFile {
    pub filename: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub raw_url: Option<String>,
    #[serde(default)]
    pub contents_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IssueComment {
    pub id: u64,
    /// `None` for comments by deleted accounts.
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub body: Option<String>,
}

#[derive(Serialize)]
struct CommentPayload<'a> {
    body: &'a str,
}

/// The pull request side of a review: reading a PR and updating a comment on it.
pub trait PullRequestHost {
    fn pull_request(&self, number: u64) -> Result<PullRequest, HostError>;
    fn files(&self, number: u64) -> Result<Vec<PullRequestFile>, HostError>;
    fn comments(&self, number: u64) -> Result<Vec<IssueComment>, HostError>;
    fn update_comment(&self, comment_id: u64, body: &str) -> Result<(), HostError>;
}

pub struct GitHubClient {
    agent: Agent,
    api_url: String,
    repository: String,
    token: String,
}

impl GitHubClient {
    /// `repository` is `owner/name`.
    pub fn new(api_url: &str, repository: &str, token: &str) -> Self {
        Self {
            agent: Agent::new_with_defaults(),
            api_url: api_url.trim_end_matches('/').to_string(),
            repository: repository.to_string(),
            token: token.to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/repos/{}/{}", self.api_url, self.repository, path)
    }

    fn get<T: DeserializeOwned>(&self, url: String) -> Result<T, HostError> {
        debug!(%url, "GET");
        let result = self
            .agent
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("User-Agent", USER_AGENT)
            .header("Accept", ACCEPT)
            .call()
            .and_then(|mut response| response.body_mut().read_json::<T>());

        result.map_err(|source| HostError::Request {
            method: "GET",
            url,
            source,
        })
    }

    fn get_all<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, HostError> {
        let mut items = Vec::new();
        for page in 1.. {
            let batch: Vec<T> =
                self.get(format!("{}?per_page={PER_PAGE}&page={page}", self.url(path)))?;
            let last_page = batch.len() < PER_PAGE;
            items.extend(batch);
            if last_page {
                break;
            }
        }
        Ok(items)
    }
}

impl PullRequestHost for GitHubClient {
    fn pull_request(&self, number: u64) -> Result<PullRequest, HostError> {
        self.get(self.url(&format!("pulls/{number}")))
    }

    fn files(&self, number: u64) -> Result<Vec<PullRequestFile>, HostError> {
        self.get_all(&format!("pulls/{number}/files"))
    }

    fn comments(&self, number: u64) -> Result<Vec<IssueComment>, HostError> {
        self.get_all(&format!("issues/{number}/comments"))
    }

    fn update_comment(&self, comment_id: u64, body: &str) -> Result<(), HostError> {
        let url = self.url(&format!("issues/comments/{comment_id}"));
        debug!(%url, "PATCH");
        let result = self
            .agent
            .patch(&url)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("User-Agent", USER_AGENT)
            .header("Accept", ACCEPT)
            .send_json(CommentPayload { body });

        result.map(|_| ()).map_err(|source| HostError::Request {
            method: "PATCH",
            url,
            source,
        })
    }
}
