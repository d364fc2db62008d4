use clap::Parser;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_REPOSITORY: &str = "jakartaredhat/specifications";
pub const DEFAULT_PR_NUMBER: u64 = 1;
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Check a specification PR against the spec review checklist and update
/// the assignee's checklist comment.
#[derive(Debug, Parser)]
#[command(name = "spec-review", version)]
pub struct Cli {
    /// Pull request to review
    #[arg(value_name = "PR_NUMBER", default_value_t = DEFAULT_PR_NUMBER)]
    pub pr_number: u64,

    /// Repository holding the PR, as owner/name
    #[arg(long, env = "SPEC_REVIEW_REPO", default_value = DEFAULT_REPOSITORY)]
    pub repo: String,

    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Access token for the GitHub API
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Print the report instead of updating the review comment
    #[arg(long)]
    pub dry_run: bool,

    /// Review a PR description from disk instead of GitHub (needs --files-file)
    #[arg(long, value_name = "PATH", requires = "files_file")]
    pub body_file: Option<PathBuf>,

    /// Changed file paths, one per line (needs --body-file)
    #[arg(long, value_name = "PATH", requires = "body_file")]
    pub files_file: Option<PathBuf>,

    #[arg(short, long)]
    pub verbose: bool,

    /// Log as newline-delimited JSON
    #[arg(long)]
    pub log_json: bool,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Specify the access token to use via the GITHUB_TOKEN environment variable")]
    MissingToken,

    #[error("repository '{0}' is not of the form owner/name")]
    InvalidRepository(String),
}

/// Access token; never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct Token(String);

impl Token {
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Token(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestTarget {
    pub number: u64,
    pub repository: String,
    pub api_url: String,
    pub token: Token,
    pub dry_run: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    PullRequest(PullRequestTarget),
    Local { body_file: PathBuf, files_file: PathBuf },
}

impl Mode {
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        if let (Some(body_file), Some(files_file)) = (&cli.body_file, &cli.files_file) {
            return Ok(Mode::Local {
                body_file: body_file.clone(),
                files_file: files_file.clone(),
            });
        }

        let token = cli
            .token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(ConfigError::MissingToken)?;

        let valid_repo = cli
            .repo
            .split_once('/')
            .is_some_and(|(owner, name)| !owner.is_empty() && !name.is_empty() && !name.contains('/'));
        if !valid_repo {
            return Err(ConfigError::InvalidRepository(cli.repo.clone()));
        }

        Ok(Mode::PullRequest(PullRequestTarget {
            number: cli.pr_number,
            repository: cli.repo.clone(),
            api_url: cli.api_url.clone(),
            token: Token(token.to_string()),
            dry_run: cli.dry_run,
        }))
    }
}
