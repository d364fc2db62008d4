use thiserror::Error;
use tracing::debug;
use ureq::http::header::CONTENT_LENGTH;
use ureq::Agent;

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("'{url}' is not an http(s) URL")]
    InvalidUrl { url: String },

    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("failed to reach {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: ureq::Error,
    },
}

/// Reachability check for links given in the PR description.
pub trait LinkProbe {
    /// Content length reported for `url`; negative when the server does not say.
    fn content_length(&self, url: &str) -> Result<i64, ProbeError>;
}

pub struct HttpLinkProbe {
    agent: Agent,
}

impl HttpLinkProbe {
    pub fn new() -> Self {
        Self {
            agent: Agent::new_with_defaults(),
        }
    }
}

impl Default for HttpLinkProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl LinkProbe for HttpLinkProbe {
    fn content_length(&self, url: &str) -> Result<i64, ProbeError> {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ProbeError::InvalidUrl {
                url: url.to_string(),
            });
        }

        let response = self.agent.get(url).call().map_err(|source| match source {
            ureq::Error::StatusCode(status) => ProbeError::Status {
                url: url.to_string(),
                status,
            },
            source => ProbeError::Transport {
                url: url.to_string(),
                source,
            },
        })?;

        // The body is dropped unread; only the headers matter.
        let length = response
            .headers()
            .get(CONTENT_LENGTH)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.trim().parse::<i64>().ok())
            .unwrap_or(-1);
        debug!(url, length, "probed link");

        Ok(length)
    }
}
