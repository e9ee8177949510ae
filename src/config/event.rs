use crate::domain::model::PullRequestContext;
use crate::utils::error::{LabelerError, Result};
use serde::Deserialize;
use std::path::Path;

/// The parts of a `pull_request` webhook payload the labeler reads.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PullRequestEvent {
    pub pull_request: Option<PullRequestPayload>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PullRequestPayload {
    pub number: Option<u64>,
    pub user: Option<UserPayload>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserPayload {
    pub login: Option<String>,
}

impl PullRequestEvent {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn context(&self) -> Result<PullRequestContext> {
        let pull_request = self.pull_request.as_ref().ok_or_else(|| {
            LabelerError::MissingContextError {
                message: "event payload has no pull_request".to_string(),
            }
        })?;

        let number = pull_request
            .number
            .ok_or_else(|| LabelerError::MissingContextError {
                message: "could not get pull request number from context".to_string(),
            })?;

        let author = pull_request
            .user
            .as_ref()
            .and_then(|user| user.login.as_deref())
            .filter(|login| !login.is_empty())
            .ok_or_else(|| LabelerError::MissingContextError {
                message: "could not get pull request author from context".to_string(),
            })?;

        Ok(PullRequestContext {
            number,
            author: author.to_string(),
        })
    }
}

/// Reads the payload at `GITHUB_EVENT_PATH`. With no path the event is
/// empty, which fails later as missing context.
pub fn load_event(path: Option<&str>) -> Result<PullRequestEvent> {
    match path {
        Some(path) if !path.is_empty() => {
            tracing::debug!("Reading event payload from {}", path);
            let json = std::fs::read_to_string(Path::new(path))?;
            PullRequestEvent::from_json(&json)
        }
        _ => {
            tracing::warn!("No event payload path provided");
            Ok(PullRequestEvent::default())
        }
    }
}
