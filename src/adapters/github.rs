use crate::core::{DocumentSource, LabelSink};
use crate::domain::model::{FetchedContent, LabelSet, RepositoryReference};
use crate::utils::error::{LabelerError, Result};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::{Deserialize, Serialize};

const USER_AGENT: &str = concat!("roster-labeler/", env!("CARGO_PKG_VERSION"));

/// GitHub REST client bound to one token.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    client: Client,
    api_url: String,
    token: String,
}

/// Response of `GET /repos/{owner}/{repo}/contents/{path}` for a single item.
#[derive(Debug, Deserialize)]
struct ContentResponse {
    #[serde(rename = "type")]
    kind: String,
    content: Option<String>,
    encoding: Option<String>,
}

#[derive(Debug, Serialize)]
struct AddLabelsRequest<'a> {
    labels: &'a [String],
}

impl GitHubClient {
    pub fn new(api_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_url: api_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        }
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("Accept", "application/vnd.github+json")
            .header("User-Agent", USER_AGENT)
            .header("Authorization", format!("Bearer {}", self.token))
    }

    async fn check_status(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(LabelerError::ApiStatusError {
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl DocumentSource for GitHubClient {
    async fn fetch_document(
        &self,
        reference: &RepositoryReference,
        path: &str,
    ) -> Result<FetchedContent> {
        let url = format!(
            "{}/repos/{}/{}/contents/{}",
            self.api_url,
            reference.owner,
            reference.repo,
            path.trim_start_matches('/')
        );

        tracing::debug!("Making API request to: {}", url);
        let response = self.authorized(self.client.get(&url)).send().await?;
        tracing::debug!("API response status: {}", response.status());

        let json: serde_json::Value = Self::check_status(response).await?.json().await?;

        if let serde_json::Value::Array(entries) = json {
            return Ok(FetchedContent::Directory {
                entries: entries.len(),
            });
        }

        let item: ContentResponse = serde_json::from_value(json)?;
        if item.kind != "file" {
            return Ok(FetchedContent::Other { kind: item.kind });
        }

        Ok(FetchedContent::File {
            content: item.content.unwrap_or_default(),
            encoding: item.encoding.unwrap_or_default(),
        })
    }
}

#[async_trait]
impl LabelSink for GitHubClient {
    async fn add_labels(
        &self,
        reference: &RepositoryReference,
        issue_number: u64,
        labels: &LabelSet,
    ) -> Result<()> {
        let url = format!(
            "{}/repos/{}/{}/issues/{}/labels",
            self.api_url, reference.owner, reference.repo, issue_number
        );

        tracing::debug!("Adding labels {:?} via {}", labels.as_slice(), url);
        let body = AddLabelsRequest {
            labels: labels.as_slice(),
        };
        let response = self
            .authorized(self.client.post(&url))
            .json(&body)
            .send()
            .await?;

        Self::check_status(response).await?;
        Ok(())
    }
}
