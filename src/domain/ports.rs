use crate::domain::model::{FetchedContent, LabelMode, LabelSet, RepositoryReference};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Document-fetch collaborator.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    async fn fetch_document(
        &self,
        reference: &RepositoryReference,
        path: &str,
    ) -> Result<FetchedContent>;
}

/// Label-apply collaborator.
#[async_trait]
pub trait LabelSink: Send + Sync {
    async fn add_labels(
        &self,
        reference: &RepositoryReference,
        issue_number: u64,
        labels: &LabelSet,
    ) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn label_mode(&self) -> LabelMode;
    /// `owner/repo` of the repository the run was triggered in.
    fn repository(&self) -> &str;
    fn teams_configuration_repo(&self) -> Option<&str>;
    fn teams_configuration_path(&self) -> Option<&str>;
}
