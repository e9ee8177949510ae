use crate::config::event::PullRequestEvent;
use crate::core::document::{decode_content, parse_document};
use crate::core::repository::{current_repository, resolve_repository};
use crate::core::resolver::{labels_for, parity_label, pick_label};
use crate::core::roster::parse_roster;
use crate::core::{ConfigProvider, DocumentSource, LabelSink};
use crate::domain::model::{LabelMode, LabelSet, PullRequestContext, RepositoryReference};
use crate::utils::error::{LabelerError, Result};

/// Runs one labeling pass for a pull request event: fetch the roster, find
/// the author's label and apply it.
pub struct LabelEngine<S: DocumentSource, L: LabelSink, C: ConfigProvider> {
    source: S,
    sink: L,
    config: C,
}

impl<S: DocumentSource, L: LabelSink, C: ConfigProvider> LabelEngine<S, L, C> {
    pub fn new(source: S, sink: L, config: C) -> Self {
        Self {
            source,
            sink,
            config,
        }
    }

    /// Returns the labels that were applied, which may be none.
    pub async fn run(&self, event: &PullRequestEvent) -> Result<LabelSet> {
        let context = event.context()?;
        let current = current_repository(self.config.repository())?;

        tracing::info!(
            pr = context.number,
            author = %context.author,
            mode = %self.config.label_mode(),
            "Labeling pull request"
        );

        let labels = match self.config.label_mode() {
            LabelMode::Roster => self.roster_labels(&context, &current).await?,
            LabelMode::Parity => parity_label(context.number),
        };

        tracing::debug!("labels to add: {:?}", labels.as_slice());

        if labels.is_empty() {
            tracing::info!(author = %context.author, "Author is not on any team, no label applied");
            return Ok(labels);
        }

        self.sink.add_labels(&current, context.number, &labels).await?;
        tracing::info!("Applied labels {:?} to #{}", labels.as_slice(), context.number);

        Ok(labels)
    }

    async fn roster_labels(
        &self,
        context: &PullRequestContext,
        current: &RepositoryReference,
    ) -> Result<LabelSet> {
        let repo_input = self.config.teams_configuration_repo().ok_or_else(|| {
            LabelerError::MissingConfigError {
                field: "teams_configuration_repo".to_string(),
            }
        })?;
        let path = self.config.teams_configuration_path().ok_or_else(|| {
            LabelerError::MissingConfigError {
                field: "teams_configuration_path".to_string(),
            }
        })?;

        let roster_repo = resolve_repository(repo_input, &current.owner)?;
        tracing::info!("Fetching team roster from {}:{}", roster_repo, path);

        let fetched = self.source.fetch_document(&roster_repo, path).await?;
        let text = decode_content(fetched)?;
        let document = parse_document(&text)?;
        let roster = parse_roster(&document)?;
        tracing::debug!("Roster labels: {:?}", roster.labels());

        let matches = labels_for(&roster, &context.author);
        if matches.len() > 1 {
            tracing::debug!(
                "{} is on several teams {:?}, using the first",
                context.author,
                matches
            );
        }

        Ok(pick_label(&matches))
    }
}
