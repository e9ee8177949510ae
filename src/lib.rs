pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::GitHubClient;
pub use config::{event::PullRequestEvent, ActionConfig};
pub use crate::core::labeler::LabelEngine;
pub use domain::model::{LabelMode, LabelRoster, LabelSet, RepositoryReference};
pub use utils::error::{ErrorKind, LabelerError, Result};
