use crate::domain::model::RepositoryReference;
use crate::utils::error::{LabelerError, Result};

/// Turns `owner/repo` or a bare `repo` into a full reference. A bare name
/// is owned by `current_owner`.
pub fn resolve_repository(input: &str, current_owner: &str) -> Result<RepositoryReference> {
    if input.is_empty() {
        return Err(LabelerError::MalformedInputError {
            message: "repository reference cannot be empty".to_string(),
        });
    }

    match input.split_once('/') {
        Some((owner, repo)) => Ok(RepositoryReference {
            owner: owner.to_string(),
            repo: repo.to_string(),
        }),
        None => Ok(RepositoryReference {
            owner: current_owner.to_string(),
            repo: input.to_string(),
        }),
    }
}

/// Parses the `owner/repo` slug of the invoking repository.
pub fn current_repository(slug: &str) -> Result<RepositoryReference> {
    match slug.split_once('/') {
        Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() && !repo.contains('/') => {
            Ok(RepositoryReference {
                owner: owner.to_string(),
                repo: repo.to_string(),
            })
        }
        _ => Err(LabelerError::MalformedInputError {
            message: format!("invalid repository slug '{}', expected owner/repo", slug),
        }),
    }
}
