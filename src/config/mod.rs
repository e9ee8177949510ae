pub mod event;

use crate::core::ConfigProvider;
use crate::domain::model::LabelMode;
use crate::utils::error::Result;
use crate::utils::validation::*;
use clap::Parser;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Action inputs. Every flag can also come from the environment GitHub
/// Actions provides to the step.
#[derive(Debug, Clone, Parser)]
#[command(name = "roster-labeler")]
#[command(about = "Label a pull request with its author's team")]
pub struct ActionConfig {
    #[arg(long, env = "INPUT_REPO_TOKEN", hide_env_values = true)]
    pub repo_token: String,

    #[arg(long, env = "INPUT_EXTERNAL_REPO_TOKEN", hide_env_values = true)]
    pub external_repo_token: Option<String>,

    #[arg(long, env = "INPUT_TEAMS_CONFIGURATION_REPO")]
    pub teams_configuration_repo: Option<String>,

    #[arg(long, env = "INPUT_TEAMS_CONFIGURATION_PATH")]
    pub teams_configuration_path: Option<String>,

    #[arg(long, env = "INPUT_LABEL_MODE", default_value = "roster")]
    pub label_mode: LabelMode,

    #[arg(long, env = "GITHUB_REPOSITORY")]
    pub repository: String,

    #[arg(long, env = "GITHUB_EVENT_PATH")]
    pub event_path: Option<String>,

    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ActionConfig {
    /// Token used to read the roster; the repository token when no external
    /// one is set.
    pub fn roster_token(&self) -> &str {
        self.external_repo_token
            .as_deref()
            .filter(|token| !token.trim().is_empty())
            .unwrap_or(&self.repo_token)
    }
}

impl ConfigProvider for ActionConfig {
    fn label_mode(&self) -> LabelMode {
        self.label_mode
    }

    fn repository(&self) -> &str {
        &self.repository
    }

    fn teams_configuration_repo(&self) -> Option<&str> {
        self.teams_configuration_repo
            .as_deref()
            .filter(|value| !value.is_empty())
    }

    fn teams_configuration_path(&self) -> Option<&str> {
        self.teams_configuration_path
            .as_deref()
            .filter(|value| !value.is_empty())
    }
}

impl Validate for ActionConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("repo_token", &self.repo_token)?;
        validate_repository_slug("repository", &self.repository)?;
        validate_url("api_url", &self.api_url)?;

        if self.label_mode == LabelMode::Roster {
            let repo = self.teams_configuration_repo();
            let repo = validate_required_field("teams_configuration_repo", &repo)?;
            validate_non_empty_string("teams_configuration_repo", repo)?;

            let path = self.teams_configuration_path();
            let path = validate_required_field("teams_configuration_path", &path)?;
            validate_path("teams_configuration_path", path)?;
        } else if self.teams_configuration_repo().is_some() {
            tracing::warn!("teams_configuration_repo is ignored in parity mode");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::LabelerError;

    fn base_config() -> ActionConfig {
        ActionConfig {
            repo_token: "ghs_repo".to_string(),
            external_repo_token: None,
            teams_configuration_repo: Some("people".to_string()),
            teams_configuration_path: Some(".github/teams.yml".to_string()),
            label_mode: LabelMode::Roster,
            repository: "acme/widgets".to_string(),
            event_path: None,
            api_url: DEFAULT_API_URL.to_string(),
            verbose: false,
        }
    }

    #[test]
    fn test_valid_config() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn test_roster_token_fallback() {
        let mut config = base_config();
        assert_eq!(config.roster_token(), "ghs_repo");

        config.external_repo_token = Some(String::new());
        assert_eq!(config.roster_token(), "ghs_repo");

        config.external_repo_token = Some("ghp_external".to_string());
        assert_eq!(config.roster_token(), "ghp_external");
    }

    #[test]
    fn test_roster_mode_requires_inputs() {
        let mut config = base_config();
        config.teams_configuration_path = None;
        assert!(matches!(
            config.validate(),
            Err(LabelerError::MissingConfigError { field }) if field == "teams_configuration_path"
        ));

        let mut config = base_config();
        config.teams_configuration_repo = Some(String::new());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parity_mode_needs_no_roster() {
        let mut config = base_config();
        config.label_mode = LabelMode::Parity;
        config.teams_configuration_repo = None;
        config.teams_configuration_path = None;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_values() {
        let mut config = base_config();
        config.repo_token = "  ".to_string();
        assert!(config.validate().is_err());

        let mut config = base_config();
        config.repository = "widgets".to_string();
        assert!(config.validate().is_err());

        let mut config = base_config();
        config.api_url = "ftp://github.example.com".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_api_url_with_trailing_slash() {
        let mut config = base_config();
        config.api_url = "https://github.example.com/api/v3/".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_label_mode_input_defaults_to_roster() {
        std::env::set_var("INPUT_LABEL_MODE", "");
        std::env::set_var("INPUT_REPO_TOKEN", "t");
        std::env::set_var("GITHUB_REPOSITORY", "acme/widgets");

        let parsed = ActionConfig::try_parse_from(["roster-labeler"]);

        std::env::remove_var("INPUT_LABEL_MODE");
        std::env::remove_var("INPUT_REPO_TOKEN");
        std::env::remove_var("GITHUB_REPOSITORY");

        let config = parsed.unwrap();
        assert_eq!(config.label_mode, LabelMode::Roster);
        assert_eq!(config.repository, "acme/widgets");
    }

    #[test]
    fn test_parse_from_args() {
        let config = ActionConfig::try_parse_from([
            "roster-labeler",
            "--repo-token",
            "t",
            "--repository",
            "acme/widgets",
            "--label-mode",
            "parity",
        ])
        .unwrap();

        assert_eq!(config.label_mode, LabelMode::Parity);
        assert_eq!(config.repository, "acme/widgets");
        assert!(ActionConfig::try_parse_from(["roster-labeler", "--label-mode", "both"]).is_err());
    }
}
