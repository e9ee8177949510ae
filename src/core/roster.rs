use crate::domain::model::{ConfigNode, LabelRoster};
use crate::utils::error::{LabelerError, Result};

/// Builds the label roster from a decoded team configuration document.
///
/// The root must map team names to team metadata. Each team needs a
/// `members` sequence whose elements carry a string `github` identity. The
/// label is the team's `shortName` (or `short_name`) when that is a string,
/// otherwise the team name. Teams are inserted in document order, so when
/// two teams share a label the later one wins. Any malformed entry aborts
/// the whole parse.
pub fn parse_roster(root: &ConfigNode) -> Result<LabelRoster> {
    let teams = match root {
        ConfigNode::Mapping(teams) => teams,
        _ => {
            return Err(LabelerError::schema(
                "expected object mapping team names to team metadata",
            ))
        }
    };

    let mut roster = LabelRoster::new();

    for (team_name, team_data) in teams {
        let members = match team_data.get("members") {
            Some(ConfigNode::Sequence(members)) => members,
            Some(other) => {
                return Err(LabelerError::schema(format!(
                    "members of team {} must be a sequence, found {}",
                    team_name,
                    other.kind()
                )))
            }
            None => {
                return Err(LabelerError::schema(format!(
                    "team {} has no members sequence",
                    team_name
                )))
            }
        };

        let label = team_label(team_name, team_data);

        let identities = members
            .iter()
            .map(|member| {
                member
                    .get("github")
                    .and_then(ConfigNode::as_str)
                    .map(str::to_string)
                    .ok_or_else(|| LabelerError::ValidationError {
                        message: format!("invalid member data in team {}", team_name),
                    })
            })
            .collect::<Result<Vec<String>>>()?;

        tracing::debug!(team = %team_name, label = %label, members = identities.len(), "Parsed team");
        roster.insert(label, identities);
    }

    Ok(roster)
}

/// The first string-valued `shortName` or `short_name`, else the team name.
fn team_label(team_name: &str, team_data: &ConfigNode) -> String {
    ["shortName", "short_name"]
        .iter()
        .find_map(|key| team_data.get(key).and_then(ConfigNode::as_str))
        .unwrap_or(team_name)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::document::parse_document;
    use crate::utils::error::ErrorKind;

    fn roster_from(yaml: &str) -> Result<LabelRoster> {
        parse_roster(&parse_document(yaml).unwrap())
    }

    #[test]
    fn test_single_team() {
        let roster = roster_from("X:\n  members:\n    - github: alice\n").unwrap();
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.get("X").unwrap(), ["alice".to_string()]);
    }

    #[test]
    fn test_short_name_overrides_team_name() {
        let roster = roster_from(
            "X:\n  short_name: eng\n  members:\n    - github: bob\n",
        )
        .unwrap();
        assert_eq!(roster.labels(), vec!["eng"]);
        assert_eq!(roster.get("eng").unwrap(), ["bob".to_string()]);
        assert!(roster.get("X").is_none());
    }

    #[test]
    fn test_camel_case_short_name() {
        let roster = roster_from("Platform:\n  shortName: plat\n  members: []\n").unwrap();
        assert_eq!(roster.labels(), vec!["plat"]);
    }

    #[test]
    fn test_non_string_short_name_is_ignored() {
        let roster = roster_from("Platform:\n  shortName: 42\n  members: []\n").unwrap();
        assert_eq!(roster.labels(), vec!["Platform"]);
    }

    #[test]
    fn test_short_name_keys_precedence() {
        let roster = roster_from(
            "Platform:\n  shortName: plat\n  short_name: pf\n  members: []\n",
        )
        .unwrap();
        assert_eq!(roster.labels(), vec!["plat"]);

        let roster = roster_from(
            "Platform:\n  shortName: 42\n  short_name: pf\n  members: []\n",
        )
        .unwrap();
        assert_eq!(roster.labels(), vec!["pf"]);
    }

    #[test]
    fn test_duplicate_labels_last_write_wins() {
        let yaml = r#"
Backend:
  shortName: eng
  members:
    - github: alice
Design:
  members:
    - github: dana
Frontend:
  shortName: eng
  members:
    - github: bob
    - github: carol
"#;
        let roster = roster_from(yaml).unwrap();
        assert_eq!(roster.labels(), vec!["eng", "Design"]);
        assert_eq!(
            roster.get("eng").unwrap(),
            ["bob".to_string(), "carol".to_string()]
        );
    }

    #[test]
    fn test_member_order_is_preserved() {
        let roster =
            roster_from("core:\n  members:\n    - github: zed\n    - github: amy\n").unwrap();
        assert_eq!(
            roster.get("core").unwrap(),
            ["zed".to_string(), "amy".to_string()]
        );
    }

    #[test]
    fn test_empty_document_root_object() {
        let roster = parse_roster(&ConfigNode::Mapping(vec![])).unwrap();
        assert!(roster.is_empty());
    }

    #[test]
    fn test_empty_members_is_allowed() {
        let roster = roster_from("core:\n  members: []\n").unwrap();
        assert_eq!(roster.get("core").unwrap().len(), 0);
    }

    #[test]
    fn test_root_must_be_mapping() {
        let err = roster_from("- github: alice\n").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Schema);
        assert_eq!(
            err.to_string(),
            "expected object mapping team names to team metadata"
        );

        let err = roster_from("just a string").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Schema);
    }

    #[test]
    fn test_missing_members_is_schema_error() {
        let err = roster_from(
            "core:\n  members:\n    - github: alice\nempty:\n  shortName: e\n",
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Schema);
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn test_members_must_be_sequence() {
        let err = roster_from("core:\n  members:\n    alice: true\n").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Schema);
    }

    #[test]
    fn test_non_mapping_team_is_schema_error() {
        let err = roster_from("core: [alice]\n").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Schema);
    }

    #[test]
    fn test_member_without_github_is_validation_error() {
        let yaml = "ok:\n  members:\n    - github: alice\nbroken:\n  members:\n    - email: bob@example.com\n";
        let err = roster_from(yaml).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(err.to_string(), "invalid member data in team broken");
    }

    #[test]
    fn test_non_string_github_is_validation_error() {
        let err = roster_from("core:\n  members:\n    - github: 1234\n").unwrap_err();
        assert_eq!(err.to_string(), "invalid member data in team core");

        let err = roster_from("core:\n  members:\n    - alice\n").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_parse_is_deterministic() {
        let yaml = "b:\n  members:\n    - github: x\na:\n  members:\n    - github: y\n";
        assert_eq!(roster_from(yaml).unwrap(), roster_from(yaml).unwrap());
        assert_eq!(roster_from(yaml).unwrap().labels(), vec!["b", "a"]);
    }
}
