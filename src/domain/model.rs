use std::fmt;
use std::str::FromStr;

/// Untyped document tree decoded from the fetched roster file.
///
/// Mapping entries keep the order in which they appear in the source
/// document.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigNode {
    Mapping(Vec<(String, ConfigNode)>),
    Sequence(Vec<ConfigNode>),
    String(String),
    Number(String),
    Bool(bool),
    Null,
}

impl ConfigNode {
    pub fn get(&self, key: &str) -> Option<&ConfigNode> {
        match self {
            ConfigNode::Mapping(entries) => entries
                .iter()
                .find(|(name, _)| name == key)
                .map(|(_, value)| value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigNode::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ConfigNode::Mapping(_) => "mapping",
            ConfigNode::Sequence(_) => "sequence",
            ConfigNode::String(_) => "string",
            ConfigNode::Number(_) => "number",
            ConfigNode::Bool(_) => "boolean",
            ConfigNode::Null => "null",
        }
    }
}

impl From<serde_yaml::Value> for ConfigNode {
    fn from(value: serde_yaml::Value) -> Self {
        use serde_yaml::Value;

        match value {
            Value::Null => ConfigNode::Null,
            Value::Bool(b) => ConfigNode::Bool(b),
            Value::Number(n) => ConfigNode::Number(n.to_string()),
            Value::String(s) => ConfigNode::String(s),
            Value::Sequence(items) => {
                ConfigNode::Sequence(items.into_iter().map(ConfigNode::from).collect())
            }
            Value::Mapping(mapping) => ConfigNode::Mapping(
                mapping
                    .into_iter()
                    .map(|(key, value)| (key_to_string(key), ConfigNode::from(value)))
                    .collect(),
            ),
            Value::Tagged(tagged) => ConfigNode::from(tagged.value),
        }
    }
}

fn key_to_string(key: serde_yaml::Value) -> String {
    use serde_yaml::Value;

    match key {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        other => serde_yaml::to_string(&other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}

/// Label -> member identities, in team insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelRoster {
    entries: Vec<(String, Vec<String>)>,
}

impl LabelRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `label`, replacing the members of an existing entry with the
    /// same label while keeping that entry's position.
    pub fn insert(&mut self, label: String, members: Vec<String>) {
        match self.entries.iter_mut().find(|(existing, _)| *existing == label) {
            Some(entry) => entry.1 = members,
            None => self.entries.push((label, members)),
        }
    }

    pub fn get(&self, label: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == label)
            .map(|(_, members)| members.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(label, members)| (label.as_str(), members.as_slice()))
    }

    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|(label, _)| label.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The labels handed to the label-apply collaborator; never more than one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelSet(Vec<String>);

impl LabelSet {
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn single(label: impl Into<String>) -> Self {
        Self(vec![label.into()])
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryReference {
    pub owner: String,
    pub repo: String,
}

impl fmt::Display for RepositoryReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// What the triggering pull request event has to provide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestContext {
    pub number: u64,
    pub author: String,
}

/// Result of the document-fetch collaborator before any decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchedContent {
    File { content: String, encoding: String },
    Directory { entries: usize },
    Other { kind: String },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LabelMode {
    #[default]
    Roster,
    Parity,
}

impl FromStr for LabelMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            // unset action inputs arrive as empty strings
            "" | "roster" => Ok(LabelMode::Roster),
            "parity" => Ok(LabelMode::Parity),
            other => Err(format!(
                "unknown label mode '{}', expected 'roster' or 'parity'",
                other
            )),
        }
    }
}

impl fmt::Display for LabelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabelMode::Roster => f.write_str("roster"),
            LabelMode::Parity => f.write_str("parity"),
        }
    }
}
