use crate::domain::model::{ConfigNode, FetchedContent};
use crate::utils::error::{LabelerError, Result};
use base64::Engine;

/// Extracts the text of a fetched file. Only base64-encoded single files are
/// accepted.
pub fn decode_content(fetched: FetchedContent) -> Result<String> {
    let (content, encoding) = match fetched {
        FetchedContent::File { content, encoding } => (content, encoding),
        FetchedContent::Directory { entries } => {
            return Err(LabelerError::shape(format!(
                "expected a single file but the path is a directory ({} entries)",
                entries
            )))
        }
        FetchedContent::Other { kind } => {
            return Err(LabelerError::shape(format!(
                "expected a single file but the path is a {}",
                kind
            )))
        }
    };

    if encoding != "base64" {
        return Err(LabelerError::shape(format!(
            "unsupported content encoding '{}'",
            encoding
        )));
    }

    // GitHub wraps base64 content at 60 columns
    let compact: String = content.chars().filter(|c| !c.is_whitespace()).collect();

    let bytes = base64::engine::general_purpose::STANDARD
        .decode(compact.as_bytes())
        .map_err(|e| LabelerError::shape(format!("content is not valid base64: {}", e)))?;

    String::from_utf8(bytes)
        .map_err(|e| LabelerError::shape(format!("content is not valid UTF-8: {}", e)))
}

pub fn parse_document(text: &str) -> Result<ConfigNode> {
    let value: serde_yaml::Value = serde_yaml::from_str(text)?;
    Ok(ConfigNode::from(value))
}
