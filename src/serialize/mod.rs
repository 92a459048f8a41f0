use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::model::Config;

/// Suggested file name for exported documents.
pub const EXPORT_FILE_NAME: &str = "ui-config.json";

pub type SerializeResult<T> = std::result::Result<T, SerializeError>;

#[derive(Debug, Error)]
pub enum SerializeError {
    #[error("document is not valid JSON")]
    InvalidFormat(#[source] serde_json::Error),
    #[error("`cfg` is not a complete style configuration")]
    InvalidConfig(#[source] serde_json::Error),
    #[error("failed to encode style configuration")]
    Encode(#[source] serde_json::Error),
}

#[derive(Serialize)]
struct ExportDocument<'a> {
    cfg: &'a Config,
    theme: &'a str,
}

/// Fields recovered from an imported document. Absent fields are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportedDocument {
    pub config: Option<Config>,
    pub theme: Option<String>,
}

pub fn export(config: &Config, theme: &str) -> SerializeResult<String> {
    serde_json::to_string_pretty(&ExportDocument { cfg: config, theme })
        .map_err(SerializeError::Encode)
}

/// Parses an exported document.
///
/// Non-object documents, `null` fields and non-string themes count as
/// absent. A present `cfg` must decode into a complete [`Config`]. Whether
/// the theme name is known is left to the caller.
pub fn import(text: &str) -> SerializeResult<ImportedDocument> {
    let raw: Value = serde_json::from_str(text).map_err(SerializeError::InvalidFormat)?;
    let Value::Object(mut fields) = raw else {
        tracing::debug!("imported document is not an object; nothing to apply");
        return Ok(ImportedDocument::default());
    };

    let config: Option<Config> = match fields.remove("cfg") {
        None | Some(Value::Null) => None,
        Some(cfg) => Some(serde_json::from_value(cfg).map_err(SerializeError::InvalidConfig)?),
    };
    let theme = match fields.remove("theme") {
        Some(Value::String(name)) if !name.is_empty() => Some(name),
        _ => None,
    };

    Ok(ImportedDocument { config, theme })
}
