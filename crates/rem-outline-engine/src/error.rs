use std::path::PathBuf;

use crate::content::CellError;

/// Fatal conversion failures. Any of these aborts the whole run.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("Invalid export: {0}")]
    InvalidExport(String),
    #[error("Record #{position} is not an object")]
    InvalidRecord { position: usize },
    #[error("Record #{position} has no string `_id` field")]
    MissingId { position: usize },
    #[error("Block {block}: field `{field}` {reason}")]
    InvalidField {
        block: String,
        field: &'static str,
        reason: String,
    },
    #[error("Block {block}: parent {parent} does not exist")]
    UnknownParent { block: String, parent: String },
    #[error("Block {block}: failed to parse `{field}` cell: {source}")]
    InvalidCell {
        block: String,
        field: &'static str,
        source: CellError,
    },
    #[error("Export file not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ConvertError {
    pub(crate) fn invalid_field(
        block: &str,
        field: &'static str,
        reason: impl Into<String>,
    ) -> Self {
        ConvertError::InvalidField {
            block: block.to_string(),
            field,
            reason: reason.into(),
        }
    }
}
