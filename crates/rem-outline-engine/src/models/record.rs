use serde_json::{Map, Value};

use crate::error::ConvertError;

/// Raw export field names.
pub mod fields {
    pub const ID: &str = "_id";
    pub const KEY: &str = "key";
    pub const VALUE: &str = "value";
    pub const PARENT: &str = "parent";
    pub const SUB_BLOCKS: &str = "subBlocks";
    pub const REFERENCES: &str = "references";
    pub const DOCUMENT_MARKER: &str = "docUpdated";
}

/// Strongly typed view of one exported record.
///
/// Built once per indexed block; the rest of the pipeline reads these fields
/// instead of probing the raw map. `raw` keeps every other field for the few
/// lookups that descend into record-specific nesting (linked media).
#[derive(Debug, Clone, PartialEq)]
pub struct BlockRecord {
    /// Cells making up the block's heading.
    pub key: Vec<Value>,
    /// Cells making up the block's body. Empty when absent.
    pub value: Vec<Value>,
    /// Parent id; `None` marks a root.
    pub parent: Option<String>,
    /// Child ids in export order (newest first).
    pub sub_blocks: Vec<String>,
    /// Inbound references from other blocks.
    pub references: Vec<Value>,
    /// Whether this block starts its own page.
    pub is_document: bool,
    pub raw: Map<String, Value>,
}

impl BlockRecord {
    /// Validate and convert a raw record. `id` has already been extracted.
    pub fn from_raw(id: &str, mut raw: Map<String, Value>) -> Result<Self, ConvertError> {
        raw.remove(fields::ID);

        let key = match raw.remove(fields::KEY) {
            Some(Value::Array(cells)) => cells,
            Some(other) => {
                return Err(ConvertError::invalid_field(
                    id,
                    fields::KEY,
                    format!("is not a list: {other}"),
                ));
            }
            None => return Err(ConvertError::invalid_field(id, fields::KEY, "is missing")),
        };

        let value = match raw.remove(fields::VALUE) {
            Some(Value::Array(cells)) => cells,
            _ => Vec::new(),
        };

        let parent = match raw.remove(fields::PARENT) {
            None | Some(Value::Null) => None,
            Some(Value::String(parent)) => Some(parent),
            Some(other) => {
                return Err(ConvertError::invalid_field(
                    id,
                    fields::PARENT,
                    format!("is neither null nor an id: {other}"),
                ));
            }
        };

        let sub_blocks = match raw.remove(fields::SUB_BLOCKS) {
            Some(Value::Array(ids)) => ids
                .into_iter()
                .map(|child| match child {
                    Value::String(child) => Ok(child),
                    other => Err(ConvertError::invalid_field(
                        id,
                        fields::SUB_BLOCKS,
                        format!("contains a non-string id: {other}"),
                    )),
                })
                .collect::<Result<Vec<_>, _>>()?,
            Some(other) => {
                return Err(ConvertError::invalid_field(
                    id,
                    fields::SUB_BLOCKS,
                    format!("is not a list: {other}"),
                ));
            }
            None => {
                return Err(ConvertError::invalid_field(
                    id,
                    fields::SUB_BLOCKS,
                    "is missing",
                ));
            }
        };

        let references = match raw.remove(fields::REFERENCES) {
            Some(Value::Array(references)) => references,
            _ => Vec::new(),
        };

        let is_document = raw.contains_key(fields::DOCUMENT_MARKER);

        Ok(Self {
            key,
            value,
            parent,
            sub_blocks,
            references,
            is_document,
            raw,
        })
    }

    /// Follow a chain of nested object fields and return the string at the end.
    ///
    /// Returns the name of the first missing step on failure.
    pub fn nested_str<'a>(&'a self, path: &[&'static str]) -> Result<&'a str, &'static str> {
        let Some((last, objects)) = path.split_last() else {
            return Err("");
        };
        let mut current = &self.raw;
        for step in objects {
            current = current
                .get(*step)
                .and_then(Value::as_object)
                .ok_or(*step)?;
        }
        current.get(*last).and_then(Value::as_str).ok_or(*last)
    }
}
