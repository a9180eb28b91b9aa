use std::collections::HashMap;

use serde_json::Value;

use crate::error::ConvertError;
use crate::models::{Block, BlockRecord, BlockRef, fields};

/// Structural-role labels of records that carry app scaffolding (sidebars,
/// templates, slots) rather than user content. Matching records are dropped.
pub const SCAFFOLD_LABELS: &[&str] = &[
    "Document Sidebar",
    "List Item",
    "Daily Document",
    "Quick Add",
    "Card Item",
    "Custom CSS",
    "Source List",
    "Suspend Cards",
    "Link",
    "Template Slot",
    "~",
];

/// Top-level export field holding the record list.
pub const DOCS_FIELD: &str = "docs";

/// Id-addressed arena of every retained block.
///
/// Blocks keep import order; [`BlockRef`] handles index into that order.
#[derive(Debug, Default)]
pub struct BlockIndex {
    pub(crate) blocks: Vec<Block>,
    by_id: HashMap<String, BlockRef>,
}

impl BlockIndex {
    /// Build the index from a whole export (`{"docs": [...]}`).
    pub fn from_export(export: Value) -> Result<Self, ConvertError> {
        let Value::Object(mut export) = export else {
            return Err(ConvertError::InvalidExport(
                "top level is not an object".to_string(),
            ));
        };
        match export.remove(DOCS_FIELD) {
            Some(Value::Array(records)) => Self::from_records(records),
            Some(_) => Err(ConvertError::InvalidExport(format!(
                "`{DOCS_FIELD}` is not a list"
            ))),
            None => Err(ConvertError::InvalidExport(format!(
                "`{DOCS_FIELD}` is missing"
            ))),
        }
    }

    /// Build the index from the raw record list.
    pub fn from_records(records: Vec<Value>) -> Result<Self, ConvertError> {
        let mut index = Self::default();
        let mut dropped = 0usize;

        for (position, record) in records.into_iter().enumerate() {
            let Value::Object(record) = record else {
                return Err(ConvertError::InvalidRecord { position });
            };
            if is_scaffold(&record) {
                dropped += 1;
                continue;
            }
            let Some(id) = record.get(fields::ID).and_then(Value::as_str) else {
                return Err(ConvertError::MissingId { position });
            };
            let id = id.to_string();
            let record = BlockRecord::from_raw(&id, record)?;
            index.insert(Block::new(id, record));
        }

        log::info!(
            "Indexed {} blocks ({dropped} scaffold records dropped)",
            index.len()
        );
        Ok(index)
    }

    fn insert(&mut self, block: Block) {
        match self.by_id.get(&block.id) {
            Some(&existing) => {
                log::warn!("Duplicate block id {}; keeping the later record", block.id);
                self.blocks[existing.0] = block;
            }
            None => {
                let handle = BlockRef(self.blocks.len());
                self.by_id.insert(block.id.clone(), handle);
                self.blocks.push(block);
            }
        }
    }

    pub fn lookup(&self, id: &str) -> Option<BlockRef> {
        self.by_id.get(id).copied()
    }

    pub fn get(&self, id: &str) -> Option<&Block> {
        self.lookup(id).map(|handle| self.block(handle))
    }

    pub fn block(&self, handle: BlockRef) -> &Block {
        &self.blocks[handle.0]
    }

    /// Blocks in import order, paired with their handles.
    pub fn iter(&self) -> impl Iterator<Item = (BlockRef, &Block)> {
        self.blocks
            .iter()
            .enumerate()
            .map(|(slot, block)| (BlockRef(slot), block))
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

fn is_scaffold(record: &serde_json::Map<String, Value>) -> bool {
    record
        .get(fields::KEY)
        .and_then(Value::as_array)
        .and_then(|cells| cells.first())
        .and_then(Value::as_str)
        .is_some_and(|label| SCAFFOLD_LABELS.contains(&label))
}
