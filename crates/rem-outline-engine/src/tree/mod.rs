//! # Tree resolution
//!
//! Turns the flat [`BlockIndex`] into a navigable tree in two passes:
//!
//! 1. **Head labels** - per block, no lookups into other blocks.
//! 2. **Structure** - child ids and parent ids become [`BlockRef`] handles.
//!    Needs the complete index.
//!
//! The tree is a view over the arena: a block shared by several parents, or
//! a cycle in the export, is stored once and only guarded against at walk
//! time.

use serde_json::Value;

use crate::content::kinds::WikiLink;
use crate::error::ConvertError;
use crate::index::BlockIndex;
use crate::models::{BlockRecord, BlockRef};

/// Run both passes and return the root blocks in import order.
pub fn resolve_tree(index: &mut BlockIndex) -> Result<Vec<BlockRef>, ConvertError> {
    resolve_head_labels(index);
    let roots = resolve_structure(index)?;
    log::info!("Resolved tree with {} roots", roots.len());
    Ok(roots)
}

pub fn resolve_head_labels(index: &mut BlockIndex) {
    for block in &mut index.blocks {
        block.head = head_label(&block.record);
    }
}

/// Heading text for a record: its first key cell when that cell is plain text.
///
/// Referenced non-document blocks get wiki-link syntax so their text links
/// back to a page of the same name.
pub fn head_label(record: &BlockRecord) -> String {
    match record.key.first() {
        Some(Value::String(text))
            if !text.is_empty() && !record.references.is_empty() && !record.is_document =>
        {
            WikiLink::wrap(text)
        }
        Some(Value::String(text)) => text.clone(),
        _ => String::new(),
    }
}

/// Attach children and parents; returns the roots.
pub fn resolve_structure(index: &mut BlockIndex) -> Result<Vec<BlockRef>, ConvertError> {
    let mut roots = Vec::new();
    let mut links = Vec::with_capacity(index.len());

    for (handle, block) in index.iter() {
        let children: Vec<Option<BlockRef>> = block
            .record
            .sub_blocks
            .iter()
            .rev()
            .map(|child| index.lookup(child))
            .collect();

        let parent = match &block.record.parent {
            None => {
                roots.push(handle);
                None
            }
            Some(parent) => Some(index.lookup(parent).ok_or_else(|| {
                ConvertError::UnknownParent {
                    block: block.id.clone(),
                    parent: parent.clone(),
                }
            })?),
        };

        links.push((children, parent));
    }

    for (block, (children, parent)) in index.blocks.iter_mut().zip(links) {
        block.children = children;
        block.parent = parent;
    }

    Ok(roots)
}
