//! # Outline writing
//!
//! Depth-first walk over the resolved tree, one walk per root. Each root
//! opens a page named after its head label; every nested document block
//! leaves a placeholder line in the page being written and continues in a
//! page of its own at depth 0.
//!
//! The export may share a block between several parents or contain cycles,
//! so every walk carries a visited set keyed by [`BlockRef`]: the first
//! visit writes the block, later ones are ignored.
//!
//! A page is closed as soon as the subtree that owns it has been written, so
//! only the pages on the current path from the root are open at once.

pub mod page_name;
pub mod sink;

pub use page_name::{page_path, sanitize};
pub use sink::{MemorySink, PageSink};

use std::collections::HashSet;

use relative_path::{RelativePath, RelativePathBuf};

use crate::content::kinds::{Embed, WikiLink};
use crate::error::ConvertError;
use crate::index::BlockIndex;
use crate::models::BlockRef;

pub const INDENT: &str = "\t";
pub const BULLET: &str = "- ";

/// How a nested document is referenced from its parent's page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaceholderStyle {
    /// `[[Page]]`
    Reference,
    /// `{{embed [[Page]]}}`
    #[default]
    Embed,
}

impl PlaceholderStyle {
    pub fn render(self, head: &str) -> String {
        match self {
            PlaceholderStyle::Reference => WikiLink::wrap(head),
            PlaceholderStyle::Embed => Embed::wrap(head),
        }
    }
}

/// Options threaded through the writer for one run.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    pub placeholder: PlaceholderStyle,
}

/// What a run produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionSummary {
    /// Pages in the order they were opened.
    pub pages: Vec<RelativePathBuf>,
    pub blocks_written: usize,
    /// Roots without a head label; they have no page name.
    pub skipped_roots: usize,
}

/// One outline line: indentation, bullet, text. Line breaks inside `text`
/// are re-indented so continuation lines stay under the bullet.
pub fn outline_line(depth: usize, text: &str) -> String {
    let indent = INDENT.repeat(depth);
    let text = text.replace('\n', &format!("\n{indent}"));
    format!("{indent}{BULLET}{text}\n")
}

pub struct OutlineWriter<'a> {
    index: &'a BlockIndex,
    options: &'a RenderOptions,
}

struct Walk<'s> {
    visited: HashSet<BlockRef>,
    /// Pages still being written, outermost first.
    open_pages: Vec<RelativePathBuf>,
    sink: &'s mut dyn PageSink,
    summary: &'s mut ConversionSummary,
}

impl<'a> OutlineWriter<'a> {
    pub fn new(index: &'a BlockIndex, options: &'a RenderOptions) -> Self {
        Self { index, options }
    }

    /// Write every root, then flush the sink.
    pub fn write_all(
        &self,
        roots: &[BlockRef],
        sink: &mut dyn PageSink,
    ) -> Result<ConversionSummary, ConvertError> {
        let mut summary = ConversionSummary::default();
        for &root in roots {
            self.write_root(root, sink, &mut summary)?;
        }
        sink.finish()?;
        log::info!(
            "Wrote {} blocks to {} pages",
            summary.blocks_written,
            summary.pages.len()
        );
        Ok(summary)
    }

    pub fn write_root(
        &self,
        root: BlockRef,
        sink: &mut dyn PageSink,
        summary: &mut ConversionSummary,
    ) -> Result<(), ConvertError> {
        let block = self.index.block(root);
        if block.head.is_empty() {
            log::debug!("Skipping root {} without a head label", block.id);
            summary.skipped_roots += 1;
            return Ok(());
        }

        let page = page_path(&block.head);
        sink.open_page(&page)?;
        summary.pages.push(page.clone());

        log::debug!("Started walking {page}");
        let mut walk = Walk {
            visited: HashSet::new(),
            open_pages: vec![page.clone()],
            sink,
            summary,
        };
        self.walk(&mut walk, root, 0, &page)?;
        walk.sink.close_page(&page)?;
        log::debug!("Finished walking {page}");
        Ok(())
    }

    fn walk(
        &self,
        walk: &mut Walk<'_>,
        handle: BlockRef,
        depth: usize,
        page: &RelativePath,
    ) -> Result<(), ConvertError> {
        if !walk.visited.insert(handle) {
            return Ok(());
        }
        let block = self.index.block(handle);

        let own_page;
        let (page, depth) = if block.starts_page() {
            let placeholder = self.options.placeholder.render(&block.head);
            walk.sink.append(page, &outline_line(depth, &placeholder))?;

            own_page = page_path(&block.head);
            if walk.open_pages.contains(&own_page) {
                log::warn!(
                    "Document {} reopens {own_page} while it is still being written; \
                     the earlier content of that page is lost",
                    block.id
                );
            }
            walk.sink.open_page(&own_page)?;
            walk.open_pages.push(own_page.clone());
            walk.summary.pages.push(own_page.clone());
            (own_page.as_relative_path(), 0)
        } else {
            (page, depth)
        };

        walk.sink.append(page, &outline_line(depth, &block.body))?;
        walk.summary.blocks_written += 1;

        for child in &block.children {
            match child {
                Some(child) => self.walk(walk, *child, depth + 1, page)?,
                None => log::debug!("Skipping a missing child of {}", block.id),
            }
        }

        if block.starts_page() {
            walk.open_pages.pop();
            // A page reopened by a nested document stays open for its outer writer.
            if !walk.open_pages.iter().any(|open| open.as_relative_path() == page) {
                walk.sink.close_page(page)?;
            }
        }
        Ok(())
    }
}
