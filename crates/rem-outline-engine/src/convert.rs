use std::path::Path;

use serde_json::Value;

use crate::content::resolve_content;
use crate::error::ConvertError;
use crate::index::BlockIndex;
use crate::io::{self, DirectorySink};
use crate::models::BlockRef;
use crate::outline::{ConversionSummary, OutlineWriter, PageSink, RenderOptions};
use crate::tree::resolve_tree;

/// An export with every block indexed, linked and rendered; ready to write.
#[derive(Debug)]
pub struct ResolvedExport {
    pub index: BlockIndex,
    pub roots: Vec<BlockRef>,
}

impl ResolvedExport {
    /// Index, resolve the tree, then render every block's content.
    pub fn resolve(export: Value) -> Result<Self, ConvertError> {
        let mut index = BlockIndex::from_export(export)?;
        let roots = resolve_tree(&mut index)?;
        resolve_content(&mut index)?;
        Ok(Self { index, roots })
    }

    pub fn write(
        &self,
        options: &RenderOptions,
        sink: &mut dyn PageSink,
    ) -> Result<ConversionSummary, ConvertError> {
        OutlineWriter::new(&self.index, options).write_all(&self.roots, sink)
    }
}

/// Convert an in-memory export into pages.
pub fn convert(
    export: Value,
    options: &RenderOptions,
    sink: &mut dyn PageSink,
) -> Result<ConversionSummary, ConvertError> {
    ResolvedExport::resolve(export)?.write(options, sink)
}

/// Convert an export file into a directory of pages.
///
/// The output directory is only created once the whole export has resolved.
/// Pages written before a failure are left in place.
pub fn convert_file(
    input: &Path,
    output_dir: &Path,
    options: &RenderOptions,
) -> Result<ConversionSummary, ConvertError> {
    let export = io::read_export(input)?;
    log::info!("Loaded export from {}", input.display());

    let resolved = ResolvedExport::resolve(export)?;
    io::ensure_output_dir(output_dir)?;
    let mut sink = DirectorySink::new(output_dir);
    resolved.write(options, &mut sink)
}
