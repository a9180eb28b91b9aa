pub mod content;
pub mod convert;
pub mod error;
pub mod index;
pub mod io;
pub mod models;
pub mod outline;
pub mod tree;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use content::{CellError, InlineCell, resolve_content};
pub use convert::{ResolvedExport, convert, convert_file};
pub use error::ConvertError;
pub use index::BlockIndex;
pub use io::DirectorySink;
pub use models::{Block, BlockRecord, BlockRef};
pub use outline::{
    ConversionSummary, MemorySink, OutlineWriter, PageSink, PlaceholderStyle, RenderOptions,
};
pub use tree::resolve_tree;
