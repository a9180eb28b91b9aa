//! # Cell Kinds
//!
//! Each inline cell kind owns its export field names and its output syntax.
//!
//! ## Types
//!
//! - **`Reference`**: `TAG = "q"`, plus the broken/empty sentinels
//! - **`Image`**: `TAG = "i"`, renders `![](url)`
//! - **`CodeBlock`**: `TAG = "o"`, renders a fenced block
//! - **`Markup`**: `TAG = "m"`, emphasis, quote, LaTeX, WIP and web links
//! - **`WebLink`**: the `qId` markup variant and its URL field chain
//! - **`WikiLink`** / **`Embed`**: outline link syntax shared by heads and
//!   document placeholders
//!
//! Renderers and the classifier read these constants; no other module
//! spells out a field name or delimiter.

pub mod code_block;
pub mod image;
pub mod markup;
pub mod reference;
pub mod weblink;
pub mod wikilink;

pub use code_block::CodeBlock;
pub use image::Image;
pub use markup::{Emphasis, Markup, MarkupMarker};
pub use reference::Reference;
pub use weblink::WebLink;
pub use wikilink::{Embed, WikiLink};
