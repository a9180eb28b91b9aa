//! # Content resolution
//!
//! Flattens each block's `key` and `value` cell sequences into the text shown
//! on its outline line. Plain text cells are copied; rich cells are
//! classified by [`InlineCell::classify`] and rendered, looking up other
//! blocks for references and web links.
//!
//! Soft failures (a reference to a block that is not indexed, a target with
//! an empty head) render a sentinel string. Anything that signals an input
//! shape we do not understand is a fatal [`ConvertError::InvalidCell`].

pub mod cell;
pub mod kinds;

pub use cell::{CellError, InlineCell};

use serde_json::Value;

use crate::error::ConvertError;
use crate::index::BlockIndex;
use crate::models::{Block, fields};
use kinds::{CodeBlock, Image, Markup, Reference, WebLink};

/// Render the body of every block. Requires head labels to be resolved.
pub fn resolve_content(index: &mut BlockIndex) -> Result<(), ConvertError> {
    let bodies = {
        let index: &BlockIndex = index;
        index
            .blocks
            .iter()
            .map(|block| render_body(index, block))
            .collect::<Result<Vec<_>, _>>()?
    };

    for (block, body) in index.blocks.iter_mut().zip(bodies) {
        block.body = body;
    }
    Ok(())
}

/// Key text, then a space and the value text when there is any.
pub fn render_body(index: &BlockIndex, block: &Block) -> Result<String, ConvertError> {
    let key = render_cells(index, block, fields::KEY, &block.record.key)?;
    let value = render_cells(index, block, fields::VALUE, &block.record.value)?;
    if value.is_empty() {
        Ok(key)
    } else {
        Ok(format!("{key} {value}"))
    }
}

pub fn render_cells(
    index: &BlockIndex,
    owner: &Block,
    field: &'static str,
    cells: &[Value],
) -> Result<String, ConvertError> {
    let mut out = String::new();
    for cell in cells {
        let text = render_cell(index, owner, cell).map_err(|source| ConvertError::InvalidCell {
            block: owner.id.clone(),
            field,
            source,
        })?;
        out.push_str(&text);
    }
    Ok(out)
}

fn render_cell(index: &BlockIndex, owner: &Block, cell: &Value) -> Result<String, CellError> {
    let rich = match cell {
        Value::String(text) => return Ok(text.clone()),
        Value::Object(rich) => rich,
        other => return Err(CellError::UnsupportedCell(other.clone())),
    };

    let cell = InlineCell::classify(rich)?;
    let rendered = render_inline(index, owner, &cell)?;
    if rendered.is_empty() {
        return Err(CellError::EmptyOutput(cell.kind_name()));
    }
    Ok(rendered)
}

fn render_inline(
    index: &BlockIndex,
    owner: &Block,
    cell: &InlineCell<'_>,
) -> Result<String, CellError> {
    let rendered = match *cell {
        InlineCell::Reference { id } => match index.get(id) {
            None => Reference::BROKEN.to_string(),
            Some(target) if target.head.is_empty() => {
                log::warn!("Empty reference from {} to {id}", owner.id);
                Reference::EMPTY.to_string()
            }
            Some(target) => target.head.clone(),
        },
        InlineCell::Image { url } => Image::render(url),
        InlineCell::CodeBlock { text, language } => {
            CodeBlock::render(text, language.unwrap_or_default())
        }
        InlineCell::Emphasis { style, text } => style.render(text),
        InlineCell::Quote { text } => Markup::quote(text),
        InlineCell::Latex { text } => Markup::latex(text),
        InlineCell::WorkInProgress { text } => Markup::work_in_progress(text),
        InlineCell::WebLink { id } => match index.get(id) {
            None => {
                log::warn!("Broken link reference from {} to {id}", owner.id);
                WebLink::BROKEN.to_string()
            }
            Some(linked) => {
                let url = linked.record.nested_str(&WebLink::URL_PATH).map_err(|field| {
                    CellError::MissingLinkField {
                        block: linked.id.clone(),
                        field,
                    }
                })?;
                WebLink::render(&linked.head, url)
            }
        },
    };
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{export, rem};
    use crate::tree::resolve_tree;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn resolved(records: Vec<Value>) -> BlockIndex {
        let mut index = BlockIndex::from_export(export(records)).unwrap();
        resolve_tree(&mut index).unwrap();
        resolve_content(&mut index).unwrap();
        index
    }

    fn body(index: &BlockIndex, id: &str) -> String {
        index.get(id).unwrap().body.clone()
    }

    #[test]
    fn test_plain_key_has_no_trailing_space() {
        let index = resolved(vec![rem("a", "Title").build()]);
        assert_eq!(body(&index, "a"), "Title");
    }

    #[test]
    fn test_key_and_value_join_with_space() {
        let index = resolved(vec![
            rem("a", "Capital").value(json!(["Paris", " (France)"])).build(),
        ]);
        assert_eq!(body(&index, "a"), "Capital Paris (France)");
    }

    #[test]
    fn test_reference_renders_target_head() {
        let index = resolved(vec![
            rem("t", "Target").build(),
            rem("a", "").key(json!(["See ", {"i": "q", "_id": "t"}])).build(),
        ]);
        assert_eq!(body(&index, "a"), "See Target");
    }

    #[test]
    fn test_reference_to_referenced_block_uses_wiki_link() {
        let index = resolved(vec![
            rem("t", "Target").referenced().build(),
            rem("a", "").key(json!([{"i": "q", "_id": "t"}])).build(),
        ]);
        assert_eq!(body(&index, "a"), "[[Target]]");
        // The block's own line keeps the plain key text.
        assert_eq!(body(&index, "t"), "Target");
    }

    #[test]
    fn test_broken_reference_sentinel() {
        let index = resolved(vec![
            rem("a", "").key(json!([{"i": "q", "_id": "missing"}])).build(),
        ]);
        assert_eq!(body(&index, "a"), " **BROKEN REFERENCE** ");
    }

    #[test]
    fn test_reference_to_scaffold_is_broken() {
        let index = resolved(vec![
            rem("s", "Daily Document").build(),
            rem("a", "").key(json!([{"i": "q", "_id": "s"}])).build(),
        ]);
        assert_eq!(body(&index, "a"), Reference::BROKEN);
    }

    #[test]
    fn test_empty_reference_sentinel() {
        let index = resolved(vec![
            rem("t", "").key(json!([])).build(),
            rem("a", "").key(json!([{"i": "q", "_id": "t"}])).build(),
        ]);
        assert_eq!(body(&index, "a"), "__EMPTY REFERENCE__");
    }

    #[test]
    fn test_image_and_code_block() {
        let index = resolved(vec![
            rem("a", "")
                .key(json!([{"i": "i", "url": "https://img.example/cat.png"}]))
                .value(json!([{"i": "o", "text": "echo hi", "language": "bash"}]))
                .build(),
        ]);
        assert_eq!(
            body(&index, "a"),
            "![](https://img.example/cat.png) \n```bash\necho hi\n```"
        );
    }

    #[test]
    fn test_markup_kinds() {
        let index = resolved(vec![
            rem("a", "")
                .key(json!([
                    {"i": "m", "text": "i", "l": true},
                    " ",
                    {"i": "m", "text": "b", "b": true},
                    " ",
                    {"i": "m", "text": "u", "u": true},
                    " ",
                    {"i": "m", "text": "e=mc^2", "type": "latex"},
                    " ",
                    {"i": "m", "text": "todo", "workInProgressRem": true}
                ]))
                .build(),
        ]);
        assert_eq!(
            body(&index, "a"),
            "_i_ __b__ <ins>u</ins> $$e=mc^2$$ todo #WIP"
        );
    }

    #[test]
    fn test_quote_markup() {
        let index = resolved(vec![
            rem("a", "Said")
                .value(json!([{"i": "m", "text": "to be", "q": true}]))
                .build(),
        ]);
        assert_eq!(
            body(&index, "a"),
            "Said \n  #+BEGIN_QUOTE\n  to be\n  #+END_QUOTE"
        );
    }

    #[test]
    fn test_web_link_follows_linked_record() {
        let index = resolved(vec![
            rem("link", "Rust homepage")
                .field("crt", json!({"b": {"u": {"s": "https://www.rust-lang.org"}}}))
                .build(),
            rem("a", "")
                .key(json!(["Visit ", {"i": "m", "qId": "link", "text": "ignored"}]))
                .build(),
        ]);
        assert_eq!(
            body(&index, "a"),
            "Visit [Rust homepage](https://www.rust-lang.org)"
        );
    }

    #[test]
    fn test_broken_web_link_sentinel() {
        let index = resolved(vec![
            rem("a", "").key(json!([{"i": "m", "qId": "gone"}])).build(),
        ]);
        assert_eq!(body(&index, "a"), WebLink::BROKEN);
    }

    fn resolve_err(records: Vec<Value>) -> ConvertError {
        let mut index = BlockIndex::from_export(export(records)).unwrap();
        resolve_tree(&mut index).unwrap();
        resolve_content(&mut index).unwrap_err()
    }

    #[test]
    fn test_web_link_without_url_chain_is_fatal() {
        let err = resolve_err(vec![
            rem("link", "Half a link")
                .field("crt", json!({"b": {}}))
                .build(),
            rem("a", "").key(json!([{"i": "m", "qId": "link"}])).build(),
        ]);
        match err {
            ConvertError::InvalidCell { block, field, source } => {
                assert_eq!(block, "a");
                assert_eq!(field, "key");
                assert_eq!(
                    source,
                    CellError::MissingLinkField {
                        block: "link".into(),
                        field: "u"
                    }
                );
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unknown_markup_in_value_is_fatal() {
        let err = resolve_err(vec![
            rem("a", "Key").value(json!([{"i": "m", "text": "plain"}])).build(),
        ]);
        assert!(matches!(
            err,
            ConvertError::InvalidCell {
                field: "value",
                source: CellError::UnknownMarkup,
                ..
            }
        ));
    }

    #[test]
    fn test_non_text_cell_is_fatal() {
        let err = resolve_err(vec![rem("a", "").key(json!([42])).build()]);
        assert!(err.to_string().contains("neither text nor an object"));
    }

    #[test]
    fn test_empty_image_url_is_fatal() {
        let err = resolve_err(vec![
            rem("a", "").key(json!([{"i": "i", "url": ""}])).build(),
        ]);
        assert!(matches!(
            err,
            ConvertError::InvalidCell {
                source: CellError::EmptyUrl,
                ..
            }
        ));
    }
}
