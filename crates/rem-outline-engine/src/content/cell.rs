use serde_json::{Map, Value};

use super::kinds::{CodeBlock, Emphasis, Image, Markup, MarkupMarker, Reference, WebLink};

/// Field on a rich cell naming its kind.
pub const KIND_FIELD: &str = "i";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CellError {
    #[error("cell is neither text nor an object: {0}")]
    UnsupportedCell(Value),
    #[error("cell has no `i` kind tag")]
    MissingKind,
    #[error("unknown cell kind `{0}`")]
    UnknownKind(String),
    #[error("{kind} cell is missing `{field}`")]
    MissingField {
        kind: &'static str,
        field: &'static str,
    },
    #[error("image cell has an empty url")]
    EmptyUrl,
    #[error("markup cell has no recognised marker")]
    UnknownMarkup,
    #[error("linked block {block} has no `{field}` on its url path")]
    MissingLinkField { block: String, field: &'static str },
    #[error("{0} cell rendered to nothing")]
    EmptyOutput(&'static str),
}

/// A rich cell classified into exactly one renderable kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineCell<'a> {
    Reference { id: &'a str },
    Image { url: &'a str },
    CodeBlock {
        text: &'a str,
        language: Option<&'a str>,
    },
    Emphasis { style: Emphasis, text: &'a str },
    Quote { text: &'a str },
    Latex { text: &'a str },
    WorkInProgress { text: &'a str },
    WebLink { id: &'a str },
}

impl<'a> InlineCell<'a> {
    /// Classify a rich cell. Markup markers are resolved in
    /// [`MarkupMarker::PRIORITY`] order, so a cell with several markers always
    /// lands on the same variant.
    pub fn classify(cell: &'a Map<String, Value>) -> Result<Self, CellError> {
        let kind = cell
            .get(KIND_FIELD)
            .and_then(Value::as_str)
            .ok_or(CellError::MissingKind)?;

        match kind {
            Reference::TAG => Ok(InlineCell::Reference {
                id: required_str(cell, "reference", Reference::ID_FIELD)?,
            }),
            Image::TAG => {
                let url = required_str(cell, "image", Image::URL_FIELD)?;
                if url.is_empty() {
                    return Err(CellError::EmptyUrl);
                }
                Ok(InlineCell::Image { url })
            }
            CodeBlock::TAG => Ok(InlineCell::CodeBlock {
                text: required_str(cell, "code block", CodeBlock::TEXT_FIELD)?,
                language: cell.get(CodeBlock::LANGUAGE_FIELD).and_then(Value::as_str),
            }),
            Markup::TAG => Self::classify_markup(cell),
            other => Err(CellError::UnknownKind(other.to_string())),
        }
    }

    fn classify_markup(cell: &'a Map<String, Value>) -> Result<Self, CellError> {
        let marker = MarkupMarker::first_set(cell).ok_or(CellError::UnknownMarkup)?;
        // Every marker but the web link renders the cell's own text.
        let text = || required_str(cell, "markup", Markup::TEXT_FIELD);

        Ok(match marker {
            MarkupMarker::Italic => InlineCell::Emphasis {
                style: Emphasis::Italic,
                text: text()?,
            },
            MarkupMarker::Bold => InlineCell::Emphasis {
                style: Emphasis::Bold,
                text: text()?,
            },
            MarkupMarker::Underline => InlineCell::Emphasis {
                style: Emphasis::Underline,
                text: text()?,
            },
            MarkupMarker::Quote => InlineCell::Quote { text: text()? },
            MarkupMarker::Latex => InlineCell::Latex { text: text()? },
            MarkupMarker::WorkInProgress => InlineCell::WorkInProgress { text: text()? },
            MarkupMarker::WebLink => InlineCell::WebLink {
                id: required_str(cell, "web link", WebLink::ID_FIELD)?,
            },
        })
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            InlineCell::Reference { .. } => "reference",
            InlineCell::Image { .. } => "image",
            InlineCell::CodeBlock { .. } => "code block",
            InlineCell::Emphasis { .. } => "emphasis",
            InlineCell::Quote { .. } => "quote",
            InlineCell::Latex { .. } => "latex",
            InlineCell::WorkInProgress { .. } => "work in progress",
            InlineCell::WebLink { .. } => "web link",
        }
    }
}

fn required_str<'a>(
    cell: &'a Map<String, Value>,
    kind: &'static str,
    field: &'static str,
) -> Result<&'a str, CellError> {
    cell.get(field)
        .and_then(Value::as_str)
        .ok_or(CellError::MissingField { kind, field })
}
