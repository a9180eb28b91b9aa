use serde_json::{Map, Value};

use super::WebLink;

/// Formatted text cell. Which formatting applies is decided by
/// [`MarkupMarker::PRIORITY`].
pub struct Markup;

impl Markup {
    pub const TAG: &'static str = "m";
    pub const TEXT_FIELD: &'static str = "text";
    pub const LATEX_TYPE: &'static str = "latex";
    pub const WIP_TAG: &'static str = "#WIP";

    pub fn quote(text: &str) -> String {
        format!("\n  #+BEGIN_QUOTE\n  {text}\n  #+END_QUOTE")
    }

    pub fn latex(text: &str) -> String {
        format!("$${text}$$")
    }

    pub fn work_in_progress(text: &str) -> String {
        format!("{text} {}", Self::WIP_TAG)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Italic,
    Bold,
    Underline,
}

impl Emphasis {
    pub fn render(self, text: &str) -> String {
        match self {
            Emphasis::Italic => format!("_{text}_"),
            Emphasis::Bold => format!("__{text}__"),
            Emphasis::Underline => format!("<ins>{text}</ins>"),
        }
    }
}

/// Marker fields a markup cell may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkupMarker {
    Italic,
    Bold,
    Underline,
    Quote,
    Latex,
    WorkInProgress,
    WebLink,
}

impl MarkupMarker {
    /// Checked in this order; the first marker set on a cell wins and the
    /// rest are ignored.
    pub const PRIORITY: [MarkupMarker; 7] = [
        MarkupMarker::Italic,
        MarkupMarker::Bold,
        MarkupMarker::Underline,
        MarkupMarker::Quote,
        MarkupMarker::Latex,
        MarkupMarker::WorkInProgress,
        MarkupMarker::WebLink,
    ];

    pub fn field(self) -> &'static str {
        match self {
            MarkupMarker::Italic => "l",
            MarkupMarker::Bold => "b",
            MarkupMarker::Underline => "u",
            MarkupMarker::Quote => "q",
            MarkupMarker::Latex => "type",
            MarkupMarker::WorkInProgress => "workInProgressRem",
            MarkupMarker::WebLink => WebLink::ID_FIELD,
        }
    }

    pub fn is_set(self, cell: &Map<String, Value>) -> bool {
        let value = cell.get(self.field());
        match self {
            MarkupMarker::Latex => value.and_then(Value::as_str) == Some(Markup::LATEX_TYPE),
            MarkupMarker::WebLink => value.is_some_and(Value::is_string),
            _ => value.and_then(Value::as_bool) == Some(true),
        }
    }

    /// The winning marker for a cell, if any.
    pub fn first_set(cell: &Map<String, Value>) -> Option<MarkupMarker> {
        Self::PRIORITY
            .into_iter()
            .find(|marker| marker.is_set(cell))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn cell(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[rstest]
    #[case(json!({"l": true}), Some(MarkupMarker::Italic))]
    #[case(json!({"b": true}), Some(MarkupMarker::Bold))]
    #[case(json!({"u": true}), Some(MarkupMarker::Underline))]
    #[case(json!({"q": true}), Some(MarkupMarker::Quote))]
    #[case(json!({"type": "latex"}), Some(MarkupMarker::Latex))]
    #[case(json!({"workInProgressRem": true}), Some(MarkupMarker::WorkInProgress))]
    #[case(json!({"qId": "link"}), Some(MarkupMarker::WebLink))]
    #[case(json!({"b": true, "q": true}), Some(MarkupMarker::Bold))]
    #[case(json!({"l": true, "b": true, "u": true}), Some(MarkupMarker::Italic))]
    #[case(json!({"q": true, "qId": "link"}), Some(MarkupMarker::Quote))]
    #[case(json!({"b": false, "u": true}), Some(MarkupMarker::Underline))]
    #[case(json!({"type": "code"}), None)]
    #[case(json!({"qId": 12}), None)]
    #[case(json!({}), None)]
    fn test_first_set_marker(#[case] raw: Value, #[case] expected: Option<MarkupMarker>) {
        assert_eq!(MarkupMarker::first_set(&cell(raw)), expected);
    }

    #[rstest]
    #[case(Emphasis::Italic, "_word_")]
    #[case(Emphasis::Bold, "__word__")]
    #[case(Emphasis::Underline, "<ins>word</ins>")]
    fn test_emphasis_render(#[case] emphasis: Emphasis, #[case] expected: &str) {
        assert_eq!(emphasis.render("word"), expected);
    }

    #[test]
    fn test_block_renders() {
        assert_eq!(
            Markup::quote("said"),
            "\n  #+BEGIN_QUOTE\n  said\n  #+END_QUOTE"
        );
        assert_eq!(Markup::latex("x^2"), "$$x^2$$");
        assert_eq!(Markup::work_in_progress("draft"), "draft #WIP");
    }
}
