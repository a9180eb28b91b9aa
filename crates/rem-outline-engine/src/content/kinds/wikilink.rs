pub struct WikiLink;

impl WikiLink {
    pub const OPEN: &'static str = "[[";
    pub const CLOSE: &'static str = "]]";

    pub fn wrap(label: &str) -> String {
        format!("{}{label}{}", Self::OPEN, Self::CLOSE)
    }
}

/// Transclusion of a whole page: `{{embed [[Page]]}}`.
pub struct Embed;

impl Embed {
    pub const OPEN: &'static str = "{{embed ";
    pub const CLOSE: &'static str = "}}";

    pub fn wrap(label: &str) -> String {
        format!("{}{}{}", Self::OPEN, WikiLink::wrap(label), Self::CLOSE)
    }
}
