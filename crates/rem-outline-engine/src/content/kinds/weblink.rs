/// Markup cell pointing at a link block whose record holds the URL.
pub struct WebLink;

impl WebLink {
    pub const ID_FIELD: &'static str = "qId";
    /// Nested fields on the linked block's record leading to the URL string.
    pub const URL_PATH: [&'static str; 4] = ["crt", "b", "u", "s"];
    pub const BROKEN: &'static str = " **BROKEN LINK REFERENCE** ";

    pub fn render(label: &str, url: &str) -> String {
        format!("[{label}]({url})")
    }
}
