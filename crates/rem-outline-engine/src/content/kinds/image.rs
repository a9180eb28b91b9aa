pub struct Image;

impl Image {
    pub const TAG: &'static str = "i";
    pub const URL_FIELD: &'static str = "url";

    pub fn render(url: &str) -> String {
        format!("![]({url})")
    }
}
