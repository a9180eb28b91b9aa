pub struct CodeBlock;

impl CodeBlock {
    pub const TAG: &'static str = "o";
    pub const TEXT_FIELD: &'static str = "text";
    pub const LANGUAGE_FIELD: &'static str = "language";
    pub const FENCE: &'static str = "```";

    /// Fenced block starting on its own line. `language` may be empty.
    pub fn render(text: &str, language: &str) -> String {
        format!("\n{fence}{language}\n{text}\n{fence}", fence = Self::FENCE)
    }
}
