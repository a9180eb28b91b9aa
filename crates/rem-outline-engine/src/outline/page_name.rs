use relative_path::RelativePathBuf;

pub const PAGE_EXTENSION: &str = "md";

/// Substrings that make a page name get wrapped in single quotes.
pub const SPECIAL_SEQUENCES: &[&str] = &[
    " ", ":", "#", "-", "%", "$", "§", "@", "!", "()", "{}", "[]", "<", ">", ".",
];

pub const PATH_SEPARATOR: char = '/';
pub const SEPARATOR_REPLACEMENT: char = '|';

/// File-safe page name for a head label. The label itself is not changed.
pub fn sanitize(label: &str) -> String {
    let name = if SPECIAL_SEQUENCES.iter().any(|special| label.contains(special)) {
        format!("'{label}'")
    } else {
        label.to_string()
    };
    name.replace(PATH_SEPARATOR, &SEPARATOR_REPLACEMENT.to_string())
}

/// Page file path, relative to the output root, for a head label.
pub fn page_path(label: &str) -> RelativePathBuf {
    RelativePathBuf::from(format!("{}.{PAGE_EXTENSION}", sanitize(label)))
}
