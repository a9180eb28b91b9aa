use std::collections::BTreeMap;
use std::io;

use relative_path::{RelativePath, RelativePathBuf};

use crate::error::ConvertError;

/// Destination for rendered pages.
///
/// A page must be opened before it is appended to. Opening an existing page
/// starts it over. Several pages may be open at once; a closed page takes no
/// more appends until it is opened again.
pub trait PageSink {
    fn open_page(&mut self, page: &RelativePath) -> Result<(), ConvertError>;

    fn append(&mut self, page: &RelativePath, text: &str) -> Result<(), ConvertError>;

    /// Release whatever the sink holds for a finished page.
    fn close_page(&mut self, _page: &RelativePath) -> Result<(), ConvertError> {
        Ok(())
    }

    fn finish(&mut self) -> Result<(), ConvertError> {
        Ok(())
    }
}

/// Keeps pages in memory, sorted by path.
#[derive(Debug, Default)]
pub struct MemorySink {
    pages: BTreeMap<RelativePathBuf, String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(&self, page: &str) -> Option<&str> {
        self.pages.get(RelativePath::new(page)).map(String::as_str)
    }

    pub fn pages(&self) -> impl Iterator<Item = (&RelativePath, &str)> {
        self.pages
            .iter()
            .map(|(path, content)| (path.as_relative_path(), content.as_str()))
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

impl PageSink for MemorySink {
    fn open_page(&mut self, page: &RelativePath) -> Result<(), ConvertError> {
        self.pages.insert(page.to_relative_path_buf(), String::new());
        Ok(())
    }

    fn append(&mut self, page: &RelativePath, text: &str) -> Result<(), ConvertError> {
        let content = self.pages.get_mut(page).ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("page {page} is not open"))
        })?;
        content.push_str(text);
        Ok(())
    }
}
