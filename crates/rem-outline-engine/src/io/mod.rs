use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use relative_path::{RelativePath, RelativePathBuf};
use serde_json::Value;

use crate::error::ConvertError;
use crate::outline::PageSink;

/// Read and parse an export file
pub fn read_export(path: &Path) -> Result<Value, ConvertError> {
    if !path.exists() {
        return Err(ConvertError::NotFound(path.to_path_buf()));
    }
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

/// Create the output directory if it doesn't exist yet
pub fn ensure_output_dir(path: &Path) -> Result<(), ConvertError> {
    fs::create_dir_all(path).map_err(ConvertError::Io)
}

/// Writes pages as files under an output root.
///
/// An opened page keeps its buffered writer until [`PageSink::close_page`]
/// or [`PageSink::finish`], so a document page can be written while its
/// parent's page is still open.
#[derive(Debug)]
pub struct DirectorySink {
    root: PathBuf,
    writers: HashMap<RelativePathBuf, BufWriter<File>>,
}

impl DirectorySink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            writers: HashMap::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Number of pages currently holding a file handle.
    pub fn open_pages(&self) -> usize {
        self.writers.len()
    }
}

impl PageSink for DirectorySink {
    fn open_page(&mut self, page: &RelativePath) -> Result<(), ConvertError> {
        let absolute_path = page.to_path(&self.root);

        // Create parent directories if they don't exist
        if let Some(parent) = absolute_path.parent() {
            fs::create_dir_all(parent)?;
        }

        // A page opened twice starts over; flush the old handle before truncating
        if let Some(mut previous) = self.writers.remove(page) {
            previous.flush()?;
        }
        let file = File::create(&absolute_path)?;
        self.writers
            .insert(page.to_relative_path_buf(), BufWriter::new(file));
        Ok(())
    }

    fn append(&mut self, page: &RelativePath, text: &str) -> Result<(), ConvertError> {
        let writer = self.writers.get_mut(page).ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("page {page} is not open"),
            )
        })?;
        writer.write_all(text.as_bytes())?;
        Ok(())
    }

    fn close_page(&mut self, page: &RelativePath) -> Result<(), ConvertError> {
        if let Some(mut writer) = self.writers.remove(page) {
            writer.flush()?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<(), ConvertError> {
        for (_, mut writer) in self.writers.drain() {
            writer.flush()?;
        }
        Ok(())
    }
}
