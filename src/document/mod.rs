mod error;
mod pdf;

pub use error::SourceError;

use std::path::{Path, PathBuf};

/// One page of extracted text
#[derive(Debug, Clone)]
pub struct Page {
    /// 0-based page index, sequential within the document
    pub index: usize,
    /// Extracted plain text, possibly empty
    pub text: String,
}

/// An immutable, fully-extracted input document
#[derive(Debug)]
pub struct Document {
    source: PathBuf,
    pages: Vec<Page>,
}

impl Document {
    /// Load a PDF from disk and extract text for every page.
    ///
    /// A page whose text extraction fails yields an empty string; only a
    /// document-level load failure is an error.
    pub fn open(path: &Path) -> Result<Self, SourceError> {
        let pages = pdf::extract_pages(path)?;
        Ok(Self {
            source: path.to_path_buf(),
            pages,
        })
    }

    /// Build a document from already-extracted page texts (tests, non-PDF callers)
    pub fn from_pages(source: impl Into<PathBuf>, texts: Vec<String>) -> Self {
        let pages = texts
            .into_iter()
            .enumerate()
            .map(|(index, text)| Page { index, text })
            .collect();
        Self {
            source: source.into(),
            pages,
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Text of a single page; empty string for an out-of-range index
    pub fn page_text(&self, index: usize) -> &str {
        self.pages.get(index).map(|p| p.text.as_str()).unwrap_or("")
    }

    /// Concatenate the texts of the given pages, one trailing newline per page
    pub fn text_of_pages(&self, indices: &[usize]) -> String {
        let mut text = String::new();
        for &i in indices {
            text.push_str(self.page_text(i));
            text.push('\n');
        }
        text
    }
}
