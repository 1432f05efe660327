//! PDF text extraction backed by lopdf.
//!
//! lopdf numbers pages from 1; we re-index from 0 in extraction order.
//! Extraction failures on individual pages (scanned pages, odd encodings)
//! degrade to empty text rather than failing the whole document.

use super::{Page, SourceError};
use std::path::Path;

pub fn extract_pages(path: &Path) -> Result<Vec<Page>, SourceError> {
    let doc = lopdf::Document::load(path).map_err(|e| SourceError::LoadFailed {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let mut pages = Vec::new();
    for (index, (&page_num, _object_id)) in doc.get_pages().iter().enumerate() {
        let text = doc.extract_text(&[page_num]).unwrap_or_default();
        pages.push(Page { index, text });
    }
    Ok(pages)
}
