use crate::document::Page;

/// Keyword that marks a page as the start of a new chapter
const HEADING_KEYWORD: &str = "chapter";

/// Default title for untitled leading content
const DEFAULT_TITLE: &str = "Introduction";

/// A detected chapter: a title plus the contiguous run of pages it covers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chapter {
    /// First line of the heading page's original text, or "Introduction"
    pub title: String,
    /// 0-based page indices, in original order
    pub pages: Vec<usize>,
}

/// Partition the pages of a document into chapters.
///
/// A page opens a new chapter when its trimmed, lowercased text starts with
/// "chapter". A heading page always belongs to the chapter it starts. Pages
/// before the first heading form an "Introduction" chapter; if the very first
/// page is a heading, no empty introduction is emitted. The returned chapters
/// cover every page index exactly once, in order.
pub fn detect_chapters(pages: &[Page]) -> Vec<Chapter> {
    let mut chapters = Vec::new();
    let mut current = Chapter {
        title: DEFAULT_TITLE.to_string(),
        pages: Vec::new(),
    };

    for page in pages {
        if is_heading(&page.text) {
            if !current.pages.is_empty() {
                chapters.push(current);
            }
            current = Chapter {
                title: first_line(&page.text),
                pages: vec![page.index],
            };
        } else {
            current.pages.push(page.index);
        }
    }

    if !current.pages.is_empty() {
        chapters.push(current);
    }
    chapters
}

fn is_heading(text: &str) -> bool {
    text.trim().to_lowercase().starts_with(HEADING_KEYWORD)
}

/// First line of the original (non-normalized) page text, kept verbatim
fn first_line(text: &str) -> String {
    text.lines().next().unwrap_or("").to_string()
}
