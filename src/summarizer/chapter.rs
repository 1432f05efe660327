use super::{AdapterError, Summarize};
use crate::chunker::Chunker;

/// Highlight target length bounds
const HIGHLIGHT_BOUNDS: (usize, usize) = (10, 60);

/// Per-chunk body summary target length bounds
const BODY_BOUNDS: (usize, usize) = (30, 130);

/// Derived summary content for one chapter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterSummary {
    /// Short extract from a single whole-chapter call
    pub highlight: String,
    /// Per-chunk summaries in chunk order, one per line
    pub body: String,
}

/// Orchestrates chunking and the summarization engine for one chapter
pub struct ChapterSummarizer<'a> {
    engine: &'a dyn Summarize,
}

impl<'a> ChapterSummarizer<'a> {
    pub fn new(engine: &'a dyn Summarize) -> Self {
        Self { engine }
    }

    /// Produce highlight and body summary for a chapter's text.
    ///
    /// A failed or empty chunk contributes an empty line but does not stop
    /// its siblings; the chapter fails only when every chunk fails. The
    /// highlight call is not chunked: a chapter longer than the engine's
    /// input bound is summarized as-is and may be truncated by the engine.
    pub fn summarize_chapter(&self, text: &str) -> Result<ChapterSummary, AdapterError> {
        let highlight = self
            .engine
            .summarize(text, HIGHLIGHT_BOUNDS.0, HIGHLIGHT_BOUNDS.1)
            .unwrap_or_default();

        let chunker = Chunker::new(self.engine.max_input_len());
        let chunks = chunker.chunk(text);

        let mut lines = Vec::with_capacity(chunks.len());
        let mut failures = 0;
        for chunk in &chunks {
            match self.engine.summarize(chunk, BODY_BOUNDS.0, BODY_BOUNDS.1) {
                Ok(summary) => lines.push(summary),
                Err(e) => {
                    eprintln!("[summarizer] Chunk failed: {}", e);
                    failures += 1;
                    lines.push(String::new());
                }
            }
        }

        if !chunks.is_empty() && failures == chunks.len() {
            return Err(AdapterError::AllChunksFailed);
        }

        Ok(ChapterSummary {
            highlight,
            body: lines.join("\n"),
        })
    }
}
