// Public API exports
pub mod chunker;
pub mod detector;
pub mod document;
pub mod pipeline;
pub mod render;
pub mod summarizer;

// Re-export main types for convenience
pub use document::{Document, Page, SourceError};

pub use detector::{detect_chapters, Chapter};

pub use chunker::{period_space_units, Chunker, SentenceSplitter, DEFAULT_MAX_CHARS};

pub use summarizer::{
    AdapterError, ChapterSummarizer, ChapterSummary, Summarize, SummarizerClient,
};

pub use render::{render, ChapterArtifact, RenderError};

pub use pipeline::{output_dir, process_document, run, RunReport};
