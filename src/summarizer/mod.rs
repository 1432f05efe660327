mod chapter;
mod client;
mod types;


pub use chapter::{ChapterSummarizer, ChapterSummary};
pub use client::{AdapterError, SummarizerClient};
pub use types::{SummarizeRequest, SummarizeResponse};

/// A summarization engine behind a narrow interface.
///
/// Passed explicitly into the chapter summarizer rather than held as a
/// process-wide instance, so test doubles and concurrent engines both work.
pub trait Summarize {
    /// Summarize `text` into roughly `min_len`..=`max_len` length units.
    fn summarize(&self, text: &str, min_len: usize, max_len: usize)
        -> Result<String, AdapterError>;

    /// Maximum input length (characters) a single call accepts; callers must
    /// chunk anything longer.
    fn max_input_len(&self) -> usize;
}
