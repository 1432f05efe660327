mod splitter;

#[cfg(test)]
mod tests;

pub use splitter::{period_space_units, Chunker, SentenceSplitter};

/// Default maximum characters per chunk, matching the summarization
/// engine's practical input bound
pub const DEFAULT_MAX_CHARS: usize = 1000;
