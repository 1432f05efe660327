/// Splits text into sentence units, each carrying its trailing separator so
/// that concatenating the units reproduces the input (up to a trailing
/// space after a final sentence ending in a bare period).
pub type SentenceSplitter = fn(&str) -> Vec<String>;

/// Bounded-length text chunker.
///
/// Accumulates sentence units greedily into chunks of at most `max_chars`
/// characters. A single sentence longer than the bound becomes its own
/// oversized chunk; sentences are never split. Chunking is a pure function of
/// the input text and the bound, safe to re-run.
pub struct Chunker {
    max_chars: usize,
    splitter: SentenceSplitter,
}

impl Chunker {
    /// Chunker with the default period-space sentence boundary
    pub fn new(max_chars: usize) -> Self {
        Self::with_splitter(max_chars, period_space_units)
    }

    /// Chunker with a custom sentence boundary function. The splitter must
    /// return separator-inclusive units; the size bounding here is unchanged.
    pub fn with_splitter(max_chars: usize, splitter: SentenceSplitter) -> Self {
        Self {
            max_chars,
            splitter,
        }
    }

    pub fn max_chars(&self) -> usize {
        self.max_chars
    }

    /// Split `text` into ordered chunks within the configured bound
    pub fn chunk(&self, text: &str) -> Vec<String> {
        let mut chunks = Vec::new();
        let mut current = String::new();

        for unit in (self.splitter)(text) {
            // Seal the current chunk before it would grow past the bound.
            // An oversized unit lands in an empty chunk of its own.
            if !current.is_empty() && current.len() + unit.len() >= self.max_chars {
                chunks.push(std::mem::take(&mut current));
            }
            current.push_str(&unit);
        }

        if !current.is_empty() {
            chunks.push(current);
        }
        chunks
    }
}

/// Default sentence boundary: split on the literal ". " sequence.
///
/// Intentionally naive: abbreviations, decimal numbers, and other
/// punctuation are not special-cased. Interior units get their ". "
/// separator re-attached; the final unit keeps its original tail, except
/// that a bare trailing "." is normalized to ". ". Splitting the
/// concatenation of the units again yields the same units, so chunking is
/// idempotent over its own output.
pub fn period_space_units(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut sentences: Vec<&str> = text.split(". ").collect();
    // A text ending in ". " produces a trailing empty element, not an
    // extra sentence.
    let ends_with_separator = sentences.last() == Some(&"");
    if ends_with_separator {
        sentences.pop();
    }

    let count = sentences.len();
    sentences
        .into_iter()
        .enumerate()
        .map(|(i, sentence)| {
            if i + 1 < count || ends_with_separator {
                format!("{}. ", sentence)
            } else if let Some(stripped) = sentence.strip_suffix('.') {
                format!("{}. ", stripped)
            } else {
                sentence.to_string()
            }
        })
        .collect()
}
