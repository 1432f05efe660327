use super::*;

#[test]
fn test_small_text_is_one_chunk() {
    let chunker = Chunker::new(1000);
    assert_eq!(chunker.chunk("A. B. C."), vec!["A. B. C. "]);
}

#[test]
fn test_tight_bound_seals_per_sentence() {
    let chunker = Chunker::new(4);
    assert_eq!(chunker.chunk("A. B. C."), vec!["A. ", "B. ", "C. "]);
}

#[test]
fn test_empty_text_yields_no_chunks() {
    let chunker = Chunker::new(100);
    assert!(chunker.chunk("").is_empty());
}

#[test]
fn test_concatenation_reproduces_text_up_to_separator() {
    let text = "First sentence. Second one here. Third. Fourth and last.";
    let chunker = Chunker::new(20);
    let chunks = chunker.chunk(text);

    assert!(chunks.len() > 1);
    assert_eq!(chunks.concat(), format!("{} ", text));
}

#[test]
fn test_no_chunk_exceeds_bound_except_oversized_sentence() {
    let long = "x".repeat(500);
    let text = format!("Short. {}. Also short.", long);
    let chunker = Chunker::new(50);
    let chunks = chunker.chunk(&text);

    for chunk in &chunks {
        assert!(
            chunk.len() <= 50 || !chunk.trim_end().contains(". "),
            "over-long chunk must be a single sentence: {:?}",
            &chunk[..40.min(chunk.len())]
        );
    }
    // The oversized sentence survives intact in its own chunk
    assert!(chunks.iter().any(|c| c.contains(&long)));
}

#[test]
fn test_no_empty_chunks() {
    let long = "y".repeat(100);
    let chunker = Chunker::new(10);
    for chunk in chunker.chunk(&format!("{}. a. b.", long)) {
        assert!(!chunk.is_empty());
    }
}

#[test]
fn test_chunking_is_idempotent() {
    let text = "One sentence. Two sentences. Three of them. And four total.";
    let chunker = Chunker::new(30);

    let first = chunker.chunk(text);
    let rejoined = first.concat();
    let second = chunker.chunk(&rejoined);

    assert_eq!(first, second);
}

#[test]
fn test_rechunking_concatenation_keeps_boundaries() {
    let chunker = Chunker::new(4);

    let first = chunker.chunk("A. B. C.");
    assert_eq!(first, vec!["A. ", "B. ", "C. "]);

    let second = chunker.chunk(&first.concat());
    assert_eq!(second, first);
}

#[test]
fn test_text_without_trailing_period_round_trips_exactly() {
    // Chapter texts end with a newline per page, never a bare period
    let text = "Body A.\nMore body.\n";
    let chunker = Chunker::new(1000);

    let chunks = chunker.chunk(text);
    assert_eq!(chunks.concat(), text);
}

#[test]
fn test_splitter_reattaches_separator_per_sentence() {
    assert_eq!(period_space_units("A. B. C."), vec!["A. ", "B. ", "C. "]);
    assert_eq!(period_space_units("A. B. C. "), vec!["A. ", "B. ", "C. "]);
}

#[test]
fn test_splitter_keeps_non_period_tail_verbatim() {
    assert_eq!(period_space_units("One. Two\n"), vec!["One. ", "Two\n"]);
    assert_eq!(period_space_units("no boundary"), vec!["no boundary"]);
}

#[test]
fn test_splitter_of_empty_text_has_no_units() {
    assert!(period_space_units("").is_empty());
}

#[test]
fn test_custom_splitter_is_honored() {
    fn line_units(text: &str) -> Vec<String> {
        text.split_inclusive('\n').map(str::to_string).collect()
    }

    let chunker = Chunker::with_splitter(8, line_units);
    let chunks = chunker.chunk("aa\nbb\ncc\ndd\n");

    assert_eq!(chunks, vec!["aa\nbb\n", "cc\ndd\n"]);
}

#[test]
fn test_default_max_is_exposed() {
    let chunker = Chunker::new(DEFAULT_MAX_CHARS);
    assert_eq!(chunker.max_chars(), DEFAULT_MAX_CHARS);
}
