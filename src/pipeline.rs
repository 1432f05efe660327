use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::detector::{detect_chapters, Chapter};
use crate::document::Document;
use crate::render::{render, ChapterArtifact};
use crate::summarizer::{ChapterSummarizer, Summarize};

/// Outcome of one run; a mix of written artifacts and per-chapter failures
/// is a valid terminal state
#[derive(Debug, Default)]
pub struct RunReport {
    /// Destination paths written, in chapter order
    pub written: Vec<PathBuf>,
    /// (1-based chapter ordinal, failure description)
    pub failures: Vec<(usize, String)>,
}

impl RunReport {
    pub fn all_succeeded(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Split the document at `input` into chapters and write one summarized PDF
/// per chapter under `<input stem>_chapters/`.
///
/// Fails fast if the document cannot be loaded; after that, chapters are
/// processed independently and a chapter failure never aborts its successors.
pub fn run(input: &Path, engine: &dyn Summarize) -> Result<RunReport> {
    println!("Processing: {}", input.display());

    let document = Document::open(input).context("Failed to open input document")?;
    process_document(&document, engine, &output_dir(input))
}

/// Drive the per-chapter loop against an already-loaded document
pub fn process_document(
    document: &Document,
    engine: &dyn Summarize,
    out_dir: &Path,
) -> Result<RunReport> {
    let chapters = detect_chapters(document.pages());
    println!("Found {} chapters.", chapters.len());

    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory {}", out_dir.display()))?;

    let summarizer = ChapterSummarizer::new(engine);
    let mut report = RunReport::default();

    for (idx, chapter) in chapters.iter().enumerate() {
        let ordinal = idx + 1;
        println!("Processing {}...", chapter.title);

        let dest = out_dir.join(format!("chapter_{}.pdf", ordinal));
        match process_chapter(document, chapter, &summarizer, &dest) {
            Ok(()) => {
                println!("Saved: {}", dest.display());
                report.written.push(dest);
            }
            Err(e) => {
                eprintln!("[pipeline] Chapter {} failed: {:#}", ordinal, e);
                report.failures.push((ordinal, format!("{:#}", e)));
            }
        }
    }

    println!("Done!");
    Ok(report)
}

fn process_chapter(
    document: &Document,
    chapter: &Chapter,
    summarizer: &ChapterSummarizer<'_>,
    dest: &Path,
) -> Result<()> {
    let text = document.text_of_pages(&chapter.pages);

    let summary = summarizer
        .summarize_chapter(&text)
        .context("Summarization failed for every chunk")?;

    let artifact = ChapterArtifact {
        title: &chapter.title,
        body: &text,
        highlight: &summary.highlight,
        summary: &summary.body,
    };
    render(&artifact, dest)
        .with_context(|| format!("Failed to render {}", dest.display()))?;
    Ok(())
}

/// Output directory derived from the input path: `<stem>_chapters` next to it
pub fn output_dir(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document".to_string());
    input.with_file_name(format!("{}_chapters", stem))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summarizer::AdapterError;

    struct FixedEngine {
        fail: bool,
    }

    impl Summarize for FixedEngine {
        fn summarize(
            &self,
            _text: &str,
            _min_len: usize,
            _max_len: usize,
        ) -> Result<String, AdapterError> {
            if self.fail {
                Err(AdapterError::Server {
                    status: 503,
                    body: "down".to_string(),
                })
            } else {
                Ok("a summary".to_string())
            }
        }

        fn max_input_len(&self) -> usize {
            1000
        }
    }

    fn sample_document() -> Document {
        Document::from_pages(
            "book.pdf",
            vec![
                "Intro text.".to_string(),
                "Chapter 1\nBody A.".to_string(),
                "More body.".to_string(),
                "Chapter 2\nBody B.".to_string(),
            ],
        )
    }

    #[test]
    fn test_output_dir_appends_suffix_to_stem() {
        assert_eq!(
            output_dir(Path::new("/books/novel.pdf")),
            PathBuf::from("/books/novel_chapters")
        );
        assert_eq!(output_dir(Path::new("plain")), PathBuf::from("plain_chapters"));
    }

    #[test]
    fn test_one_artifact_per_chapter_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let engine = FixedEngine { fail: false };

        let report = process_document(&sample_document(), &engine, dir.path()).unwrap();

        assert!(report.all_succeeded());
        assert_eq!(report.written.len(), 3);
        for (i, path) in report.written.iter().enumerate() {
            assert_eq!(
                path.file_name().unwrap().to_str().unwrap(),
                format!("chapter_{}.pdf", i + 1)
            );
            assert!(path.exists());
        }
    }

    #[test]
    fn test_failing_engine_fails_chapters_but_completes_run() {
        let dir = tempfile::tempdir().unwrap();
        let engine = FixedEngine { fail: true };

        let report = process_document(&sample_document(), &engine, dir.path()).unwrap();

        // Every chapter's summarization failed entirely, none aborted the run
        assert_eq!(report.failures.len(), 3);
        assert_eq!(report.written.len(), 0);
        assert_eq!(
            report.failures.iter().map(|(n, _)| *n).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn test_zero_page_document_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let engine = FixedEngine { fail: false };
        let doc = Document::from_pages("empty.pdf", vec![]);

        let report = process_document(&doc, &engine, dir.path()).unwrap();

        assert!(report.all_succeeded());
        assert!(report.written.is_empty());
    }

    #[test]
    fn test_all_blank_pages_still_produce_an_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let engine = FixedEngine { fail: false };
        let doc = Document::from_pages("blank.pdf", vec![String::new(), String::new()]);

        let report = process_document(&doc, &engine, dir.path()).unwrap();

        assert_eq!(report.written.len(), 1);
        assert!(report.written[0].exists());
    }
}
