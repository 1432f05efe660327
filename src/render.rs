//! Per-chapter PDF output writer.
//!
//! Builds a simple text-only PDF with lopdf primitives: Helvetica, fixed
//! leading, greedy character wrapping, a fixed number of lines per page.
//! Section order mirrors the input artifact: title, highlights (blue),
//! chapter body (black), summary (red). No layout from the source document
//! is preserved.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Object, Stream};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to encode page content: {0}")]
    Encode(String),

    #[error("Failed to write PDF: {0}")]
    Save(String),
}

/// Content of one output document, borrowed from the pipeline
#[derive(Debug)]
pub struct ChapterArtifact<'a> {
    pub title: &'a str,
    pub body: &'a str,
    pub highlight: &'a str,
    pub summary: &'a str,
}

// US Letter, 1-inch-ish margins, 14pt leading
const PAGE_WIDTH: i64 = 612;
const PAGE_HEIGHT: i64 = 792;
const MARGIN: i64 = 54;
const LEADING: i64 = 14;
const FONT_SIZE: i64 = 11;
const LINES_PER_PAGE: usize = 48;
const WRAP_COLUMNS: usize = 90;

const BLACK: (i64, i64, i64) = (0, 0, 0);
const BLUE: (i64, i64, i64) = (0, 0, 1);
const RED: (i64, i64, i64) = (1, 0, 0);

/// Render one chapter artifact to `dest`
pub fn render(artifact: &ChapterArtifact<'_>, dest: &Path) -> Result<(), RenderError> {
    let lines = layout_lines(artifact);
    write_pdf(&lines, dest)
}

/// Flatten the artifact into wrapped, color-tagged lines in reading order
fn layout_lines(artifact: &ChapterArtifact<'_>) -> Vec<(String, (i64, i64, i64))> {
    let mut lines = Vec::new();

    let mut push_block = |text: &str, color| {
        for raw_line in text.lines() {
            if raw_line.is_empty() {
                lines.push((String::new(), color));
                continue;
            }
            for wrapped in wrap(raw_line, WRAP_COLUMNS) {
                lines.push((wrapped, color));
            }
        }
        lines.push((String::new(), color));
    };

    push_block(artifact.title, BLACK);
    push_block(&format!("Highlights: {}", artifact.highlight), BLUE);
    push_block(artifact.body, BLACK);
    push_block(&format!("Summary: {}", artifact.summary), RED);

    lines
}

/// Greedy word wrap; unbroken runs longer than `columns` are hard-split
fn wrap(line: &str, columns: usize) -> Vec<String> {
    let mut out = Vec::new();
    let mut current = String::new();

    for word in line.split_whitespace() {
        let mut word = sanitize(word);
        // Hard-split words that can never fit on one line
        while word.len() > columns {
            if !current.is_empty() {
                out.push(std::mem::take(&mut current));
            }
            let rest = word.split_off(columns);
            out.push(word);
            word = rest;
        }
        if current.is_empty() {
            current = word;
        } else if current.len() + 1 + word.len() <= columns {
            current.push(' ');
            current.push_str(&word);
        } else {
            out.push(std::mem::take(&mut current));
            current = word;
        }
    }

    if !current.is_empty() || out.is_empty() {
        out.push(current);
    }
    out
}

/// Helvetica with literal strings only speaks Latin-ish text; degrade the rest
fn sanitize(word: &str) -> String {
    word.chars()
        .map(|c| match c {
            c if c.is_ascii_graphic() || c == ' ' => c,
            '\u{2018}' | '\u{2019}' => '\'',
            '\u{201C}' | '\u{201D}' => '"',
            '\u{2013}' | '\u{2014}' => '-',
            _ => '?',
        })
        .collect()
}

fn write_pdf(lines: &[(String, (i64, i64, i64))], dest: &Path) -> Result<(), RenderError> {
    let mut doc = lopdf::Document::with_version("1.4");

    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    // At least one page, even for an empty artifact
    let page_line_groups: Vec<&[(String, (i64, i64, i64))]> = if lines.is_empty() {
        vec![&[]]
    } else {
        lines.chunks(LINES_PER_PAGE).collect()
    };

    let mut kids = Vec::new();
    for page_lines in page_line_groups {
        let content = page_content(page_lines);
        let encoded = content
            .encode()
            .map_err(|e| RenderError::Encode(e.to_string()))?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
            "Contents" => content_id,
            "Resources" => resources_id,
        });
        kids.push(Object::Reference(page_id));
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.compress();

    doc.save(dest)
        .map_err(|e| RenderError::Save(e.to_string()))?;
    Ok(())
}

fn page_content(lines: &[(String, (i64, i64, i64))]) -> Content {
    let mut operations = vec![
        Operation::new("BT", vec![]),
        Operation::new("Tf", vec!["F1".into(), FONT_SIZE.into()]),
        Operation::new("TL", vec![LEADING.into()]),
        Operation::new(
            "Td",
            vec![MARGIN.into(), (PAGE_HEIGHT - MARGIN - LEADING).into()],
        ),
    ];

    let mut color = BLACK;
    let mut first = true;
    for (line, line_color) in lines {
        if *line_color != color {
            color = *line_color;
            operations.push(Operation::new(
                "rg",
                vec![color.0.into(), color.1.into(), color.2.into()],
            ));
        }
        if !first {
            operations.push(Operation::new("T*", vec![]));
        }
        first = false;
        if !line.is_empty() {
            operations.push(Operation::new("Tj", vec![Object::string_literal(line.as_str())]));
        }
    }

    operations.push(Operation::new("ET", vec![]));
    Content { operations }
}
