//! Text extraction from various file formats

use crate::error::{Result, ResumeAtsError};
use log::warn;
use pulldown_cmark::{Event, Parser, Tag};
use std::borrow::Cow;
use std::path::Path;
use tokio::fs;

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;

        let text = pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
            ResumeAtsError::PdfExtraction(format!("Failed to extract text from PDF '{}': {}", path.display(), e))
        })?;
        Ok(text)
    }
}

/// Plain text; undecodable bytes become U+FFFD instead of failing the read.
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;
        Ok(decode_lossy(&bytes, path))
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;
        Ok(markdown_to_text(&decode_lossy(&bytes, path)))
    }
}

fn decode_lossy(bytes: &[u8], path: &Path) -> String {
    match String::from_utf8_lossy(bytes) {
        Cow::Borrowed(text) => text.to_string(),
        Cow::Owned(text) => {
            warn!("'{}' is not valid UTF-8; undecodable bytes were replaced", path.display());
            text
        }
    }
}

/// Flatten markdown to one line per block; list items keep a "• " marker so
/// they still read as bullets.
pub fn markdown_to_text(markdown: &str) -> String {
    let mut lines = Vec::new();
    let mut current = String::new();

    for event in Parser::new(markdown) {
        match event {
            Event::Start(Tag::Item) => {
                flush_line(&mut current, &mut lines);
                current.push_str("• ");
            }
            Event::Text(text) | Event::Code(text) => current.push_str(&text),
            Event::SoftBreak => current.push(' '),
            Event::HardBreak | Event::Rule => flush_line(&mut current, &mut lines),
            Event::End(Tag::Paragraph | Tag::Heading(..) | Tag::Item | Tag::CodeBlock(_) | Tag::TableRow) => {
                flush_line(&mut current, &mut lines)
            }
            Event::End(Tag::TableCell) => current.push_str(" | "),
            _ => {}
        }
    }
    flush_line(&mut current, &mut lines);

    lines.join("\n")
}

fn flush_line(current: &mut String, lines: &mut Vec<String>) {
    let line = current.trim().trim_end_matches('|').trim();
    if !line.is_empty() && line != "•" {
        lines.push(line.to_string());
    }
    current.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_headings_and_paragraphs() {
        let text = markdown_to_text("# Jane Roe\n\n## Experience\n\nAcme Corp - Engineer\n(Jan 2020 - Present)\n");
        assert_eq!(text, "Jane Roe\nExperience\nAcme Corp - Engineer (Jan 2020 - Present)");
    }

    #[test]
    fn test_markdown_list_items_become_bullets() {
        let text = markdown_to_text("## Skills\n\n- Rust\n- `tokio`\n* **Go**\n");
        assert_eq!(text, "Skills\n• Rust\n• tokio\n• Go");
    }

    #[test]
    fn test_empty_markdown() {
        assert_eq!(markdown_to_text(""), "");
    }
}
