// src/application/ports/markdown.rs

/// Converts Markdown into HTML that is safe to embed verbatim in a page.
pub trait MarkdownRenderer: Send + Sync {
    fn render(&self, markdown: &str) -> String;
}
