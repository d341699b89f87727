// src/infrastructure/markdown.rs
use crate::application::ports::markdown::MarkdownRenderer;
use once_cell::sync::Lazy;
use pulldown_cmark::{Options, Parser, html};

/// Allow-list sanitizer shared by every render. Built once, never mutated.
///
/// ammonia's defaults already drop `<script>`/`<style>` together with their
/// contents, every `on*` attribute, and any URL whose scheme is not on the
/// safe list.
static SANITIZER: Lazy<ammonia::Builder<'static>> = Lazy::new(|| {
    let mut builder = ammonia::Builder::default();
    builder.link_rel(Some("noopener noreferrer"));
    builder
});

/// Markdown to HTML via pulldown-cmark, then sanitized with ammonia.
#[derive(Default, Clone)]
pub struct CmarkRenderer;

impl CmarkRenderer {
    fn options() -> Options {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options
    }
}

impl MarkdownRenderer for CmarkRenderer {
    fn render(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, Self::options());
        let mut unsafe_html = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut unsafe_html, parser);

        SANITIZER.clean(&unsafe_html).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(markdown: &str) -> String {
        CmarkRenderer.render(markdown)
    }

    #[test]
    fn heading_becomes_h1() {
        assert!(render("# Hi").contains("<h1>Hi</h1>"));
    }

    #[test]
    fn renders_common_constructs() {
        let out = render("*em* and **strong**\n\n- one\n- two\n\n```\nlet x = 1;\n```\n\n[site](https://example.com)");
        assert!(out.contains("<em>em</em>"));
        assert!(out.contains("<strong>strong</strong>"));
        assert!(out.contains("<li>one</li>"));
        assert!(out.contains("<pre><code>let x = 1;\n</code></pre>"));
        assert!(out.contains("href=\"https://example.com\""));
        assert!(out.contains("rel=\"noopener noreferrer\""));
    }

    #[test]
    fn tables_and_strikethrough_are_enabled() {
        let out = render("| a | b |\n|---|---|\n| 1 | 2 |\n\n~~gone~~");
        assert!(out.contains("<table>"));
        assert!(out.contains("<del>gone</del>"));
    }

    #[test]
    fn raw_script_is_removed_with_its_content() {
        let out = render("before\n\n<script>alert('x')</script>\n\nafter");
        assert!(!out.to_lowercase().contains("<script"));
        assert!(!out.contains("alert"));
        assert!(out.contains("before"));
        assert!(out.contains("after"));
    }

    #[test]
    fn event_handlers_and_javascript_urls_are_stripped() {
        let inputs = [
            "<img src=\"x.png\" onerror=\"alert(1)\">",
            "<a href=\"#\" onclick=\"steal()\">click</a>",
            "[click](javascript:alert(1))",
            "<div onmouseover=\"x()\">hover</div>",
            "<SCRIPT SRC=//evil.example/x.js></SCRIPT>",
            "<iframe src=\"https://evil.example\"></iframe>",
        ];
        for input in inputs {
            let out = render(input).to_lowercase();
            assert!(!out.contains("<script"), "script survived in {out:?}");
            assert!(!out.contains("onerror"), "onerror survived in {out:?}");
            assert!(!out.contains("onclick"), "onclick survived in {out:?}");
            assert!(!out.contains("onmouseover"), "handler survived in {out:?}");
            assert!(!out.contains("javascript:"), "js url survived in {out:?}");
            assert!(!out.contains("<iframe"), "iframe survived in {out:?}");
        }
    }

    #[test]
    fn rendering_is_deterministic() {
        let md = "# Title\n\nSome <b>bold</b> and <span onclick=x>text</span>.";
        assert_eq!(render(md), render(md));
    }
}
