//! Markdown rendering for assistant answers.

use pulldown_cmark::{html, Options, Parser};

/// Renders an assistant answer to HTML. Tables and strikethrough are common
/// in generated answers, so both extensions are on.
pub fn render_markdown(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(source, options);
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_paragraph() {
        assert_eq!(render_markdown("hello"), "<p>hello</p>\n");
    }

    #[test]
    fn test_renders_code_fence() {
        let html = render_markdown("```rust\nlet x = 1;\n```");
        assert!(html.contains("<pre><code"));
        assert!(html.contains("let x = 1;"));
    }

    #[test]
    fn test_renders_inline_code_and_emphasis() {
        let html = render_markdown("use `topK` for *retrieval*");
        assert!(html.contains("<code>topK</code>"));
        assert!(html.contains("<em>retrieval</em>"));
    }
}
