//! Markdown rendering with syntax highlighting and link annotation

use anyhow::Result;
use pulldown_cmark::{html, CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd};
use syntect::highlighting::ThemeSet;
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

use crate::helpers::{html_escape, is_external_url};

/// Markdown renderer with syntax highlighting
///
/// Links to other origins are rewritten during rendering to open in a new
/// browsing context with `rel="noopener noreferrer"`; same-site and
/// relative links pass through untouched.
pub struct MarkdownRenderer {
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
    theme_name: String,
    site_host: String,
}

impl MarkdownRenderer {
    /// Create a new markdown renderer
    pub fn new(site_host: &str) -> Self {
        Self::with_theme("base16-ocean.dark", site_host)
    }

    /// Create with a specific highlight theme
    pub fn with_theme(theme: &str, site_host: &str) -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
            theme_name: theme.to_string(),
            site_host: site_host.to_string(),
        }
    }

    /// Render markdown to HTML
    pub fn render(&self, markdown: &str) -> Result<String> {
        let options = Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_SMART_PUNCTUATION;
        let parser = Parser::new_ext(markdown, options);

        let mut events: Vec<Event> = Vec::new();
        let mut code_lang: Option<String> = None;
        let mut code_buf = String::new();
        let mut in_code_block = false;
        let mut in_external_link = false;

        for event in parser {
            match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    in_code_block = true;
                    code_lang = match kind {
                        CodeBlockKind::Fenced(lang) if !lang.is_empty() => Some(lang.to_string()),
                        _ => None,
                    };
                    code_buf.clear();
                }
                Event::End(TagEnd::CodeBlock) => {
                    in_code_block = false;
                    let highlighted = self.highlight_code(&code_buf, code_lang.as_deref());
                    events.push(Event::Html(CowStr::from(highlighted)));
                    code_lang = None;
                }
                Event::Text(text) if in_code_block => {
                    code_buf.push_str(&text);
                }
                Event::Start(Tag::Link {
                    link_type,
                    dest_url,
                    title,
                    id,
                }) => {
                    if is_external_url(&dest_url, &self.site_host) {
                        in_external_link = true;
                        let title_attr = if title.is_empty() {
                            String::new()
                        } else {
                            format!(r#" title="{}""#, html_escape(&title))
                        };
                        events.push(Event::Html(CowStr::from(format!(
                            r#"<a href="{}"{} target="_blank" rel="noopener noreferrer">"#,
                            html_escape(&dest_url),
                            title_attr
                        ))));
                    } else {
                        events.push(Event::Start(Tag::Link {
                            link_type,
                            dest_url,
                            title,
                            id,
                        }));
                    }
                }
                Event::End(TagEnd::Link) if in_external_link => {
                    in_external_link = false;
                    events.push(Event::Html(CowStr::from("</a>")));
                }
                _ => events.push(event),
            }
        }

        let mut html_output = String::new();
        html::push_html(&mut html_output, events.into_iter());

        Ok(html_output)
    }

    /// Highlight a code block
    fn highlight_code(&self, code: &str, lang: Option<&str>) -> String {
        let lang = lang.unwrap_or("text");

        let syntax = self
            .syntax_set
            .find_syntax_by_token(lang)
            .or_else(|| self.syntax_set.find_syntax_by_extension(lang))
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());

        let theme = self
            .theme_set
            .themes
            .get(&self.theme_name)
            .unwrap_or_else(|| {
                self.theme_set
                    .themes
                    .values()
                    .next()
                    .expect("No themes available")
            });

        match highlighted_html_for_string(code, &self.syntax_set, syntax, theme) {
            Ok(highlighted) => format!(
                r#"<div class="highlight language-{}">{}</div>"#,
                lang, highlighted
            ),
            Err(_) => {
                // Fallback to plain code block
                let escaped = html_escape(code);
                format!(
                    r#"<pre><code class="language-{}">{}</code></pre>"#,
                    lang, escaped
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn renderer() -> MarkdownRenderer {
        MarkdownRenderer::new("example.com")
    }

    #[test]
    fn test_render_basic_markdown() {
        let html = renderer().render("# Hello World\n\nThis is a test.").unwrap();
        assert!(html.contains("<h1>Hello World</h1>"));
        assert!(html.contains("<p>This is a test.</p>"));
    }

    #[test]
    fn test_render_code_block() {
        let html = renderer().render("```rust\nfn main() {}\n```").unwrap();
        assert!(html.contains("highlight"));
    }

    #[test]
    fn test_external_link_annotated() {
        let html = renderer()
            .render("See [the docs](https://other.org/docs) for more.")
            .unwrap();
        assert!(html.contains(r#"target="_blank""#));
        assert!(html.contains(r#"rel="noopener noreferrer""#));
        assert!(html.contains(">the docs</a>"));
    }

    #[test]
    fn test_internal_link_unannotated() {
        let html = renderer().render("Back to [home](/blog/).").unwrap();
        assert!(html.contains(r#"<a href="/blog/">home</a>"#));
        assert!(!html.contains("target"));
    }

    #[test]
    fn test_same_host_link_unannotated() {
        let html = renderer()
            .render("See [this post](https://example.com/blog/a-post/).")
            .unwrap();
        assert!(!html.contains("target"));
        assert!(!html.contains("noopener"));
    }

    #[test]
    fn test_link_text_unchanged() {
        let html = renderer()
            .render("[click here](https://other.org)")
            .unwrap();
        assert!(html.contains(">click here</a>"));
    }
}
