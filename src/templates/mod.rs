//! Built-in theme templates using the Tera template engine
//!
//! All templates are embedded directly in the binary; a site directory
//! carries only its content and configuration.

use anyhow::Result;
use serde::Serialize;
use tera::{Context, Tera};

/// The embedded stylesheet, written to `public/css/style.css`
pub const STYLESHEET: &str = include_str!("theme/css/style.css");

/// Template renderer with the embedded theme
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all theme templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        // The generator emits HTML (post bodies, attribute values it has
        // already escaped); autoescaping would double-escape it.
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("theme/layout.html")),
            ("home.html", include_str!("theme/home.html")),
            ("blog.html", include_str!("theme/blog.html")),
            ("post.html", include_str!("theme/post.html")),
            ("404.html", include_str!("theme/404.html")),
            // Partials
            (
                "partials/head.html",
                include_str!("theme/partials/head.html"),
            ),
            (
                "partials/header.html",
                include_str!("theme/partials/header.html"),
            ),
            (
                "partials/footer.html",
                include_str!("theme/partials/footer.html"),
            ),
        ])?;

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }
}

/// Site configuration data exposed to templates
#[derive(Debug, Clone, Serialize)]
pub struct ConfigData {
    pub title: String,
    pub description: String,
    pub author: String,
    pub url: String,
    pub root: String,
    pub blog_dir: String,
    pub bio: Vec<String>,
    pub social: Vec<crate::config::SocialLink>,
}

/// A post as seen by the blog index and post templates
#[derive(Debug, Clone, Serialize)]
pub struct PostData {
    pub title: String,
    /// Display date, preformatted ("15 January 2024")
    pub date: String,
    pub description: String,
    pub author: String,
    pub path: String,
    pub permalink: String,
    pub tags: Vec<String>,
    pub content: String,
    pub reading_time: usize,
    pub image_url: Option<String>,
    pub image_alt: String,
}

/// Previous/next navigation entry on a post page
#[derive(Debug, Clone, Serialize)]
pub struct NavPost {
    pub title: String,
    pub path: String,
}
