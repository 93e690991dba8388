//! Generator module - renders the site to static HTML files

use anyhow::Result;
use chrono::Datelike;
use std::fs;
use tera::Context;
use walkdir::WalkDir;

use crate::content::Post;
use crate::helpers;
use crate::templates::{ConfigData, NavPost, PostData, TemplateRenderer, STYLESHEET};
use crate::Quill;

/// Static site generator using the embedded templates
pub struct Generator {
    quill: Quill,
    renderer: TemplateRenderer,
}

impl Generator {
    /// Create a new generator
    pub fn new(quill: &Quill) -> Result<Self> {
        let renderer = TemplateRenderer::new()?;
        Ok(Self {
            quill: quill.clone(),
            renderer,
        })
    }

    /// Generate the entire site
    pub fn generate(&self, posts: &[Post]) -> Result<()> {
        fs::create_dir_all(&self.quill.public_dir)?;

        self.write_stylesheet()?;
        self.copy_source_assets()?;

        // The loader sorts newest-first; keep that invariant locally too
        let mut sorted_posts: Vec<_> = posts.to_vec();
        sorted_posts.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.slug.cmp(&b.slug)));

        let config_data = self.build_config_data();

        self.generate_home(&config_data)?;
        self.generate_blog_index(&sorted_posts, &config_data)?;
        self.generate_post_pages(&sorted_posts, &config_data)?;
        self.generate_not_found(&config_data)?;
        self.generate_atom_feed(&sorted_posts)?;

        Ok(())
    }

    /// Build config data for templates
    fn build_config_data(&self) -> ConfigData {
        let config = &self.quill.config;
        ConfigData {
            title: config.title.clone(),
            description: config.description.clone(),
            author: config.author.clone(),
            url: config.url.clone(),
            root: config.root.clone(),
            blog_dir: config.blog_dir.clone(),
            bio: config.bio.clone(),
            social: config.social.clone(),
        }
    }

    /// Create a base context with common variables
    fn create_base_context(&self, config_data: &ConfigData) -> Context {
        let mut context = Context::new();
        context.insert("config", config_data);
        context.insert(
            "current_year",
            &chrono::Local::now().year().to_string(),
        );
        context
    }

    fn post_data(&self, post: &Post) -> PostData {
        PostData {
            title: post.title.clone(),
            date: helpers::long_date(&post.date),
            description: post.description.clone(),
            author: post.author.clone(),
            path: helpers::url_for(&self.quill.config, &post.path),
            permalink: post.permalink.clone(),
            tags: post.tags.clone(),
            content: post.content.clone(),
            reading_time: post.reading_time,
            image_url: post.image.as_ref().map(|i| i.url.clone()),
            image_alt: post
                .image
                .as_ref()
                .and_then(|i| i.alt.clone())
                .unwrap_or_default(),
        }
    }

    /// Generate the home page
    fn generate_home(&self, config_data: &ConfigData) -> Result<()> {
        let mut context = self.create_base_context(config_data);
        context.insert("page_title", "Home");
        context.insert("page_description", &self.quill.config.description);
        context.insert("page_url", &self.quill.config.url);

        let html = self.renderer.render("home.html", &context)?;
        self.write_page("index.html", &html)
    }

    /// Generate the blog index, all posts newest-first
    fn generate_blog_index(&self, posts: &[Post], config_data: &ConfigData) -> Result<()> {
        let post_data: Vec<PostData> = posts.iter().map(|p| self.post_data(p)).collect();

        let mut context = self.create_base_context(config_data);
        context.insert("page_title", "Blog");
        context.insert("posts", &post_data);

        let html = self.renderer.render("blog.html", &context)?;
        let index_path = format!("{}/index.html", self.quill.config.blog_dir);
        self.write_page(&index_path, &html)?;
        tracing::info!("Generated blog index ({} posts)", posts.len());

        Ok(())
    }

    /// Generate individual post pages with previous/next navigation
    fn generate_post_pages(&self, posts: &[Post], config_data: &ConfigData) -> Result<()> {
        for (i, post) in posts.iter().enumerate() {
            // posts is newest-first: previous = older, next = newer
            let prev_post = posts.get(i + 1).map(|p| NavPost {
                title: p.title.clone(),
                path: helpers::url_for(&self.quill.config, &p.path),
            });
            let next_post = (i > 0).then(|| NavPost {
                title: posts[i - 1].title.clone(),
                path: helpers::url_for(&self.quill.config, &posts[i - 1].path),
            });

            let mut context = self.create_base_context(config_data);
            context.insert("page_title", &post.title);
            context.insert("page_description", &post.description);
            context.insert("page_url", &post.permalink);
            if let Some(image) = &post.image {
                let image_url = if image.url.starts_with('/') {
                    helpers::full_url_for(&self.quill.config, &image.url)
                } else {
                    image.url.clone()
                };
                context.insert("page_image", &image_url);
            }
            context.insert("post", &self.post_data(post));

            let discuss_url = format!(
                "https://mobile.twitter.com/search?q={}",
                helpers::encode_url(&post.permalink)
            );
            context.insert("discuss_url", &discuss_url);

            if let Some(ref prev) = prev_post {
                context.insert("prev_post", prev);
            }
            if let Some(ref next) = next_post {
                context.insert("next_post", next);
            }

            let html = self.renderer.render("post.html", &context)?;

            let clean_path = post.path.trim_start_matches('/');
            let output_path = format!("{}index.html", clean_path);
            self.write_page(&output_path, &html)?;
            tracing::debug!("Generated post: {}", post.slug);
        }

        Ok(())
    }

    /// Generate the 404 page
    fn generate_not_found(&self, config_data: &ConfigData) -> Result<()> {
        let mut context = self.create_base_context(config_data);
        context.insert("page_title", "404: Not found");

        let html = self.renderer.render("404.html", &context)?;
        self.write_page("404.html", &html)
    }

    /// Generate the Atom feed
    fn generate_atom_feed(&self, posts: &[Post]) -> Result<()> {
        let config = &self.quill.config;
        let base_url = config.url.trim_end_matches('/');

        let mut feed = String::new();
        feed.push_str(r#"<?xml version="1.0" encoding="utf-8"?>"#);
        feed.push('\n');
        feed.push_str(r#"<feed xmlns="http://www.w3.org/2005/Atom">"#);
        feed.push('\n');
        feed.push_str(&format!("  <title>{}</title>\n", escape_xml(&config.title)));
        feed.push_str(&format!(
            "  <link href=\"{}/atom.xml\" rel=\"self\"/>\n",
            base_url
        ));
        feed.push_str(&format!("  <link href=\"{}/\"/>\n", base_url));
        feed.push_str(&format!(
            "  <updated>{}</updated>\n",
            chrono::Utc::now().to_rfc3339()
        ));
        feed.push_str(&format!("  <id>{}/</id>\n", base_url));
        feed.push_str(&format!(
            "  <author><name>{}</name></author>\n",
            escape_xml(&config.author)
        ));

        for post in posts.iter().take(config.feed_limit) {
            feed.push_str("  <entry>\n");
            feed.push_str(&format!("    <title>{}</title>\n", escape_xml(&post.title)));
            feed.push_str(&format!("    <link href=\"{}\"/>\n", post.permalink));
            feed.push_str(&format!("    <id>{}</id>\n", post.permalink));
            feed.push_str(&format!(
                "    <published>{}</published>\n",
                post.date.to_rfc3339()
            ));
            feed.push_str(&format!(
                "    <updated>{}</updated>\n",
                post.date.to_rfc3339()
            ));
            feed.push_str(&format!(
                "    <summary>{}</summary>\n",
                escape_xml(&post.description)
            ));
            let content_with_full_urls = convert_relative_urls_to_absolute(&post.content, base_url);
            let clean_content = strip_invalid_xml_chars(&content_with_full_urls);
            feed.push_str(&format!(
                "    <content type=\"html\"><![CDATA[{}]]></content>\n",
                clean_content
            ));
            feed.push_str("  </entry>\n");
        }

        feed.push_str("</feed>\n");

        fs::write(self.quill.public_dir.join("atom.xml"), feed)?;
        tracing::info!("Generated atom.xml");

        Ok(())
    }

    /// Write the embedded stylesheet
    fn write_stylesheet(&self) -> Result<()> {
        self.write_page("css/style.css", STYLESHEET)
    }

    /// Write a file under the public directory, creating parents as needed
    fn write_page(&self, relative: &str, content: &str) -> Result<()> {
        let output_path = self.quill.public_dir.join(relative);
        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| anyhow::anyhow!("Failed to create dir {:?}: {}", parent, e))?;
        }
        fs::write(&output_path, content)
            .map_err(|e| anyhow::anyhow!("Failed to write {:?}: {}", output_path, e))?;
        Ok(())
    }

    /// Copy source assets (images, etc.) to the public directory
    ///
    /// Markdown files and `_`-prefixed directories (content, drafts) are
    /// skipped; everything else is copied verbatim.
    fn copy_source_assets(&self) -> Result<()> {
        let source_dir = &self.quill.source_dir;
        if !source_dir.exists() {
            return Ok(());
        }

        for entry in WalkDir::new(source_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let ext = path.extension().and_then(|e| e.to_str());
            if matches!(ext, Some("md") | Some("markdown")) {
                continue;
            }

            let relative = path.strip_prefix(source_dir)?;
            if relative
                .components()
                .any(|c| c.as_os_str().to_string_lossy().starts_with('_'))
            {
                continue;
            }

            let dest = self.quill.public_dir.join(relative);
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(path, &dest)?;
        }

        Ok(())
    }
}

/// Escape XML special characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Convert relative URLs in HTML content to absolute URLs
///
/// Feed readers resolve nothing; `href="/..."` and `src="/..."` must be
/// rewritten against the site URL.
fn convert_relative_urls_to_absolute(content: &str, base_url: &str) -> String {
    content
        .replace("href=\"/", &format!("href=\"{}/", base_url))
        .replace("src=\"/", &format!("src=\"{}/", base_url))
        .replace("href='/", &format!("href='{}/", base_url))
        .replace("src='/", &format!("src='{}/", base_url))
}

/// Strip invalid XML control characters (except tab, newline, carriage return)
fn strip_invalid_xml_chars(s: &str) -> String {
    s.chars()
        .filter(|&c| {
            c == '\t'
                || c == '\n'
                || c == '\r'
                || ('\u{0020}'..='\u{D7FF}').contains(&c)
                || ('\u{E000}'..='\u{FFFD}').contains(&c)
                || ('\u{10000}'..='\u{10FFFF}').contains(&c)
        })
        .collect()
}
