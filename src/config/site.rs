//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub author: String,
    /// Intro paragraphs shown on the home page
    pub bio: Vec<String>,
    /// Social links shown on the home page
    pub social: Vec<SocialLink>,

    // URL
    pub url: String,
    pub root: String,

    // Directory
    pub source_dir: String,
    pub public_dir: String,
    /// URL segment for the blog section (`/blog/`)
    pub blog_dir: String,

    // Writing
    pub new_post_name: String,

    // Rendering
    pub highlight_theme: String,

    // Feed
    pub feed_limit: usize,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "My Site".to_string(),
            description: String::new(),
            author: "John Doe".to_string(),
            bio: Vec::new(),
            social: Vec::new(),

            url: "https://example.com".to_string(),
            root: "/".to_string(),

            source_dir: "source".to_string(),
            public_dir: "public".to_string(),
            blog_dir: "blog".to_string(),

            new_post_name: ":title.md".to_string(),

            highlight_theme: "base16-ocean.dark".to_string(),

            feed_limit: 20,
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// The host component of the configured site URL
    ///
    /// Used to decide whether a link points off-site.
    pub fn host(&self) -> &str {
        crate::helpers::url_host(&self.url).unwrap_or(&self.url)
    }
}

/// A social link shown on the home page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
}
