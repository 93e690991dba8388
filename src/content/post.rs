//! Post model

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::frontmatter::CoverImage;

/// A blog post
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// Post title
    pub title: String,

    /// Publication date
    pub date: DateTime<Local>,

    /// Short description, used in meta tags
    pub description: String,

    /// Post author
    pub author: String,

    /// Optional cover image
    pub image: Option<CoverImage>,

    /// Post tags
    pub tags: Vec<String>,

    /// Raw markdown content
    pub raw: String,

    /// Rendered HTML content
    pub content: String,

    /// Slug (URL-safe name derived from the file stem)
    pub slug: String,

    /// Source file path (relative to the source directory)
    pub source: String,

    /// Full source file path
    pub full_source: PathBuf,

    /// URL path (`/blog/<slug>/`)
    pub path: String,

    /// Full permalink URL
    pub permalink: String,

    /// Estimated reading time in minutes
    pub reading_time: usize,
}

impl Post {
    /// Get the previous (older) post in a date-descending list
    pub fn prev<'a>(&self, posts: &'a [Post]) -> Option<&'a Post> {
        let pos = posts.iter().position(|p| p.slug == self.slug)?;
        posts.get(pos + 1)
    }

    /// Get the next (newer) post in a date-descending list
    pub fn next<'a>(&self, posts: &'a [Post]) -> Option<&'a Post> {
        let pos = posts.iter().position(|p| p.slug == self.slug)?;
        if pos > 0 {
            Some(&posts[pos - 1])
        } else {
            None
        }
    }
}
