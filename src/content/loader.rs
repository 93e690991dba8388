//! Content loader - loads posts from the source directory

use anyhow::Result;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use super::{ContentError, FrontMatter, MarkdownRenderer, Post};
use crate::helpers;
use crate::Quill;

/// Loads content from the source directory
pub struct ContentLoader<'a> {
    quill: &'a Quill,
    renderer: MarkdownRenderer,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(quill: &'a Quill) -> Self {
        let renderer = MarkdownRenderer::with_theme(
            &quill.config.highlight_theme,
            quill.config.host(),
        );
        Self { quill, renderer }
    }

    /// Load all posts from source/_posts, sorted by date descending
    ///
    /// Any file failing frontmatter validation aborts the load, as does a
    /// pair of files mapping to the same slug.
    pub fn load_posts(&self) -> Result<Vec<Post>> {
        let posts_dir = self.quill.source_dir.join("_posts");
        if !posts_dir.exists() {
            return Ok(Vec::new());
        }

        let mut posts = Vec::new();
        let mut seen: HashMap<String, String> = HashMap::new();

        for entry in WalkDir::new(&posts_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if path.is_file() && is_markdown_file(path) {
                let post = self.load_post(path)?;

                if let Some(first) = seen.get(&post.slug) {
                    return Err(ContentError::DuplicateSlug {
                        slug: post.slug,
                        first: first.clone(),
                        second: post.source,
                    }
                    .into());
                }
                seen.insert(post.slug.clone(), post.source.clone());
                posts.push(post);
            }
        }

        // Newest first; slug as tiebreak keeps the order deterministic
        posts.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.slug.cmp(&b.slug)));

        Ok(posts)
    }

    /// Load a single post from a file
    fn load_post(&self, path: &Path) -> Result<Post> {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {:?}: {}", path, e))?;

        let source = path
            .strip_prefix(&self.quill.source_dir)
            .unwrap_or(path)
            .to_string_lossy()
            .to_string();

        let (fm, body) = FrontMatter::parse(&content).map_err(|e| ContentError::FrontMatter {
            file: path.to_path_buf(),
            source: e,
        })?;

        let date = fm.parse_date();

        let slug = slug::slugify(
            path.file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("untitled"),
        );

        let post_path = format!("/{}/{}/", self.quill.config.blog_dir, slug);
        let permalink = helpers::full_url_for(&self.quill.config, &post_path);

        let content_html = self.renderer.render(body)?;
        let reading_time = helpers::reading_time(body);

        Ok(Post {
            title: fm.title,
            date,
            description: fm.description,
            author: fm.author,
            image: fm.image,
            tags: fm.tags,
            raw: body.to_string(),
            content: content_html,
            slug,
            source,
            full_source: path.to_path_buf(),
            path: post_path,
            permalink,
            reading_time,
        })
    }
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn site_with_posts(posts: &[(&str, &str)]) -> (tempfile::TempDir, Quill) {
        let dir = tempfile::tempdir().unwrap();
        let posts_dir = dir.path().join("source/_posts");
        fs::create_dir_all(&posts_dir).unwrap();
        for (name, content) in posts {
            fs::write(posts_dir.join(name), content).unwrap();
        }
        let quill = Quill::new(dir.path()).unwrap();
        (dir, quill)
    }

    fn post_file(title: &str, date: &str) -> String {
        format!(
            "---\ntitle: {}\ndate: {}\ndescription: d\nauthor: a\n---\n\nBody text.\n",
            title, date
        )
    }

    #[test]
    fn test_load_posts_sorted_descending() {
        let (_dir, quill) = site_with_posts(&[
            ("older-post.md", &post_file("Older", "2024-01-01")),
            ("newer-post.md", &post_file("Newer", "2024-06-01")),
        ]);

        let posts = ContentLoader::new(&quill).load_posts().unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].slug, "newer-post");
        assert_eq!(posts[1].slug, "older-post");
        assert_eq!(posts[0].path, "/blog/newer-post/");
    }

    #[test]
    fn test_invalid_frontmatter_aborts_load() {
        let (_dir, quill) = site_with_posts(&[(
            "broken.md",
            "---\ntitle: No Description\ndate: 2024-01-01\nauthor: a\n---\n\nBody.\n",
        )]);

        let err = ContentLoader::new(&quill).load_posts().unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("description"), "got: {}", message);
        assert!(message.contains("broken.md"), "got: {}", message);
    }

    #[test]
    fn test_duplicate_slug_aborts_load() {
        let (_dir, quill) = site_with_posts(&[
            ("My Post.md", &post_file("One", "2024-01-01")),
            ("my-post.md", &post_file("Two", "2024-02-01")),
        ]);

        let err = ContentLoader::new(&quill).load_posts().unwrap_err();
        assert!(format!("{:#}", err).contains("duplicate slug"));
    }

    #[test]
    fn test_reading_time_attached() {
        let (_dir, quill) =
            site_with_posts(&[("short.md", &post_file("Short", "2024-01-01"))]);

        let posts = ContentLoader::new(&quill).load_posts().unwrap();
        assert_eq!(posts[0].reading_time, 1);
    }
}
