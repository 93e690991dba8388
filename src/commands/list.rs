//! List site content

use anyhow::Result;

use crate::content::loader::ContentLoader;
use crate::Quill;

/// List site content by type
pub fn run(quill: &Quill, content_type: &str) -> Result<()> {
    let loader = ContentLoader::new(quill);

    match content_type {
        "post" | "posts" => {
            let posts = loader.load_posts()?;
            println!("Posts ({}):", posts.len());
            for post in posts {
                println!(
                    "  {} - {} [{}]",
                    post.date.format("%Y-%m-%d"),
                    post.title,
                    post.source
                );
            }
        }
        "tag" | "tags" => {
            let posts = loader.load_posts()?;
            let mut tags: std::collections::HashMap<String, usize> =
                std::collections::HashMap::new();
            for post in &posts {
                for tag in &post.tags {
                    *tags.entry(tag.clone()).or_insert(0) += 1;
                }
            }
            println!("Tags ({}):", tags.len());
            let mut tags: Vec<_> = tags.into_iter().collect();
            tags.sort_by(|a, b| b.1.cmp(&a.1));
            for (tag, count) in tags {
                println!("  {} ({})", tag, count);
            }
        }
        _ => {
            anyhow::bail!("Unknown type: {}. Available: post, tag", content_type);
        }
    }

    Ok(())
}
