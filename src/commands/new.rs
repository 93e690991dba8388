//! Create a new post

use anyhow::Result;
use std::fs;

use crate::Quill;

/// Create a new post from the configured filename pattern
pub fn create_post(quill: &Quill, title: &str, path: Option<&str>) -> Result<()> {
    let now = chrono::Local::now();

    let target_dir = quill.source_dir.join("_posts");
    fs::create_dir_all(&target_dir)?;

    let filename = if let Some(p) = path {
        format!("{}.md", p)
    } else {
        let slug = slug::slugify(title);
        quill
            .config
            .new_post_name
            .replace(":title", &slug)
            .replace(":year", &now.format("%Y").to_string())
            .replace(":month", &now.format("%m").to_string())
            .replace(":day", &now.format("%d").to_string())
    };

    let file_path = target_dir.join(&filename);
    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let content = format!(
        r#"---
title: {}
date: {}
description: ''
author: {}
---

"#,
        title,
        now.format("%Y-%m-%d"),
        quill.config.author
    );

    fs::write(&file_path, content)?;

    println!("Created: {:?}", file_path);

    Ok(())
}

/// Run the new command
pub fn run(quill: &Quill, title: &str) -> Result<()> {
    create_post(quill, title, None)
}
