//! Initialize a new site

use anyhow::Result;
use std::fs;
use std::path::Path;

/// Initialize a new site in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    fs::create_dir_all(target_dir)?;
    fs::create_dir_all(target_dir.join("source/_posts"))?;
    fs::create_dir_all(target_dir.join("source/images"))?;

    let config_content = r#"# Site
title: My Site
description: ''
author: John Doe
bio:
  - I'm a software engineer.
social: []

# URL
url: https://example.com
root: /

# Directory
source_dir: source
public_dir: public
blog_dir: blog

# Writing
new_post_name: :title.md

# Rendering
highlight_theme: base16-ocean.dark

# Feed
feed_limit: 20
"#;

    fs::write(target_dir.join("_config.yml"), config_content)?;

    let now = chrono::Local::now();
    let sample_post = format!(
        r#"---
title: Hello World
date: {}
description: A first post to check everything works.
author: John Doe
tags:
  - meta
---

Welcome to your new site! Edit or delete this post, then run `quill build`
to regenerate, or `quill serve` to preview with live reload.

Links to other sites, like [the Rust book](https://doc.rust-lang.org/book/),
open in a new tab; [internal links](/blog/) do not.
"#,
        now.format("%Y-%m-%d")
    );

    fs::write(
        target_dir.join("source/_posts/hello-world.md"),
        sample_post,
    )?;

    Ok(())
}
