//! End-to-end build tests: scaffold a site in a temp directory, generate
//! it, and assert on the emitted HTML.

use std::fs;
use std::path::Path;

use quill::Quill;

const CONFIG: &str = r#"
title: Test Site
description: A site for testing
author: Jane Doe
bio:
  - I write software.
url: https://example.com
root: /
social:
  - name: GitHub
    url: https://github.com/janedoe
"#;

fn write_post(dir: &Path, name: &str, title: &str, date: &str, body: &str) {
    let content = format!(
        "---\ntitle: {}\ndate: {}\ndescription: About {}\nauthor: Jane Doe\n---\n\n{}\n",
        title, date, title, body
    );
    fs::write(dir.join("source/_posts").join(name), content).unwrap();
}

fn scaffold() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("source/_posts")).unwrap();
    fs::write(dir.path().join("_config.yml"), CONFIG).unwrap();
    dir
}

fn read(dir: &tempfile::TempDir, relative: &str) -> String {
    fs::read_to_string(dir.path().join(relative)).unwrap()
}

#[test]
fn build_produces_all_pages() {
    let dir = scaffold();
    write_post(dir.path(), "first-post.md", "First Post", "2024-01-10", "Hello.");
    write_post(dir.path(), "second-post.md", "Second Post", "2024-03-05", "World.");

    let quill = Quill::new(dir.path()).unwrap();
    quill.build().unwrap();

    for page in [
        "public/index.html",
        "public/blog/index.html",
        "public/blog/first-post/index.html",
        "public/blog/second-post/index.html",
        "public/404.html",
        "public/atom.xml",
        "public/css/style.css",
    ] {
        assert!(dir.path().join(page).exists(), "missing {}", page);
    }
}

#[test]
fn blog_index_lists_posts_newest_first() {
    let dir = scaffold();
    write_post(dir.path(), "older.md", "Older Post", "2023-06-01", "a");
    write_post(dir.path(), "newer.md", "Newer Post", "2024-06-01", "b");
    write_post(dir.path(), "middle.md", "Middle Post", "2024-01-01", "c");

    let quill = Quill::new(dir.path()).unwrap();
    quill.build().unwrap();

    let index = read(&dir, "public/blog/index.html");

    let newer = index.find("/blog/newer/").expect("newer missing");
    let middle = index.find("/blog/middle/").expect("middle missing");
    let older = index.find("/blog/older/").expect("older missing");
    assert!(newer < middle && middle < older, "index not date-descending");

    // No duplicates
    assert_eq!(index.matches("/blog/newer/").count(), 1);

    // Display dates in long form
    assert!(index.contains("1 June 2024"));
}

#[test]
fn every_slug_resolves_to_one_page_reachable_from_index() {
    let dir = scaffold();
    write_post(dir.path(), "a-post.md", "A", "2024-01-01", "x");
    write_post(dir.path(), "b-post.md", "B", "2024-01-02", "y");

    let quill = Quill::new(dir.path()).unwrap();
    quill.build().unwrap();

    let index = read(&dir, "public/blog/index.html");
    for slug in ["a-post", "b-post"] {
        assert!(index.contains(&format!("/blog/{}/", slug)));
        assert!(dir
            .path()
            .join(format!("public/blog/{}/index.html", slug))
            .exists());
    }
}

#[test]
fn post_page_has_metadata_and_navigation() {
    let dir = scaffold();
    write_post(dir.path(), "older.md", "Older Post", "2024-01-01", "a");
    write_post(dir.path(), "newer.md", "Newer Post", "2024-02-01", "b");

    let quill = Quill::new(dir.path()).unwrap();
    quill.build().unwrap();

    let newer = read(&dir, "public/blog/newer/index.html");
    assert!(newer.contains("Newer Post"));
    assert!(newer.contains("Jane Doe"));
    assert!(newer.contains("1 February 2024"));
    assert!(newer.contains("1 min read"));
    // Newest post: only a "previous" (older) link
    assert!(newer.contains(r#"rel="prev""#));
    assert!(!newer.contains(r#"rel="next""#));
    assert!(newer.contains("/blog/older/"));

    let older = read(&dir, "public/blog/older/index.html");
    assert!(older.contains(r#"rel="next""#));
    assert!(!older.contains(r#"rel="prev""#));
}

#[test]
fn external_links_annotated_internal_links_not() {
    let dir = scaffold();
    write_post(
        dir.path(),
        "links.md",
        "Links",
        "2024-01-01",
        "An [external link](https://other.org/page), a [same-site link](https://example.com/blog/), and a [relative link](/blog/).",
    );

    let quill = Quill::new(dir.path()).unwrap();
    quill.build().unwrap();

    let html = read(&dir, "public/blog/links/index.html");

    // Only the external anchor (and the discuss link) carry the pair
    assert_eq!(html.matches(r#"rel="noopener noreferrer""#).count(), 2);
    assert!(html.contains(
        r#"<a href="https://other.org/page" target="_blank" rel="noopener noreferrer">external link</a>"#
    ));

    // Same-host and relative anchors render bare
    assert!(html.contains(r#"<a href="https://example.com/blog/">same-site link</a>"#));
    assert!(html.contains(r#"<a href="/blog/">relative link</a>"#));
}

#[test]
fn missing_required_field_fails_the_build() {
    let dir = scaffold();
    fs::write(
        dir.path().join("source/_posts/bad.md"),
        "---\ntitle: Bad Post\ndate: 2024-01-01\nauthor: Jane Doe\n---\n\nNo description.\n",
    )
    .unwrap();

    let quill = Quill::new(dir.path()).unwrap();
    let err = quill.build().unwrap_err();
    let message = format!("{:#}", err);
    assert!(message.contains("description"), "got: {}", message);
    assert!(message.contains("bad.md"), "got: {}", message);

    // Nothing deployable was produced
    assert!(!dir.path().join("public/blog/index.html").exists());
}

#[test]
fn duplicate_slugs_fail_the_build() {
    let dir = scaffold();
    write_post(dir.path(), "Same Post.md", "One", "2024-01-01", "a");
    write_post(dir.path(), "same-post.md", "Two", "2024-01-02", "b");

    let quill = Quill::new(dir.path()).unwrap();
    let err = quill.build().unwrap_err();
    assert!(format!("{:#}", err).contains("duplicate slug"));
}

#[test]
fn not_found_page_links_home() {
    let dir = scaffold();
    let quill = Quill::new(dir.path()).unwrap();
    quill.build().unwrap();

    let html = read(&dir, "public/404.html");
    assert!(html.contains("404"));
    assert!(html.contains(r#"href="/""#));
}

#[test]
fn atom_feed_uses_absolute_urls() {
    let dir = scaffold();
    write_post(
        dir.path(),
        "feed-post.md",
        "Feed Post",
        "2024-01-01",
        "See [another post](/blog/other/).",
    );

    let quill = Quill::new(dir.path()).unwrap();
    quill.build().unwrap();

    let feed = read(&dir, "public/atom.xml");
    assert!(feed.contains("<title>Test Site</title>"));
    assert!(feed.contains("https://example.com/blog/feed-post/"));
    assert!(feed.contains(r#"href="https://example.com/blog/other/""#));
}

#[test]
fn source_assets_copied_verbatim() {
    let dir = scaffold();
    fs::create_dir_all(dir.path().join("source/images")).unwrap();
    fs::write(dir.path().join("source/images/photo.jpg"), b"not-a-real-jpeg").unwrap();
    write_post(dir.path(), "p.md", "P", "2024-01-01", "x");

    let quill = Quill::new(dir.path()).unwrap();
    quill.build().unwrap();

    assert!(dir.path().join("public/images/photo.jpg").exists());
    // Markdown sources are not copied
    assert!(!dir.path().join("public/_posts/p.md").exists());
}
