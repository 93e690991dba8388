//! Content validation errors
//!
//! A content file that fails validation aborts the build; these errors
//! carry the offending file (and field, where serde provides it) so the
//! CLI can report exactly what broke.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while parsing a frontmatter block
#[derive(Debug, Error)]
pub enum FrontMatterError {
    #[error("no frontmatter block found (file must start with `---`)")]
    MissingBlock,

    #[error("frontmatter block is not terminated by a closing `---`")]
    Unterminated,

    #[error("invalid frontmatter: {0}")]
    Invalid(#[from] serde_yaml::Error),

    #[error("unrecognized date format: {0:?}")]
    InvalidDate(String),
}

/// Errors raised while loading content files
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("{}: {source}", .file.display())]
    FrontMatter {
        file: PathBuf,
        source: FrontMatterError,
    },

    #[error("duplicate slug {slug:?}: {first} and {second} map to the same page")]
    DuplicateSlug {
        slug: String,
        first: String,
        second: String,
    },
}
