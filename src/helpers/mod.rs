//! Helper functions for rendering
//!
//! Pure functions shared by the markdown renderer, the generator, and the
//! templates: URL classification, reading time, date formatting, HTML
//! escaping.

mod date;
mod html;
mod text;
mod url;

pub use date::*;
pub use html::*;
pub use text::*;
pub use url::*;
