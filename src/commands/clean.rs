//! Clean the public directory

use anyhow::Result;
use std::fs;

use crate::Quill;

/// Remove generated output
pub fn run(quill: &Quill) -> Result<()> {
    if quill.public_dir.exists() {
        fs::remove_dir_all(&quill.public_dir)?;
        tracing::info!("Deleted: {:?}", quill.public_dir);
    }

    Ok(())
}
