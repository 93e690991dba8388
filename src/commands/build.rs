//! Generate static files

use anyhow::Result;

use crate::content::loader::ContentLoader;
use crate::generator::Generator;
use crate::Quill;

/// Generate the static site
pub fn run(quill: &Quill) -> Result<()> {
    let start = std::time::Instant::now();

    let loader = ContentLoader::new(quill);
    let posts = loader.load_posts()?;

    tracing::info!("Loaded {} posts", posts.len());

    let generator = Generator::new(quill)?;
    generator.generate(&posts)?;

    let duration = start.elapsed();
    tracing::info!("Generated in {:.2}s", duration.as_secs_f64());

    Ok(())
}
