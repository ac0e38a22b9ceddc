//! Create a new post

use anyhow::Result;
use chrono::NaiveDate;
use std::fs;
use std::path::PathBuf;

use crate::content::{MetaValue, Metadata, ParseError};
use crate::Blog;

/// Create a new post file with a scaffolded header
pub fn create_post(
    blog: &Blog,
    title: &str,
    summary: &str,
    published_at: NaiveDate,
) -> Result<PathBuf> {
    let slug = slug::slugify(title);
    if slug.is_empty() {
        anyhow::bail!("Cannot derive a file name from title {:?}", title);
    }

    let mut metadata = Metadata::new();
    metadata.insert("title", MetaValue::Scalar(title.to_string()));
    metadata.insert(
        "publishedAt",
        MetaValue::Scalar(published_at.format("%Y-%m-%d").to_string()),
    );
    metadata.insert("summary", MetaValue::Scalar(summary.to_string()));

    let header = match metadata.to_header() {
        Ok(header) => header,
        Err(ParseError::UnwritableField(field)) => anyhow::bail!(
            "The {} cannot contain line breaks or `---`",
            field
        ),
        Err(e) => return Err(e.into()),
    };

    fs::create_dir_all(&blog.posts_dir)?;

    let extension = blog.config.post_extension.trim_start_matches('.');
    let file_path = blog.posts_dir.join(format!("{}.{}", slug, extension));

    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    fs::write(&file_path, format!("{}\n", header))?;
    tracing::info!("Created: {:?}", file_path);

    Ok(file_path)
}

/// Run the new command
pub fn run(blog: &Blog, title: &str, summary: &str) -> Result<()> {
    let today = chrono::Local::now().date_naive();
    let path = create_post(blog, title, summary, today)?;
    println!("Created: {:?}", path);
    Ok(())
}
