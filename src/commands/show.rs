//! Show a single post as JSON

use anyhow::{Context, Result};

use crate::Blog;

/// Print the post record for `slug`
pub fn run(blog: &Blog, slug: &str) -> Result<()> {
    println!("{}", render(blog, slug)?);
    Ok(())
}

/// The post record for `slug` as pretty JSON
pub fn render(blog: &Blog, slug: &str) -> Result<String> {
    let post = blog
        .find_post(slug)?
        .with_context(|| format!("No post with slug {:?}", slug))?;
    Ok(serde_json::to_string_pretty(&post)?)
}
