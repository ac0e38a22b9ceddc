//! Render the author card of a post

use anyhow::{Context, Result};

use crate::Blog;

/// Print the author card HTML for `slug`
pub fn run(blog: &Blog, slug: &str) -> Result<()> {
    println!("{}", render(blog, slug)?);
    Ok(())
}

pub fn render(blog: &Blog, slug: &str) -> Result<String> {
    let post = blog
        .find_post(slug)?
        .with_context(|| format!("No post with slug {:?}", slug))?;

    match blog.helpers().author_card(&post) {
        Some(html) => Ok(html),
        None => anyhow::bail!("Post {:?} has no author", slug),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_render_author_card() {
        let tmp = tempfile::tempdir().unwrap();
        let blog = Blog::new(tmp.path()).unwrap();
        fs::create_dir_all(&blog.posts_dir).unwrap();
        fs::write(
            blog.posts_dir.join("with.mdx"),
            "---\ntitle: With\nauthor:\n  name: Jane Doe\n  bio: Writes\n---\n",
        )
        .unwrap();
        fs::write(blog.posts_dir.join("without.mdx"), "---\ntitle: Without\n---\n").unwrap();

        assert!(render(&blog, "with").unwrap().contains(">JD</div>"));
        let err = render(&blog, "without").unwrap_err();
        assert!(err.to_string().contains("has no author"));
    }
}
