//! List posts

use anyhow::Result;
use chrono::{Local, NaiveDateTime};
use std::fmt::Write;

use crate::Blog;

/// Print all posts, newest first
pub fn run(blog: &Blog) -> Result<()> {
    print!("{}", render(blog, &Local::now().naive_local())?);
    Ok(())
}

/// Build the post listing as seen from `now`
pub fn render(blog: &Blog, now: &NaiveDateTime) -> Result<String> {
    let posts = blog.posts_newest_first()?;
    let helpers = blog.helpers();

    let mut out = String::new();
    writeln!(out, "Posts ({}):", posts.len())?;

    for post in &posts {
        let date = match post.metadata.published_at() {
            Some(date) => helpers.date(date, now).unwrap_or_else(|e| {
                tracing::warn!("Post {:?}: {}", post.slug, e);
                date.to_string()
            }),
            None => "undated".to_string(),
        };
        writeln!(
            out,
            "  {} - {} [{}]",
            date,
            post.title(),
            helpers.post_url(&post.slug)
        )?;
    }

    Ok(out)
}
