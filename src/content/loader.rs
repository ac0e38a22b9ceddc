//! Post loader - reads posts from the posts directory

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use super::{BlogPost, Metadata};
use crate::Blog;

/// Loads posts from the configured posts directory
pub struct PostLoader<'a> {
    blog: &'a Blog,
}

impl<'a> PostLoader<'a> {
    /// Create a new post loader
    pub fn new(blog: &'a Blog) -> Self {
        Self { blog }
    }

    /// Load every post file directly inside the posts directory
    ///
    /// Posts come back in directory-listing order, which depends on the
    /// filesystem.
    pub fn load_posts(&self) -> Result<Vec<BlogPost>> {
        let posts_dir = &self.blog.posts_dir;
        let extension = self.blog.config.post_extension.as_str();

        let mut posts = Vec::new();

        for entry in WalkDir::new(posts_dir)
            .follow_links(true)
            .min_depth(1)
            .max_depth(1)
        {
            let entry =
                entry.with_context(|| format!("Failed to list posts in {:?}", posts_dir))?;
            let path = entry.path();
            if entry.file_type().is_file() && has_extension(path, extension) {
                posts.push(load_post(path)?);
            }
        }

        tracing::info!("Loaded {} posts from {:?}", posts.len(), posts_dir);

        Ok(posts)
    }
}

/// Load a single post from a file
pub fn load_post(path: &Path) -> Result<BlogPost> {
    let raw = fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
    let (metadata, content) =
        Metadata::parse(&raw).with_context(|| format!("Failed to parse {:?}", path))?;

    let slug = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();

    if slug::slugify(&slug) != slug {
        tracing::warn!("Post {:?} has a slug that is not URL-safe: {:?}", path, slug);
    }

    tracing::debug!("Loaded post {:?} ({} header fields)", slug, metadata.len());

    Ok(BlogPost::new(metadata, slug, content))
}

/// Check a file's extension, ignoring any leading dot in `extension`
fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == extension.trim_start_matches('.'))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;

    fn blog_in(dir: &Path) -> Blog {
        Blog::with_config(dir, SiteConfig::default())
    }

    fn write_post(blog: &Blog, name: &str, content: &str) {
        fs::create_dir_all(&blog.posts_dir).unwrap();
        fs::write(blog.posts_dir.join(name), content).unwrap();
    }

    #[test]
    fn test_load_posts_filters_by_extension() {
        let tmp = tempfile::tempdir().unwrap();
        let blog = blog_in(tmp.path());
        write_post(&blog, "first-post.mdx", "---\ntitle: First\n---\nHello");
        write_post(&blog, "notes.md", "---\ntitle: Not a post\n---\n");
        write_post(&blog, "draft.mdx.bak", "---\ntitle: Backup\n---\n");
        fs::create_dir_all(blog.posts_dir.join("nested.mdx")).unwrap();
        write_post(&blog, "nested.mdx/inner.mdx", "---\ntitle: Inner\n---\n");

        let posts = PostLoader::new(&blog).load_posts().unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].slug, "first-post");
        assert_eq!(posts[0].metadata.title(), Some("First"));
        assert_eq!(posts[0].content, "Hello");
    }

    #[test]
    fn test_load_posts_custom_extension() {
        let tmp = tempfile::tempdir().unwrap();
        let mut config = SiteConfig::default();
        config.post_extension = ".md".to_string();
        let blog = Blog::with_config(tmp.path(), config);
        write_post(&blog, "a.md", "---\ntitle: A\n---\n");
        write_post(&blog, "b.mdx", "---\ntitle: B\n---\n");

        let posts = PostLoader::new(&blog).load_posts().unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].slug, "a");
    }

    #[test]
    fn test_load_post_saved_with_byte_order_mark() {
        let tmp = tempfile::tempdir().unwrap();
        let blog = blog_in(tmp.path());
        write_post(&blog, "bom.mdx", "\u{feff}---\ntitle: Marked\n---\nbody");

        let posts = PostLoader::new(&blog).load_posts().unwrap();
        assert_eq!(posts[0].metadata.title(), Some("Marked"));
        assert_eq!(posts[0].content, "body");
    }

    #[test]
    fn test_missing_header_reports_path() {
        let tmp = tempfile::tempdir().unwrap();
        let blog = blog_in(tmp.path());
        write_post(&blog, "broken.mdx", "no header here");

        let err = PostLoader::new(&blog).load_posts().unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("broken.mdx"));
        assert!(message.contains("missing header block"));
    }

    #[test]
    fn test_missing_posts_dir_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let blog = blog_in(tmp.path());
        assert!(PostLoader::new(&blog).load_posts().is_err());
    }

    #[test]
    fn test_has_extension() {
        assert!(has_extension(Path::new("a/b.mdx"), "mdx"));
        assert!(has_extension(Path::new("b.mdx"), ".mdx"));
        assert!(!has_extension(Path::new("b.md"), "mdx"));
        assert!(!has_extension(Path::new("mdx"), "mdx"));
    }
}
