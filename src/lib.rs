//! blog-rs: content loading for a personal blog
//!
//! Posts are text files that start with a `---` header block of
//! `key: value` lines. This crate parses them into ordered metadata records,
//! formats their dates and renders author cards.

pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;

use anyhow::Result;
use std::path::{Path, PathBuf};

use content::{loader::PostLoader, BlogPost};

/// The blog site
#[derive(Clone)]
pub struct Blog {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Posts directory
    pub posts_dir: PathBuf,
}

impl Blog {
    /// Open a blog from a directory, reading `_config.yml` if it exists
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let config_path = base_dir.as_ref().join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Open a blog with an explicit configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::SiteConfig) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        let posts_dir = base_dir.join(&config.posts_dir);

        Self {
            config,
            base_dir,
            posts_dir,
        }
    }

    /// All posts in directory-listing order
    pub fn get_blog_posts(&self) -> Result<Vec<BlogPost>> {
        PostLoader::new(self).load_posts()
    }

    /// All posts, newest first
    pub fn posts_newest_first(&self) -> Result<Vec<BlogPost>> {
        let mut posts = self.get_blog_posts()?;
        content::sort_newest_first(&mut posts);
        Ok(posts)
    }

    /// Find a post by slug
    pub fn find_post(&self, slug: &str) -> Result<Option<BlogPost>> {
        Ok(self
            .get_blog_posts()?
            .into_iter()
            .find(|post| post.slug == slug))
    }

    /// Helpers bound to this blog's configuration
    pub fn helpers(&self) -> helpers::Helpers {
        helpers::Helpers::new(self.config.clone())
    }
}
