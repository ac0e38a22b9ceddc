//! Site configuration (_config.yml)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,

    // URL
    pub url: String,
    pub root: String,

    // Content
    /// Posts directory, relative to the site directory
    pub posts_dir: String,
    /// Extension of post files, without the dot
    pub post_extension: String,

    // Dates
    /// Append "(3d ago)"-style suffixes when listing posts
    pub relative_dates: bool,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "My Portfolio".to_string(),

            url: "http://localhost:3000".to_string(),
            root: "/".to_string(),

            posts_dir: "app/blog/posts".to_string(),
            post_extension: "mdx".to_string(),

            relative_dates: true,

            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
        let config: SiteConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Invalid configuration in {:?}", path))?;
        tracing::debug!("Loaded configuration from {:?}", path);
        Ok(config)
    }
}
