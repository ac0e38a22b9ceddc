//! Post model

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::Metadata;
use crate::helpers::parse_date_string;

/// A blog post loaded from the posts directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    /// Header fields in declaration order
    pub metadata: Metadata,

    /// File stem, used to address the post
    pub slug: String,

    /// Body text with the header block removed
    pub content: String,
}

impl BlogPost {
    pub fn new(metadata: Metadata, slug: String, content: String) -> Self {
        Self {
            metadata,
            slug,
            content,
        }
    }

    /// Title, falling back to the slug
    pub fn title(&self) -> &str {
        self.metadata.title().unwrap_or(&self.slug)
    }

    /// Publication date read from `publishedAt`, if present and readable
    pub fn published_at(&self) -> Option<NaiveDateTime> {
        self.metadata
            .published_at()
            .and_then(|s| parse_date_string(s).ok())
    }
}

/// Sort posts by publication date, newest first
///
/// Posts without a readable date go last, keeping their relative order.
pub fn sort_newest_first(posts: &mut [BlogPost]) {
    posts.sort_by(|a, b| b.published_at().cmp(&a.published_at()));
}
