//! Presentation helpers
//!
//! Date formatting, URL generation and the author card.

mod author;
mod date;
mod html;
mod url;

pub use author::*;
pub use date::*;
pub use html::*;
pub use url::*;

use chrono::NaiveDateTime;

use crate::config::SiteConfig;
use crate::content::BlogPost;

/// Helpers bound to a site configuration
pub struct Helpers {
    config: SiteConfig,
}

impl Helpers {
    /// Create a new helpers instance
    pub fn new(config: SiteConfig) -> Self {
        Self { config }
    }

    /// URL path of a post
    pub fn post_url(&self, slug: &str) -> String {
        post_url(&self.config, slug)
    }

    /// Full URL of a post, including the domain
    pub fn post_permalink(&self, slug: &str) -> String {
        full_url_for(&self.config, &self.post_url(slug))
    }

    /// Format a date as seen from `now`, with a relative suffix if the
    /// site enables it
    pub fn date(&self, date: &str, now: &NaiveDateTime) -> Result<String, DateError> {
        format_date_at(date, self.config.relative_dates, now)
    }

    /// Author card for a post, if it names an author
    pub fn author_card(&self, post: &BlogPost) -> Option<String> {
        post.metadata.author().map(|a| render_author_card(&a))
    }
}
