//! Content module - header parsing and post loading

mod frontmatter;
pub mod loader;
mod post;

pub use frontmatter::{Author, MetaValue, Metadata, ParseError};
pub use post::{sort_newest_first, BlogPost};
