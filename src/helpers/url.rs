//! URL helper functions

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::config::SiteConfig;

/// Characters escaped inside a single path segment
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Generate a URL with the root path
///
/// # Examples
/// ```ignore
/// url_for(&config, "/blog/hello") // -> "/site/blog/hello"
/// ```
pub fn url_for(config: &SiteConfig, path: &str) -> String {
    let root = config.root.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}

/// Generate a full URL including the domain
pub fn full_url_for(config: &SiteConfig, path: &str) -> String {
    let base = config.url.trim_end_matches('/');
    format!("{}{}", base, url_for(config, path))
}

/// URL path of a post, with the slug percent-encoded
pub fn post_url(config: &SiteConfig, slug: &str) -> String {
    let slug = utf8_percent_encode(slug, SEGMENT).to_string();
    url_for(config, &format!("blog/{}", slug))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(root: &str) -> SiteConfig {
        let mut config = SiteConfig::default();
        config.url = "https://example.com/".to_string();
        config.root = root.to_string();
        config
    }

    #[test]
    fn test_url_for() {
        let config = test_config("/site/");
        assert_eq!(url_for(&config, "/about"), "/site/about");
        assert_eq!(url_for(&config, ""), "/site/");
        assert_eq!(url_for(&test_config("/"), "about"), "/about");
    }

    #[test]
    fn test_full_url_for() {
        let config = test_config("/");
        assert_eq!(full_url_for(&config, "/blog/x"), "https://example.com/blog/x");
    }

    #[test]
    fn test_post_url_encodes_slug() {
        let config = test_config("/");
        assert_eq!(post_url(&config, "hello-world"), "/blog/hello-world");
        assert_eq!(post_url(&config, "a b/c"), "/blog/a%20b%2Fc");
    }
}
