//! HTML helper functions

/// Generate an image tag
///
/// # Examples
/// ```ignore
/// image_tag("/me.png", "Me", 64, Some("rounded-full")) // -> <img src="/me.png" ...>
/// ```
pub fn image_tag(src: &str, alt: &str, size: u32, class: Option<&str>) -> String {
    let class_attr = class
        .map(|c| format!(r#" class="{}""#, html_escape(c)))
        .unwrap_or_default();

    format!(
        r#"<img src="{}" alt="{}" width="{}" height="{}"{}>"#,
        html_escape(src),
        html_escape(alt),
        size,
        size,
        class_attr
    )
}

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
