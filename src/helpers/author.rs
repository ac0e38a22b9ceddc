//! Author profile card

use super::html::{html_escape, image_tag};
use crate::content::Author;

/// Background classes for avatar placeholders
pub const AVATAR_PALETTE: [&str; 6] = [
    "bg-blue-500",
    "bg-green-500",
    "bg-purple-500",
    "bg-pink-500",
    "bg-indigo-500",
    "bg-orange-500",
];

/// Up to two uppercased initials, one per name token
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect::<String>()
        .to_uppercase()
        .chars()
        .take(2)
        .collect()
}

/// Placeholder color for a name, picked by its length
pub fn avatar_color(name: &str) -> &'static str {
    AVATAR_PALETTE[name.chars().count() % AVATAR_PALETTE.len()]
}

/// Render the author card shown under a post
pub fn render_author_card(author: &Author) -> String {
    let avatar = match author.avatar_url.as_deref().filter(|url| !url.is_empty()) {
        Some(url) => image_tag(
            url,
            &format!("{}'s avatar", author.name),
            64,
            Some("rounded-full object-cover"),
        ),
        None => format!(
            r#"<div class="flex h-16 w-16 items-center justify-center rounded-full {} text-white font-bold text-xl">{}</div>"#,
            avatar_color(&author.name),
            html_escape(&initials(&author.name))
        ),
    };

    let mut html =
        String::from(r#"<div class="mt-12 border-t border-neutral-200 pt-8 dark:border-neutral-700">"#);
    html.push_str(r#"<div class="flex items-start gap-4">"#);
    html.push_str(&avatar);
    html.push_str(r#"<div class="flex-1">"#);
    html.push_str(&format!(
        r#"<h3 class="text-lg font-bold text-neutral-800 dark:text-neutral-100">{}</h3>"#,
        html_escape(&author.name)
    ));
    html.push_str(&format!(
        r#"<p class="mt-2 text-sm text-neutral-600 dark:text-neutral-300">{}</p>"#,
        html_escape(&author.bio)
    ));
    html.push_str("</div></div></div>");
    html
}
