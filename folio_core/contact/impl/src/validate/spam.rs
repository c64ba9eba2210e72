use std::sync::LazyLock;

use regex::Regex;

/// Denylisted keywords, matched as whole words against the lowercased
/// content.
static KEYWORDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(viagra|casino|lottery|winner|congratulations|click here|buy now|act now|limited time)\b",
    )
    .unwrap()
});

/// Ten or more consecutive uppercase letters, checked against the original
/// (non-lowercased) content.
static SHOUTING: LazyLock<Regex> = LazyLock::new(|| Regex::new("[A-Z]{10,}").unwrap());

const URL_MARKERS: [&str; 2] = ["http://", "https://"];

pub(crate) fn is_spam(content: &str) -> bool {
    let lowered = content.to_lowercase();

    let url_count = URL_MARKERS
        .iter()
        .map(|marker| lowered.matches(marker).count())
        .sum::<usize>();

    KEYWORDS.is_match(&lowered) || url_count >= 2 || SHOUTING.is_match(content)
}
