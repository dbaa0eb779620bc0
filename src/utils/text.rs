//! Text helpers for labels, slugs and locations

/// ASCII word character (`[A-Za-z0-9_]`)
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Converts a slug into a display label
///
/// Every `-` becomes a space, then each word character that starts the text
/// or follows a non-word character is upper-cased. Everything else is left
/// as-is, so `toa-hx5b` becomes `Toa Hx5b` and `a--b` becomes `A  B`.
pub fn slug_to_title(slug: &str) -> String {
    let mut title = String::with_capacity(slug.len());
    let mut prev_is_word = false;

    for c in slug.chars() {
        let c = if c == '-' { ' ' } else { c };
        let is_word = is_word_char(c);
        if is_word && !prev_is_word {
            title.push(c.to_ascii_uppercase());
        } else {
            title.push(c);
        }
        prev_is_word = is_word;
    }

    title
}

/// Splits a location into path segments
///
/// Query and fragment are dropped, segments are trimmed and empty segments
/// removed: `/products//line-array/?sort=price` → `["products", "line-array"]`.
pub fn split_location(location: &str) -> Vec<String> {
    let path = location
        .split(['?', '#'])
        .next()
        .unwrap_or_default();

    path.split('/')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

/// Trims a label and collapses runs of whitespace to a single space
pub fn sanitize_label(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Lowercase ASCII alphanumerics separated by single-character hyphens
///
/// Leading and trailing hyphens are rejected. Consecutive hyphens are allowed
/// since slugs for some legacy products carry them.
pub fn is_valid_slug(text: &str) -> bool {
    !text.is_empty()
        && !text.starts_with('-')
        && !text.ends_with('-')
        && text
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}
