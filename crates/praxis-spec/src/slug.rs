/// Unicode dash variants normalized to an ASCII hyphen before slugging.
const DASH_VARIANTS: [char; 5] = [
    '\u{2012}', // figure dash
    '\u{2013}', // en dash
    '\u{2014}', // em dash
    '\u{2015}', // horizontal bar
    '\u{2212}', // minus sign
];

/// Derive a lowercase, hyphen-delimited, filesystem-safe slug from a title.
///
/// Lowercase, dash variants normalized, parenthesized asides stripped, every
/// run of non-alphanumeric characters collapsed to a single hyphen, leading
/// and trailing hyphens trimmed. Stable: the same title always yields the
/// same slug, and slugs are fixed points of this function.
pub fn slugify(title: &str) -> String {
    let normalized: String = title
        .chars()
        .map(|c| if DASH_VARIANTS.contains(&c) { '-' } else { c })
        .collect();

    strip_parentheticals(&normalized)
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Project folder name: zero-padded two-digit id + "-" + slug.
///
/// Collisions are not detected; a later project with the same id and slug
/// silently overwrites the earlier one.
pub fn folder_name(id: u32, title: &str) -> String {
    format!("{:02}-{}", id, slugify(title))
}

/// Remove parenthesized asides entirely, including their contents.
fn strip_parentheticals(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut depth = 0usize;
    for c in text.chars() {
        match c {
            '(' => depth += 1,
            ')' if depth > 0 => depth -= 1,
            _ if depth == 0 => out.push(c),
            _ => {}
        }
    }
    out
}
