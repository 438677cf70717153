//! Line and bullet handling shared by the list-shaped sections.

/// The one bullet style generated lines are stored with.
pub const BULLET_PREFIX: &str = "• ";

const BULLET_GLYPHS: &[char] = &['-', '•', '*'];

/// Strips any run of leading bullet glyphs (and the spacing between them).
pub fn strip_bullet(line: &str) -> &str {
    let mut rest = line.trim();
    while let Some(stripped) = rest.strip_prefix(BULLET_GLYPHS) {
        rest = stripped.trim_start();
    }
    rest
}

/// Trims a line, drops whatever bullet it came with, and applies [`BULLET_PREFIX`].
/// Lines that are blank once the bullet is gone yield `None`.
pub fn canonical_bullet(line: &str) -> Option<String> {
    let text = strip_bullet(line);
    if text.is_empty() {
        None
    } else {
        Some(format!("{BULLET_PREFIX}{text}"))
    }
}

/// Canonical bullets for every non-blank line of `text`.
pub fn canonicalize_lines(text: &str) -> Vec<String> {
    text.lines().filter_map(canonical_bullet).collect()
}

/// Non-blank lines of `text`, each kept exactly as typed.
pub fn non_blank_lines(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}

/// Comma-split, trimmed, empty tokens dropped. Newlines and numbering are left in the tokens.
pub fn split_comma_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}
