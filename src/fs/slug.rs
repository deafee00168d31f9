//! URL-safe slug transform.

use deunicode::deunicode;

/// Default separator placed between slug words.
pub const DEFAULT_SEPARATOR: &str = "-";

/// Options for [`slugify`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlugOptions {
    /// Keep the original letter case instead of lowercasing.
    pub maintain_case: bool,
    pub separator: String,
}

impl Default for SlugOptions {
    fn default() -> Self {
        Self {
            maintain_case: true,
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

/// Symbols spelled out as words rather than dropped.
fn symbol_word(c: char) -> Option<&'static str> {
    match c {
        '&' => Some("and"),
        '@' => Some("at"),
        '%' => Some("percent"),
        '+' => Some("plus"),
        '|' => Some("or"),
        '<' => Some("less"),
        '>' => Some("greater"),
        _ => None,
    }
}

/// Convert `text` into a slug.
///
/// Non-ASCII text is transliterated, apostrophes are dropped, and every other
/// run of non-alphanumeric characters becomes a single separator. Leading and
/// trailing separators are trimmed.
pub fn slugify(text: &str, options: &SlugOptions) -> String {
    let ascii = deunicode(text);

    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();

    for c in ascii.chars() {
        if c.is_ascii_alphanumeric() {
            if options.maintain_case {
                current.push(c);
            } else {
                current.push(c.to_ascii_lowercase());
            }
        } else if c == '\'' {
            continue;
        } else {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            if let Some(word) = symbol_word(c) {
                words.push(word.to_string());
            }
        }
    }
    if !current.is_empty() {
        words.push(current);
    }

    words.join(&options.separator)
}
