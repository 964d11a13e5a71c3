// crates/sumbu-core/src/text.rs
use std::borrow::Cow;

/// Character threshold above which descriptions are shortened in results.
pub const DEFAULT_EXCERPT_CHARS: usize = 150;

/// Marker appended to shortened text.
pub const ELLIPSIS: &str = "...";

/// Convert a string into a folded ASCII key.
///
/// Transliterates Unicode to ASCII with `deunicode` and lowercases the
/// result (`"Kraton Ngayogyakarta Hadiningrat"` stays readable, `"Café"`
/// becomes `"cafe"`).
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Trims and lowercases a free-text query. Blank queries yield `None`.
pub fn normalize_query(query: &str) -> Option<String> {
    let q = query.trim();
    if q.is_empty() {
        None
    } else {
        Some(q.to_lowercase())
    }
}

/// Case-insensitive substring test. `needle` must already be lowercased
/// (see [`normalize_query`]).
#[inline]
pub fn contains_lower(haystack: &str, needle: &str) -> bool {
    !haystack.is_empty() && haystack.to_lowercase().contains(needle)
}

/// Builds a URL slug: folded to ASCII, lowercased, every run of
/// non-alphanumeric characters collapsed into a single `-`.
///
/// ```
/// use sumbu_core::text::slugify;
///
/// assert_eq!(slugify("Tugu Yogyakarta"), "tugu-yogyakarta");
/// assert_eq!(slugify("  Pasar Beringharjo (Timur) "), "pasar-beringharjo-timur");
/// ```
pub fn slugify(s: &str) -> String {
    let folded = fold_key(s);
    let mut out = String::with_capacity(folded.len());
    for ch in folded.chars() {
        if ch.is_ascii_alphanumeric() {
            out.push(ch);
        } else if !out.is_empty() && !out.ends_with('-') {
            out.push('-');
        }
    }
    while out.ends_with('-') {
        out.pop();
    }
    out
}

/// Shortens `text` to at most `max_chars` characters on a word boundary and
/// appends [`ELLIPSIS`]. Text within the limit is returned unchanged.
///
/// A single word longer than the limit is cut mid-word.
pub fn excerpt(text: &str, max_chars: usize) -> Cow<'_, str> {
    let Some((cut, next)) = text.char_indices().nth(max_chars) else {
        return Cow::Borrowed(text);
    };

    let head = &text[..cut];
    let head = if next.is_whitespace() {
        head
    } else {
        match head.rfind(char::is_whitespace) {
            Some(pos) if pos > 0 => &head[..pos],
            _ => head,
        }
    };
    let head = head.trim_end_matches(|c: char| c.is_whitespace() || matches!(c, ',' | ';' | ':'));

    Cow::Owned(format!("{head}{ELLIPSIS}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_queries_are_rejected() {
        assert_eq!(normalize_query(""), None);
        assert_eq!(normalize_query(" \t "), None);
        assert_eq!(normalize_query("  TuGu "), Some("tugu".to_string()));
    }

    #[test]
    fn contains_is_case_insensitive() {
        assert!(contains_lower("Tugu Yogyakarta", "yogya"));
        assert!(!contains_lower("Monumen Jogja Kembali", "tugu"));
        assert!(!contains_lower("", "a"));
    }

    #[test]
    fn slug_folds_unicode() {
        assert_eq!(slugify("Café Ñam"), "cafe-nam");
        assert_eq!(slugify("---"), "");
    }

    #[test]
    fn short_text_is_untouched() {
        let t = "Pasar tradisional";
        assert!(matches!(excerpt(t, 150), Cow::Borrowed(_)));
        assert_eq!(excerpt(t, t.chars().count()), t);
    }

    #[test]
    fn long_text_is_cut_on_word_boundary() {
        assert_eq!(excerpt("Tugu Yogyakarta adalah", 10), "Tugu...");
        assert_eq!(excerpt("Tugu Yogyakarta adalah", 15), "Tugu Yogyakarta...");
        assert_eq!(excerpt("Keraton, pusat budaya", 8), "Keraton...");
    }

    #[test]
    fn single_long_word_is_hard_cut() {
        assert_eq!(excerpt("Ngayogyakarta", 4), "Ngay...");
    }
}
