//! Text normalization for OCR output.
//!
//! Recognized text is canonicalized before aggregation and search so that
//! word counting and substring matching are insensitive to case and to the
//! irregular spacing OCR engines produce.

/// Normalize a string for aggregation and search.
///
/// Collapses every run of whitespace to a single space, strips leading and
/// trailing whitespace, and lowercases the result. Total function: never
/// fails, and empty (or all-whitespace) input yields an empty string.
///
/// Idempotent: `normalize(normalize(s)) == normalize(s)` for all `s`.
///
/// # Example
///
/// ```rust
/// use moabit::text::normalize;
///
/// assert_eq!(normalize("  Hello   World "), "hello world");
/// assert_eq!(normalize("\t\n"), "");
/// ```
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(&word.to_lowercase());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_normalize_whitespace_only() {
        for s in ["   ", "\t", "\n\r\n", " \t \n "] {
            assert_eq!(normalize(s), "", "input {:?}", s);
        }
    }

    #[test]
    fn test_normalize_lowercases() {
        assert_eq!(normalize("Hello World"), "hello world");
        assert_eq!(normalize("ALL CAPS"), "all caps");
    }

    #[test]
    fn test_normalize_collapses_runs() {
        assert_eq!(normalize("a  b\tc\n\nd"), "a b c d");
    }

    #[test]
    fn test_normalize_trims() {
        assert_eq!(normalize("  padded  "), "padded");
    }

    #[test]
    fn test_normalize_idempotent() {
        let inputs = [
            "Hello   World",
            "  MIXED case\ttext ",
            "already normalized",
            "",
            "Füße  Straße",
        ];
        for s in inputs {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "input {:?}", s);
        }
    }

    #[test]
    fn test_normalize_non_ascii() {
        assert_eq!(normalize("ÜBER  Straße"), "über straße");
        assert_eq!(normalize("ΚΑΛΗΜΕΡΑ"), "καλημερα");
    }

    #[test]
    fn test_normalize_preserves_interior_punctuation() {
        assert_eq!(normalize("Art. 5(2),  see p.7"), "art. 5(2), see p.7");
    }
}
