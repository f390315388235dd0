//! Bulk base-URL substitution.

/// Replaces every occurrence of `from` in `text` with `to`.
///
/// This is plain substring substitution, not URL-aware: it rewrites every
/// embedded URL in a block of content in one pass. An empty `from` leaves
/// `text` unchanged.
pub fn replace_base(text: &str, from: &str, to: &str) -> String {
    if from.is_empty() {
        return text.to_string();
    }
    text.replace(from, to)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_every_occurrence() {
        let text = r#"<a href="http://localhost/P/a">a</a> <img src="http://localhost/P/b.png">"#;
        assert_eq!(
            replace_base(text, "http://localhost/P", "http://project.com"),
            r#"<a href="http://project.com/a">a</a> <img src="http://project.com/b.png">"#
        );
    }

    #[test]
    fn not_anchored_to_url_boundaries() {
        assert_eq!(
            replace_base("see http://localhost/Pages", "http://localhost/P", "X"),
            "see Xages"
        );
    }

    #[test]
    fn missing_needle_is_noop() {
        assert_eq!(replace_base("/tmp/other", "/var/www", "http://d"), "/tmp/other");
        assert_eq!(replace_base("", "/var/www", "http://d"), "");
    }

    #[test]
    fn empty_needle_is_noop() {
        assert_eq!(replace_base("abc", "", "X"), "abc");
    }
}
