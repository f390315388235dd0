//! URL classification for link rendering.

/// Extensions treated as downloadable files when no set is supplied.
pub const DEFAULT_FILE_EXTENSIONS: &[&str] = &[
    ".pdf", ".doc", ".zip", ".docx", ".xls", ".xlsx", ".jpg", ".png", ".gif", ".txt",
];

/// Extensions treated as documents when no set is supplied.
pub const DEFAULT_DOCUMENT_EXTENSIONS: &[&str] = &[".pdf", ".doc"];

/// Checks whether `url` points outside of `base`.
///
/// Anchors (`#...`) are never external. Otherwise this is a literal prefix
/// comparison: `url` is internal only if it starts with exactly `base`. No
/// scheme, host or case normalization happens, so `HTTP://site` and
/// `http://site/` are different origins from `http://site`.
pub fn is_external(url: &str, base: &str) -> bool {
    if url.starts_with('#') {
        return false;
    }
    !url.starts_with(base)
}

/// Checks if `url` ends with one of `extensions`, ignoring ASCII case.
///
/// Empty extensions never match.
pub fn is_file(url: &str, extensions: &[&str]) -> bool {
    let url = url.to_ascii_lowercase();
    extensions
        .iter()
        .filter(|ext| !ext.is_empty())
        .any(|ext| url.ends_with(&ext.to_ascii_lowercase()))
}

/// Same check as [`is_file`], named for document sets such as
/// [`DEFAULT_DOCUMENT_EXTENSIONS`].
pub fn is_document(url: &str, extensions: &[&str]) -> bool {
    is_file(url, extensions)
}

/// Links that leave `base` or point at a document open in a new window.
pub fn is_new_window(url: &str, base: &str) -> bool {
    is_external(url, base) || is_document(url, DEFAULT_DOCUMENT_EXTENSIONS)
}
