//! Request path normalization.
//!
//! Generators receive page paths in many spellings (`guide/install.html`,
//! `/guide//install?x=1`, `/guide/index.md`). Resolution compares literal
//! strings, so callers normalize once before resolving.

/// Page file extensions stripped from the final path segment.
const PAGE_EXTENSIONS: [&str; 2] = [".html", ".md"];

/// Normalize a requested page path.
///
/// - Ensures a leading `/`.
/// - Drops query strings and fragments.
/// - Collapses repeated slashes.
/// - Strips `.html` / `.md` from the final segment.
/// - Maps `…/index` to `…/` so index pages keep their trailing slash.
///
/// # Example
///
/// ```
/// use sitenav_taxonomy::normalize_path;
///
/// assert_eq!(normalize_path("guide/installation.html"), "/guide/installation");
/// assert_eq!(normalize_path("/guide/index.md#top"), "/guide/");
/// assert_eq!(normalize_path(""), "/");
/// ```
#[must_use]
pub fn normalize_path(raw: &str) -> String {
    let end = raw.find(['?', '#']).unwrap_or(raw.len());
    let raw = &raw[..end];

    let mut trailing_slash = raw.ends_with('/');
    let mut segments: Vec<&str> = raw.split('/').filter(|s| !s.is_empty()).collect();

    if !trailing_slash
        && let Some(&last) = segments.last()
        && let Some(stem) = PAGE_EXTENSIONS
            .iter()
            .find_map(|extension| last.strip_suffix(extension))
    {
        segments.pop();
        segments.push(stem);
    }

    if segments.last() == Some(&"index") {
        segments.pop();
        trailing_slash = true;
    }

    if segments.is_empty() {
        return "/".to_owned();
    }

    let mut path = String::with_capacity(raw.len() + 2);
    for segment in segments {
        path.push('/');
        path.push_str(segment);
    }
    if trailing_slash {
        path.push('/');
    }
    path
}
