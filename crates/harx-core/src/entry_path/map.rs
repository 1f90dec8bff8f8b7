//! URL to relative file path mapping.

use std::path::PathBuf;
use url::Url;

use super::sanitize::sanitize_segment;

const INDEX: &str = "index.html";

/// Maps a parsed URL to a sanitized, length-bounded relative file path.
///
/// The result never starts with a separator, its final segment is non-empty
/// and at most `max_name_len` characters, and no segment contains a reserved
/// character. Distinct URLs may still map to the same path (later write wins).
pub fn relative_path_for(url: &Url, max_name_len: usize) -> PathBuf {
    let mut pathname = url.path().trim_start_matches('/').to_string();

    // Empty path or explicit directory: use the directory index.
    if pathname.is_empty() || pathname.ends_with('/') {
        pathname.push_str(INDEX);
    }
    // No extension on the final segment: treat it as an implicit directory.
    if extension_suffix(last_segment(&pathname)).is_empty() {
        pathname.push('/');
        pathname.push_str(INDEX);
    }

    // Splice the sanitized query (raw search string, leading `?` included)
    // before a trailing index.html. A path with a real extension keeps no
    // query, so URLs differing only by query collide on the same file.
    if let Some(query) = url.query().filter(|q| !q.is_empty()) {
        if let Some(prefix) = pathname.strip_suffix(INDEX) {
            let safe_query = sanitize_segment(&format!("?{query}"));
            pathname = format!("{prefix}{safe_query}-{INDEX}");
        }
    }

    let mut segments: Vec<String> = pathname
        .split('/')
        .filter(|s| !s.is_empty())
        .map(sanitize_segment)
        .collect();
    if let Some(last) = segments.last_mut() {
        *last = truncate_name(last, max_name_len);
    }
    segments.iter().collect()
}

/// Truncates `name` to at most `max_len` characters, keeping its extension:
/// the head of the name is cut so that head + extension fits.
fn truncate_name(name: &str, max_len: usize) -> String {
    if name.chars().count() <= max_len {
        return name.to_string();
    }
    let ext = extension_suffix(name);
    let keep = max_len.saturating_sub(ext.chars().count());
    let mut out: String = name.chars().take(keep).collect();
    out.push_str(ext);
    out
}

/// Extension of a file name including the dot, or `""` when there is none.
/// A dot in the first position (hidden file) does not start an extension.
fn extension_suffix(name: &str) -> &str {
    match name.rfind('.') {
        Some(idx) if idx > 0 => &name[idx..],
        _ => "",
    }
}

fn last_segment(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or("")
}
