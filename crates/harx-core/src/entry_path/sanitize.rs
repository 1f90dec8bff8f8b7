//! Filesystem-safe segment sanitization.

/// Characters replaced with `-` in every path segment and query string.
/// Covers filesystem-reserved and shell-significant characters.
const RESERVED: &[char] = &[
    '<', '>', ':', '"', '|', '?', '*', '%', ',', '!', '&', '(', ')',
];

/// Replaces every reserved character in `segment` with `-`.
///
/// Applied independently to each `/`-separated path segment and to the
/// query string. Idempotent: the output contains no reserved characters.
pub fn sanitize_segment(segment: &str) -> String {
    segment
        .chars()
        .map(|c| if RESERVED.contains(&c) { '-' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_each_reserved_char() {
        assert_eq!(sanitize_segment("<>:\"|?*%,!&()"), "-------------");
    }

    #[test]
    fn leaves_safe_chars_alone() {
        assert_eq!(
            sanitize_segment("index.html_v2-final=ok;x"),
            "index.html_v2-final=ok;x"
        );
    }

    #[test]
    fn mixed_segment() {
        assert_eq!(sanitize_segment("file(1).js?cache"), "file-1-.js-cache");
    }

    #[test]
    fn idempotent() {
        let once = sanitize_segment("a?b*c%d,e!f&g(h)i");
        assert_eq!(sanitize_segment(&once), once);
    }

    #[test]
    fn empty_is_empty() {
        assert_eq!(sanitize_segment(""), "");
    }
}
