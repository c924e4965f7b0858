//! Escape-aware dotted path parsing
//!
//! Splits a raw path such as `.node.metadata.labels.kubernetes\.io/os` into
//! segments. The separator is `.`; a backslash escapes the character after
//! it, so label keys containing dots stay inside one segment.

use std::fmt;

/// Segment separator in raw paths.
const SEPARATOR: char = '.';

/// Escape character; the character following it is taken literally.
const ESCAPE: char = '\\';

/// Compiled field path: parsed segments plus the original raw string.
///
/// Paths are parsed once per declared column and reused across every record
/// in a result set; parsing has no dependency on the data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath {
    /// Segments in evaluation order
    segments: Vec<String>,
    /// Original expression string for diagnostics
    original: String,
}

impl FieldPath {
    /// Parse a raw dotted path. Purely lexical; never fails.
    ///
    /// One leading separator is tolerated, so `.pod.metadata.name` and
    /// `pod.metadata.name` compile to the same segments. Empty segments
    /// produced by adjacent or trailing separators are dropped, and an
    /// empty or all-separator input compiles to zero segments.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.strip_prefix(SEPARATOR).unwrap_or(raw);
        Self {
            segments: split_segments(trimmed),
            original: raw.to_string(),
        }
    }

    /// Parsed segments in evaluation order.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Original path string as written by the caller.
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Whether the path compiled to zero segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Re-join the segments into a parseable path, escaping separator and
    /// escape characters inside segments.
    ///
    /// `FieldPath::parse(p.canonical())` yields the same segments as `p`.
    pub fn canonical(&self) -> String {
        let mut out = String::new();
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                out.push(SEPARATOR);
            }
            for ch in segment.chars() {
                if ch == SEPARATOR || ch == ESCAPE {
                    out.push(ESCAPE);
                }
                out.push(ch);
            }
        }
        out
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}

/// Split on unescaped separators, accumulating escaped characters
/// literally. A trailing escape with nothing after it is dropped.
fn split_segments(path: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut escaped = false;

    for ch in path.chars() {
        if escaped {
            current.push(ch);
            escaped = false;
        } else if ch == ESCAPE {
            escaped = true;
        } else if ch == SEPARATOR {
            if !current.is_empty() {
                segments.push(std::mem::take(&mut current));
            }
        } else {
            current.push(ch);
        }
    }

    if !current.is_empty() {
        segments.push(current);
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_simple_path() {
        let path = FieldPath::parse("pod.metadata.name");
        assert_eq!(path.segments(), ["pod", "metadata", "name"]);
    }

    #[test]
    fn test_split_escaped_dot() {
        let path = FieldPath::parse("node.metadata.labels.kubernetes\\.io/os");
        assert_eq!(
            path.segments(),
            ["node", "metadata", "labels", "kubernetes.io/os"]
        );
    }

    #[test]
    fn test_split_multiple_escaped_dots() {
        let path = FieldPath::parse("a\\.b.c\\.d.e");
        assert_eq!(path.segments(), ["a.b", "c.d", "e"]);
    }

    #[test]
    fn test_leading_dot_is_stripped() {
        let with_dot = FieldPath::parse(".pod.metadata.name");
        let without_dot = FieldPath::parse("pod.metadata.name");
        assert_eq!(with_dot.segments(), without_dot.segments());
    }

    #[test]
    fn test_trailing_dot_and_adjacent_dots_drop_empty_segments() {
        assert_eq!(FieldPath::parse("pod.metadata.").segments(), ["pod", "metadata"]);
        assert_eq!(FieldPath::parse("pod..metadata").segments(), ["pod", "metadata"]);
    }

    #[test]
    fn test_empty_and_all_separator_input() {
        assert!(FieldPath::parse("").is_empty());
        assert!(FieldPath::parse(".").is_empty());
        assert!(FieldPath::parse("...").is_empty());
    }

    #[test]
    fn test_trailing_escape_is_dropped() {
        assert_eq!(FieldPath::parse("pod.name\\").segments(), ["pod", "name"]);
    }

    #[test]
    fn test_escaped_backslash_is_literal() {
        assert_eq!(FieldPath::parse("a\\\\b").segments(), ["a\\b"]);
    }

    #[test]
    fn test_canonical_round_trip() {
        for raw in [
            "pod.metadata.name",
            "node.metadata.labels.kubernetes\\.io/os",
            "a\\.b.c\\.d.e",
            "a\\\\b.c",
        ] {
            let parsed = FieldPath::parse(raw);
            let reparsed = FieldPath::parse(&parsed.canonical());
            assert_eq!(parsed.segments(), reparsed.segments(), "round trip of {raw:?}");
        }
    }
}
