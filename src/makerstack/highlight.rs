//! Splits text into matched and unmatched segments for visual emphasis.

use regex::{Regex, RegexBuilder};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub content: String,
    pub is_match: bool,
}

impl Segment {
    pub fn plain(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            is_match: false,
        }
    }

    pub fn matched(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            is_match: true,
        }
    }
}

/// Tags every case-insensitive occurrence of `query` in `text`.
///
/// Matched segments keep the casing found in `text`, and concatenating all
/// segment contents reproduces `text` exactly. When nothing matches (or the
/// query is empty) the result is a single unmatched segment.
pub fn highlight(text: &str, query: &str) -> Vec<Segment> {
    if query.is_empty() {
        return vec![Segment::plain(text)];
    }

    let Some(pattern) = literal_matcher(query) else {
        return vec![Segment::plain(text)];
    };

    let mut segments = Vec::new();
    let mut last = 0;
    for found in pattern.find_iter(text) {
        if found.start() > last {
            segments.push(Segment::plain(&text[last..found.start()]));
        }
        segments.push(Segment::matched(found.as_str()));
        last = found.end();
    }

    if segments.is_empty() {
        return vec![Segment::plain(text)];
    }
    if last < text.len() {
        segments.push(Segment::plain(&text[last..]));
    }
    segments
}

/// Case-insensitive matcher for `query` taken literally. Filtering uses the
/// same matcher, so every filtered item has something to highlight.
///
/// The escaped pattern is always valid; `None` means it exceeded the regex
/// size limit, which callers treat as no match.
pub(crate) fn literal_matcher(query: &str) -> Option<Regex> {
    RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn joined(segments: &[Segment]) -> String {
        segments.iter().map(|s| s.content.as_str()).collect()
    }

    #[test]
    fn preserves_original_casing() {
        let segments = highlight("No-Code MVP Builder", "code");
        assert_eq!(
            segments,
            vec![
                Segment::plain("No-"),
                Segment::matched("Code"),
                Segment::plain(" MVP Builder"),
            ]
        );
    }

    #[test]
    fn empty_query_returns_whole_text() {
        assert_eq!(highlight("abc", ""), vec![Segment::plain("abc")]);
        assert_eq!(highlight("", ""), vec![Segment::plain("")]);
    }

    #[test]
    fn absent_query_yields_one_plain_segment() {
        assert_eq!(highlight("Design Systems", "growth"), vec![Segment::plain("Design Systems")]);
        assert_eq!(highlight("", "x"), vec![Segment::plain("")]);
    }

    #[test]
    fn adjacent_matches_are_separate_segments() {
        let segments = highlight("aaaa", "aa");
        assert_eq!(segments, vec![Segment::matched("aa"), Segment::matched("aa")]);

        let segments = highlight("Scale scale", "SCALE");
        assert_eq!(
            segments,
            vec![
                Segment::matched("Scale"),
                Segment::plain(" "),
                Segment::matched("scale"),
            ]
        );
    }

    #[test]
    fn regex_metacharacters_are_literal() {
        let segments = highlight("a.b axb (c)", ".");
        assert_eq!(joined(&segments), "a.b axb (c)");
        assert_eq!(segments.iter().filter(|s| s.is_match).count(), 1);

        let segments = highlight("call f(x) now", "(x)");
        assert_eq!(segments[1], Segment::matched("(x)"));
    }

    #[test]
    fn concatenation_reproduces_text() {
        let cases = [
            ("Building Scalable SaaS Architecture", "a"),
            ("Ünïcödé ÜNÏ text", "ünï"),
            ("ends with match", "MATCH"),
            ("", "q"),
            ("repeat repeat repeat", "repeat "),
        ];
        for (text, query) in cases {
            assert_eq!(joined(&highlight(text, query)), text, "query {:?}", query);
        }
    }

    #[test]
    fn folds_case_beyond_ascii() {
        let segments = highlight("ÉCOLE des makers", "é");
        assert_eq!(segments[0], Segment::matched("É"));
    }
}
