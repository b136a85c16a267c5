//! # FAQ Search
//!
//! Live filtering of the FAQ list: case-insensitive substring matching over
//! each entry's full text, plus lossless match highlighting the rendering
//! layer wraps in `<span class="search-highlight">` markers.

use serde::{Deserialize, Serialize};

/// One question/answer pair in the FAQ list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

impl FaqEntry {
    #[must_use]
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self { question: question.into(), answer: answer.into() }
    }

    /// Case-insensitive substring match over question and answer together.
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.question.to_lowercase().contains(&query)
            || self.answer.to_lowercase().contains(&query)
    }
}

/// The outcome of one filter pass: which entries to show, which to hide, and
/// whether the no-results notice should be visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqResults {
    /// Indices of entries to keep visible.
    pub matches: Vec<usize>,
    /// Indices of entries to hide.
    pub hidden: Vec<usize>,
    /// True iff the query is non-empty and nothing matched.
    pub no_results: bool,
}

/// Filters the FAQ list for `query`. An empty query matches everything (and
/// never raises the no-results notice).
#[must_use]
pub fn filter(query: &str, entries: &[FaqEntry]) -> FaqResults {
    let mut matches = Vec::new();
    let mut hidden = Vec::new();
    for (index, entry) in entries.iter().enumerate() {
        if entry.matches(query) {
            matches.push(index);
        } else {
            hidden.push(index);
        }
    }
    let no_results = !query.is_empty() && matches.is_empty();
    FaqResults { matches, hidden, no_results }
}

/// One span of text in a highlighted rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Plain(String),
    Highlight(String),
}

impl Segment {
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Plain(text) | Self::Highlight(text) => text,
        }
    }
}

/// Splits `text` into plain and highlighted segments covering every
/// case-insensitive occurrence of `query`.
///
/// An empty query yields one plain segment, the "strip highlights" path.
/// Concatenating the segments always reproduces `text` byte for byte; case
/// differences between query and match are preserved from the original.
#[must_use]
pub fn highlight(text: &str, query: &str) -> Vec<Segment> {
    if query.is_empty() {
        return vec![Segment::Plain(text.to_owned())];
    }

    let lower_text = text.to_lowercase();
    let lower_query = query.to_lowercase();

    // Lowercasing can change byte lengths for some scripts; fall back to a
    // single plain segment rather than slice at wrong offsets.
    if lower_text.len() != text.len() {
        return vec![Segment::Plain(text.to_owned())];
    }

    let mut segments = Vec::new();
    let mut cursor = 0;
    while let Some(found) = lower_text[cursor..].find(&lower_query) {
        let start = cursor + found;
        let end = start + lower_query.len();
        if start > cursor {
            segments.push(Segment::Plain(text[cursor..start].to_owned()));
        }
        segments.push(Segment::Highlight(text[start..end].to_owned()));
        cursor = end;
    }
    if cursor < text.len() || segments.is_empty() {
        segments.push(Segment::Plain(text[cursor..].to_owned()));
    }
    segments
}

/// Renders segments to markup, wrapping highlights in the search marker span.
#[must_use]
pub fn to_html(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(|segment| match segment {
            Segment::Plain(text) => text.clone(),
            Segment::Highlight(text) => {
                format!(r#"<span class="search-highlight">{text}</span>"#)
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries() -> Vec<FaqEntry> {
        vec![
            FaqEntry::new(
                "What does registration cost?",
                "The base fee is $190 per season, with sibling discounts.",
            ),
            FaqEntry::new("When are practices?", "Weeknights at the community field."),
            FaqEntry::new(
                "How do waitlists work?",
                "Full divisions collect names and notify families in order.",
            ),
        ]
    }

    #[test]
    fn empty_query_shows_everything() {
        let results = filter("", &entries());
        assert_eq!(results.matches, vec![0, 1, 2]);
        assert!(results.hidden.is_empty());
        assert!(!results.no_results);
    }

    #[test]
    fn query_matches_across_question_and_answer() {
        // "sibling" only appears in an answer.
        let results = filter("SIBLING", &entries());
        assert_eq!(results.matches, vec![0]);
        assert_eq!(results.hidden, vec![1, 2]);
        assert!(!results.no_results);
    }

    #[test]
    fn no_results_only_for_nonempty_queries() {
        let results = filter("lacrosse", &entries());
        assert!(results.matches.is_empty());
        assert!(results.no_results);
    }

    #[test]
    fn highlight_covers_every_occurrence() {
        let segments = highlight("Fee, fee, FEE!", "fee");
        assert_eq!(
            segments,
            vec![
                Segment::Highlight("Fee".to_owned()),
                Segment::Plain(", ".to_owned()),
                Segment::Highlight("fee".to_owned()),
                Segment::Plain(", ".to_owned()),
                Segment::Highlight("FEE".to_owned()),
                Segment::Plain("!".to_owned()),
            ]
        );
    }

    #[test]
    fn segments_concatenate_back_to_the_input() {
        let text = "When are practices? Weeknights at the community field.";
        for query in ["", "we", "field", "zzz", "?"] {
            let joined: String =
                highlight(text, query).iter().map(Segment::text).collect();
            assert_eq!(joined, text, "query {query:?}");
        }
    }

    #[test]
    fn empty_query_is_a_single_plain_segment() {
        assert_eq!(highlight("anything", ""), vec![Segment::Plain("anything".to_owned())]);
    }

    #[test]
    fn html_wraps_highlights_in_the_marker_span() {
        let html = to_html(&highlight("Base fee info", "fee"));
        assert_eq!(html, r#"Base <span class="search-highlight">fee</span> info"#);
    }
}
