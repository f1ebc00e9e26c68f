//! Splitting free text into plain, linked and emphasized runs.

use crate::domain::model::TitleLinkMap;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Segment {
    Text { text: String },
    Link { text: String, url: String },
    Emphasis { text: String },
}

impl Segment {
    pub fn text(text: impl Into<String>) -> Self {
        Segment::Text { text: text.into() }
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Segment::Link {
            text: text.into(),
            url: url.into(),
        }
    }

    pub fn emphasis(text: impl Into<String>) -> Self {
        Segment::Emphasis { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Segment::Text { text } | Segment::Link { text, .. } | Segment::Emphasis { text } => text,
        }
    }
}

/// One rendered line of a summary.
pub type Paragraph = Vec<Segment>;

/// Earliest occurrence of any title in `haystack`. At equal positions the
/// longer title wins.
fn earliest_title<'m>(haystack: &str, titles: &'m TitleLinkMap) -> Option<(usize, &'m str, &'m str)> {
    let mut best: Option<(usize, &str, &str)> = None;
    for (title, url) in titles {
        if title.is_empty() {
            continue;
        }
        let Some(idx) = haystack.find(title.as_str()) else {
            continue;
        };
        let better = match best {
            None => true,
            Some((best_idx, best_title, _)) => {
                idx < best_idx || (idx == best_idx && title.len() > best_title.len())
            }
        };
        if better {
            best = Some((idx, title.as_str(), url.as_str()));
        }
    }
    best
}

/// Replace every known title in `line` with a link, left to right, without
/// overlaps. A line with no titles comes back as one text segment.
pub fn annotate_line(line: &str, titles: &TitleLinkMap) -> Paragraph {
    let mut segments = Vec::new();
    let mut remaining = line;

    while let Some((idx, title, url)) = earliest_title(remaining, titles) {
        if idx > 0 {
            segments.push(Segment::text(&remaining[..idx]));
        }
        segments.push(Segment::link(title, url));
        remaining = &remaining[idx + title.len()..];
    }

    if segments.is_empty() {
        return vec![Segment::text(line)];
    }
    if !remaining.is_empty() {
        segments.push(Segment::text(remaining));
    }
    segments
}

/// Annotate each `\n`-separated line of `text` independently.
pub fn annotate(text: &str, titles: &TitleLinkMap) -> Vec<Paragraph> {
    text.split('\n')
        .map(|line| annotate_line(line, titles))
        .collect()
}

/// For lines opening with `"`: the first quoted part becomes emphasis and the
/// rest trails it as text. Anything else is returned as a single text segment.
pub fn split_quoted_title(line: &str) -> Paragraph {
    if line.trim_start().starts_with('"') {
        let parts: Vec<&str> = line.split('"').collect();
        if parts.len() >= 3 {
            let rest = parts[2..].join("\"");
            let mut segments = vec![Segment::emphasis(parts[1])];
            if !rest.is_empty() {
                segments.push(Segment::text(rest));
            }
            return segments;
        }
    }
    vec![Segment::text(line)]
}

pub fn split_quoted_titles(text: &str) -> Vec<Paragraph> {
    text.split('\n').map(split_quoted_title).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: &[(&str, &str)]) -> TitleLinkMap {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_two_titles_in_order() {
        let titles = map(&[("Title One", "u1"), ("Title Two", "u2")]);
        let segments = annotate_line("A \"Title One\" B \"Title Two\" C", &titles);
        assert_eq!(
            segments,
            vec![
                Segment::text("A \""),
                Segment::link("Title One", "u1"),
                Segment::text("\" B \""),
                Segment::link("Title Two", "u2"),
                Segment::text("\" C"),
            ]
        );
    }

    #[test]
    fn test_five_segments_without_quotes() {
        let titles = map(&[("Title One", "u1"), ("Title Two", "u2")]);
        let segments = annotate_line("A Title One B Title Two C", &titles);
        assert_eq!(
            segments,
            vec![
                Segment::text("A "),
                Segment::link("Title One", "u1"),
                Segment::text(" B "),
                Segment::link("Title Two", "u2"),
                Segment::text(" C"),
            ]
        );
    }

    #[test]
    fn test_no_match_is_identity() {
        let titles = map(&[("Title One", "u1")]);
        let line = "Nothing to see here.";
        assert_eq!(annotate_line(line, &titles), vec![Segment::text(line)]);
        assert_eq!(annotate_line("", &titles), vec![Segment::text("")]);
    }

    #[test]
    fn test_reannotating_plain_segment_is_noop() {
        let titles = map(&[("Title One", "u1")]);
        let first = annotate_line("before Title One after", &titles);
        for segment in first.iter().filter(|s| matches!(s, Segment::Text { .. })) {
            assert_eq!(
                annotate_line(segment.as_str(), &titles),
                vec![segment.clone()]
            );
        }
    }

    #[test]
    fn test_repeated_title_and_adjacent_matches() {
        let titles = map(&[("ab", "u")]);
        assert_eq!(
            annotate_line("abab", &titles),
            vec![Segment::link("ab", "u"), Segment::link("ab", "u")]
        );
    }

    #[test]
    fn test_matches_do_not_overlap() {
        let titles = map(&[("Deep Learning", "u1"), ("Learning Models", "u2")]);
        let segments = annotate_line("Deep Learning Models", &titles);
        assert_eq!(
            segments,
            vec![Segment::link("Deep Learning", "u1"), Segment::text(" Models")]
        );
    }

    #[test]
    fn test_longer_title_wins_tie() {
        let titles = map(&[("Deep", "short"), ("Deep Learning", "long")]);
        let segments = annotate_line("Deep Learning rocks", &titles);
        assert_eq!(
            segments,
            vec![Segment::link("Deep Learning", "long"), Segment::text(" rocks")]
        );
    }

    #[test]
    fn test_empty_key_is_ignored() {
        let titles = map(&[("", "nowhere"), ("x", "u")]);
        assert_eq!(
            annotate_line("axb", &titles),
            vec![Segment::text("a"), Segment::link("x", "u"), Segment::text("b")]
        );
    }

    #[test]
    fn test_multibyte_text_around_title() {
        let titles = map(&[("Lung Nodule Classification", "u")]);
        let segments = annotate_line("“Lung Nodule Classification” • ECAI", &titles);
        assert_eq!(
            segments,
            vec![
                Segment::text("“"),
                Segment::link("Lung Nodule Classification", "u"),
                Segment::text("” • ECAI"),
            ]
        );
    }

    #[test]
    fn test_annotate_keeps_paragraphs() {
        let titles = map(&[("P1", "u1"), ("P2", "u2")]);
        let paragraphs = annotate("first P1\nplain\nP2 last", &titles);
        assert_eq!(paragraphs.len(), 3);
        assert_eq!(paragraphs[1], vec![Segment::text("plain")]);
        assert_eq!(paragraphs[2][0], Segment::link("P2", "u2"));
    }

    #[test]
    fn test_split_quoted_title() {
        assert_eq!(
            split_quoted_title("\"Paper\" presented at ECAI"),
            vec![Segment::emphasis("Paper"), Segment::text(" presented at ECAI")]
        );
        assert_eq!(
            split_quoted_title("  \"A\" b \"c\" d"),
            vec![Segment::emphasis("A"), Segment::text(" b \"c\" d")]
        );
        assert_eq!(split_quoted_title("\"Only\""), vec![Segment::emphasis("Only")]);
    }

    #[test]
    fn test_split_quoted_title_fallbacks() {
        assert_eq!(
            split_quoted_title("\"unterminated"),
            vec![Segment::text("\"unterminated")]
        );
        assert_eq!(
            split_quoted_title("no \"leading\" quote"),
            vec![Segment::text("no \"leading\" quote")]
        );
    }
}
