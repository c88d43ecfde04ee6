//! Lightweight rich-text model and formatter for answer text.
//!
//! The answering service emits plain text with `**bold**` and `*italic*`
//! markers. This module parses that into structured spans so the renderer
//! never has to re-scan marker syntax. Only bold, italic, and line breaks
//! are supported; anything else passes through verbatim.

/// Emphasis applied to a single span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    None,
    Bold,
    Italic,
}

/// A run of text with uniform emphasis. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub emphasis: Emphasis,
}

/// A unit of rich text: either a text span or an explicit line break.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Text(Span),
    LineBreak,
}

/// Structured representation of formatted text.
///
/// Concatenating the span texts (with `\n` for each line break) reproduces
/// the source text with the formatting markers stripped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RichText {
    segments: Vec<Segment>,
}

impl RichText {
    /// An empty rich text (used for pending placeholders).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Wraps raw text with no emphasis. Newlines become line breaks;
    /// marker characters are kept verbatim.
    pub fn plain(text: &str) -> Self {
        let mut rich = Self::default();
        push_text(&mut rich.segments, text, Emphasis::None);
        rich
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Iterates over the text spans, skipping line breaks.
    pub fn spans(&self) -> impl Iterator<Item = &Span> {
        self.segments.iter().filter_map(|seg| match seg {
            Segment::Text(span) => Some(span),
            Segment::LineBreak => None,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Reconstructs the unformatted text (markers stripped, `\n` for breaks).
    pub fn to_plain_text(&self) -> String {
        let mut out = String::new();
        for seg in &self.segments {
            match seg {
                Segment::Text(span) => out.push_str(&span.text),
                Segment::LineBreak => out.push('\n'),
            }
        }
        out
    }
}

/// A claimed marker pair: the full marked range and the content inside it.
struct Claim {
    start: usize,
    end: usize,
    inner_start: usize,
    inner_end: usize,
    emphasis: Emphasis,
}

/// Parses raw answer text into rich text.
///
/// Pure and total: unmatched markers are literal text, and marker pairs
/// never cross a line break. Bold (`**`) is resolved first, scanning left
/// to right with the earliest closing marker winning; italic (`*`) only
/// matches in regions not already claimed by bold, and an adjacent `*`
/// pair is a literal `**` rather than an empty italic. Nesting is not
/// supported.
pub fn format(raw: &str) -> RichText {
    let mut claims: Vec<Claim> = Vec::new();

    // Bold pass over the whole string.
    scan_marker(raw, 0, raw.len(), "**", Emphasis::Bold, &mut claims);

    // Italic pass over the gaps the bold pass left unclaimed.
    let bold_ranges: Vec<(usize, usize)> = claims.iter().map(|c| (c.start, c.end)).collect();
    let mut gap_start = 0;
    for (start, end) in &bold_ranges {
        scan_marker(raw, gap_start, *start, "*", Emphasis::Italic, &mut claims);
        gap_start = *end;
    }
    scan_marker(raw, gap_start, raw.len(), "*", Emphasis::Italic, &mut claims);

    claims.sort_by_key(|c| c.start);

    // Walk the string, emitting literal stretches and claimed contents.
    let mut rich = RichText::default();
    let mut pos = 0;
    for claim in &claims {
        if pos < claim.start {
            push_text(&mut rich.segments, &raw[pos..claim.start], Emphasis::None);
        }
        push_text(
            &mut rich.segments,
            &raw[claim.inner_start..claim.inner_end],
            claim.emphasis,
        );
        pos = claim.end;
    }
    if pos < raw.len() {
        push_text(&mut rich.segments, &raw[pos..], Emphasis::None);
    }

    rich
}

/// Scans `raw[from..to]` for non-overlapping `marker...marker` pairs.
///
/// Pairs never cross a line break, so each line of the range is scanned
/// independently; a marker left unpaired on its line stays literal. This
/// matches the line-oriented behavior of the service's own renderer.
fn scan_marker(
    raw: &str,
    from: usize,
    to: usize,
    marker: &str,
    emphasis: Emphasis,
    claims: &mut Vec<Claim>,
) {
    let mut line_start = from;
    while line_start < to {
        let line_end = raw[line_start..to]
            .find('\n')
            .map_or(to, |i| line_start + i);
        scan_line(raw, line_start, line_end, marker, emphasis, claims);
        line_start = line_end + 1;
    }
}

/// Scans a single newline-free range. The earliest closing marker wins.
fn scan_line(
    raw: &str,
    from: usize,
    to: usize,
    marker: &str,
    emphasis: Emphasis,
    claims: &mut Vec<Claim>,
) {
    let mlen = marker.len();
    let mut cursor = from;

    while cursor + mlen <= to {
        let Some(open) = raw[cursor..to].find(marker) else {
            break;
        };
        let open_start = cursor + open;
        let inner_start = open_start + mlen;
        if inner_start + mlen > to {
            break;
        }
        let Some(close) = raw[inner_start..to].find(marker) else {
            break;
        };
        let inner_end = inner_start + close;

        if inner_end == inner_start && emphasis == Emphasis::Italic {
            // Two adjacent `*` are a literal `**`, not an empty italic.
            cursor = inner_end + mlen;
            continue;
        }

        claims.push(Claim {
            start: open_start,
            end: inner_end + mlen,
            inner_start,
            inner_end,
            emphasis,
        });
        cursor = inner_end + mlen;
    }
}

/// Appends text to `segments`, splitting on newlines and never emitting
/// empty spans.
fn push_text(segments: &mut Vec<Segment>, text: &str, emphasis: Emphasis) {
    for (i, part) in text.split('\n').enumerate() {
        if i > 0 {
            segments.push(Segment::LineBreak);
        }
        if !part.is_empty() {
            segments.push(Segment::Text(Span {
                text: part.to_string(),
                emphasis,
            }));
        }
    }
}
