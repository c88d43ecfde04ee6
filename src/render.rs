//! Terminal rendering for transcript messages.
//!
//! Converts the session's rich-text read model into ANSI-styled strings.
//! All formatting decisions live here; the session never emits escape codes.

use crate::session::{AnswerMeta, Emphasis, Message, RichText, Segment};

const BOLD: &str = "\x1b[1m";
const ITALIC: &str = "\x1b[3m";
const RESET: &str = "\x1b[0m";

/// Renders rich text as a single ANSI string.
pub fn rich_text(body: &RichText) -> String {
    let mut out = String::new();
    for seg in body.segments() {
        match seg {
            Segment::Text(span) => match span.emphasis {
                Emphasis::None => out.push_str(&span.text),
                Emphasis::Bold => {
                    out.push_str(BOLD);
                    out.push_str(&span.text);
                    out.push_str(RESET);
                }
                Emphasis::Italic => {
                    out.push_str(ITALIC);
                    out.push_str(&span.text);
                    out.push_str(RESET);
                }
            },
            Segment::LineBreak => out.push('\n'),
        }
    }
    out
}

/// Renders a full message: body plus any pass-through metadata lines.
pub fn message(msg: &Message) -> String {
    let mut out = rich_text(&msg.body);
    if let Some(meta) = &msg.meta {
        out.push_str(&meta_lines(meta));
    }
    out
}

/// Formats the optional service metadata, one field per line.
/// Absent fields produce nothing.
fn meta_lines(meta: &AnswerMeta) -> String {
    let mut out = String::new();
    if let Some(confidence) = meta.confidence {
        out.push_str(&format!("\nConfiança: {:.2}", confidence));
    }
    if !meta.sources.is_empty() {
        out.push_str(&format!("\nFontes: {}", meta.sources.join(", ")));
    }
    if !meta.follow_ups.is_empty() {
        out.push_str("\nPerguntas faltantes:");
        for (i, q) in meta.follow_ups.iter().enumerate() {
            out.push_str(&format!("\n  {}. {}", i + 1, q));
        }
    }
    out
}
