//! Answer layout transform.
//!
//! Answers come back from the question-answering service as loosely
//! formatted markdown. The client shows them as paragraphs of lines, where a
//! line of the form `Label: rest` has its label emphasised:
//!
//! - paragraphs are separated by runs of two or more newlines
//! - `*` emphasis markers are dropped
//! - every line is trimmed; blank lines and empty paragraphs are dropped
//! - the text up to and including the first `:` of a line is its label
//!
//! [`AnswerLayout::to_text`] renders a layout back to plain text such that
//! feeding it through [`render_answer`] again yields the same layout.

use std::fmt;

/// A rendered answer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerLayout {
    pub paragraphs: Vec<Paragraph>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Paragraph {
    pub lines: Vec<Line>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Plain(String),
    /// `label` ends with the first colon of the line; `text` is the trimmed
    /// remainder and may be empty.
    Labeled { label: String, text: String },
}

impl AnswerLayout {
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }

    /// Plain-text form: lines joined by `\n`, paragraphs by a blank line.
    pub fn to_text(&self) -> String {
        self.paragraphs
            .iter()
            .map(|p| {
                p.lines
                    .iter()
                    .map(Line::to_string)
                    .collect::<Vec<_>>()
                    .join("\n")
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Line::Plain(text) => f.write_str(text),
            Line::Labeled { label, text } if text.is_empty() => f.write_str(label),
            Line::Labeled { label, text } => write!(f, "{label} {text}"),
        }
    }
}

/// Lay out raw answer text.
pub fn render_answer(raw: &str) -> AnswerLayout {
    let paragraphs = split_paragraphs(raw)
        .into_iter()
        .map(|para| {
            let stripped = para.replace('*', "");
            let lines = stripped
                .split('\n')
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(render_line)
                .collect::<Vec<_>>();
            Paragraph { lines }
        })
        .filter(|p| !p.lines.is_empty())
        .collect();

    AnswerLayout { paragraphs }
}

/// Split a single, already trimmed line into label and text.
pub fn render_line(cleaned: &str) -> Line {
    match cleaned.find(':') {
        Some(idx) => Line::Labeled {
            label: cleaned[..=idx].to_string(),
            text: cleaned[idx + 1..].trim().to_string(),
        },
        None => Line::Plain(cleaned.to_string()),
    }
}

/// Strip bullet markers and emphasis from a suggested follow-up question.
///
/// `"  - **How many days?**"` becomes `"How many days?"`.
pub fn clean_follow_up(raw: &str) -> String {
    let unbulleted = raw
        .trim_start()
        .trim_start_matches(['*', '-'])
        .trim_start();
    unbulleted.replace('*', "")
}

fn split_paragraphs(raw: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut rest = raw;
    while let Some(idx) = rest.find("\n\n") {
        out.push(&rest[..idx]);
        rest = rest[idx..].trim_start_matches('\n');
    }
    out.push(rest);
    out
}
