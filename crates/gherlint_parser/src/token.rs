//! Line classification.
//!
//! Gherkin is line oriented: every physical line is classified on its own,
//! against one dialect, before the parser decides what the line means in its
//! current context. Doc string bodies are the exception and are handled by
//! the parser, which never asks for their classification.

use gherlint_ast::TextPosition;

use crate::dialect::{Dialect, TitleKind};

/// Keyword and name of a header line such as `Scenario: Login`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Title<'s> {
    /// Keyword spelling without the colon.
    pub keyword: &'static str,
    /// Text after the colon, trimmed.
    pub name: &'s str,
}

/// What a line looks like, independently of where it appears.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'s> {
    Empty,
    Comment,
    /// `# language: <code>`; whether it declares anything is up to the parser.
    Language(&'s str),
    TagLine,
    FeatureLine(Title<'s>),
    BackgroundLine(Title<'s>),
    ScenarioLine(Title<'s>),
    ScenarioOutlineLine(Title<'s>),
    ExamplesLine(Title<'s>),
    RuleLine(Title<'s>),
    StepLine {
        /// Keyword spelling including its trailing separator.
        keyword: &'static str,
        text: &'s str,
    },
    TableRow,
    DocStringSeparator {
        delimiter: &'static str,
        content_type: &'s str,
    },
    Other,
}

/// One classified physical line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'s> {
    /// 1-based line number.
    pub number: u32,
    /// Leading whitespace, in characters.
    pub indent: u32,
    /// The line without its terminator.
    pub raw: &'s str,
    /// The line with surrounding whitespace removed.
    pub content: &'s str,
    pub kind: LineKind<'s>,
}

impl<'s> Line<'s> {
    /// Position of the first non-blank character.
    pub fn position(&self) -> TextPosition {
        TextPosition::new(self.number, self.indent + 1)
    }
}

/// Doc string delimiters, in matching order.
pub const DOC_STRING_DELIMITERS: [&str; 2] = ["\"\"\"", "```"];

/// Splits source text into numbered lines.
///
/// A leading byte-order mark is dropped, and both `\n` and `\r\n` terminate
/// a line.
pub fn source_lines(source: &str) -> impl Iterator<Item = (u32, &str)> {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);
    source
        .lines()
        .enumerate()
        .map(|(index, raw)| (index as u32 + 1, raw))
}

/// Classifies one line against a dialect.
pub fn classify<'s>(number: u32, raw: &'s str, dialect: &Dialect) -> Line<'s> {
    let indent = raw.chars().take_while(|c| c.is_whitespace()).count() as u32;
    let content = raw.trim();

    Line {
        number,
        indent,
        raw,
        content,
        kind: classify_content(content, dialect),
    }
}

fn classify_content<'s>(content: &'s str, dialect: &Dialect) -> LineKind<'s> {
    if content.is_empty() {
        return LineKind::Empty;
    }

    if content.starts_with('#') {
        return match language_code(content) {
            Some(code) => LineKind::Language(code),
            None => LineKind::Comment,
        };
    }

    if content.starts_with('@') {
        return LineKind::TagLine;
    }

    if let Some((kind, keyword, rest)) = dialect.match_title(content) {
        let title = Title {
            keyword,
            name: rest.trim(),
        };
        return match kind {
            TitleKind::Feature => LineKind::FeatureLine(title),
            TitleKind::Background => LineKind::BackgroundLine(title),
            TitleKind::Scenario => LineKind::ScenarioLine(title),
            TitleKind::ScenarioOutline => LineKind::ScenarioOutlineLine(title),
            TitleKind::Examples => LineKind::ExamplesLine(title),
            TitleKind::Rule => LineKind::RuleLine(title),
        };
    }

    for delimiter in DOC_STRING_DELIMITERS {
        if let Some(rest) = content.strip_prefix(delimiter) {
            return LineKind::DocStringSeparator {
                delimiter,
                content_type: rest.trim(),
            };
        }
    }

    if content.starts_with('|') {
        return LineKind::TableRow;
    }

    if let Some((keyword, text)) = dialect.match_step(content) {
        return LineKind::StepLine {
            keyword,
            text: text.trim(),
        };
    }

    LineKind::Other
}

/// Extracts the code from a `# language: <code>` line.
pub fn language_code(content: &str) -> Option<&str> {
    let rest = content.strip_prefix('#')?.trim_start();
    let rest = rest.strip_prefix("language")?.trim_start();
    let code = rest.strip_prefix(':')?.trim();

    if code.is_empty() || code.contains(char::is_whitespace) {
        return None;
    }
    Some(code)
}

/// Splits a table row into cells.
///
/// Cells are separated by unescaped pipes and trimmed; text after the last
/// pipe is not a cell.
pub fn split_cells(content: &str) -> Vec<String> {
    let Some(body) = content.strip_prefix('|') else {
        return Vec::new();
    };

    let mut cells = Vec::new();
    let mut start = 0;
    let mut escaped = false;
    for (index, ch) in body.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' => escaped = true,
            '|' => {
                cells.push(unescape_cell(body[start..index].trim()));
                start = index + 1;
            }
            _ => {}
        }
    }
    cells
}

fn unescape_cell(cell: &str) -> String {
    let mut out = String::with_capacity(cell.len());
    let mut chars = cell.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('|') => out.push('|'),
            Some('\\') => out.push('\\'),
            Some('n') => out.push('\n'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
