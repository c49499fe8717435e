//! Gherkin parser.
//!
//! A single forward pass over classified lines. The builder keeps track of
//! the innermost open construct and either attaches each line to it or
//! reports the first structural error it finds.

use gherlint_ast::{
    Background, Comment, DataTable, DocString, Document, Examples, Feature, Rule, Scenario, Step,
    Tag, TextPosition,
};
use tracing::debug;

use crate::dialect::{self, Dialect};
use crate::token::{self, Line, LineKind, Title};
use crate::{ParseError, ParseOutcome, Parser};

/// Parser for `.feature` files.
#[derive(Debug, Clone, Copy)]
pub struct GherkinParser {
    fallback: &'static Dialect,
}

impl GherkinParser {
    /// Creates a parser that assumes English when no language is declared.
    pub fn new() -> Self {
        Self {
            fallback: dialect::default_dialect(),
        }
    }

    /// Creates a parser with another fallback language.
    ///
    /// Unknown codes fall back to English.
    pub fn with_default_language(code: &str) -> Self {
        Self {
            fallback: dialect::resolve(code),
        }
    }

    /// Returns the dialect used when a document declares none.
    pub fn default_language(&self) -> &'static str {
        self.fallback.code
    }

    fn select_dialect(&self, declared: Option<&str>) -> &'static Dialect {
        let Some(code) = declared else {
            return self.fallback;
        };
        match dialect::lookup(code) {
            Some(dialect) => dialect,
            None => {
                debug!(
                    declared = code,
                    fallback = self.fallback.code,
                    "Unknown language, using fallback dialect"
                );
                self.fallback
            }
        }
    }
}

impl Default for GherkinParser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser for GherkinParser {
    fn name(&self) -> &str {
        "gherkin"
    }

    fn extensions(&self) -> &[&str] {
        &["feature"]
    }

    fn parse(&self, source_id: &str, source: &str) -> ParseOutcome {
        let lines: Vec<(u32, &str)> = token::source_lines(source).collect();
        let declaration = find_language_declaration(&lines);
        let dialect = self.select_dialect(declaration.map(|(_, code)| code));

        let mut builder = TreeBuilder::new(dialect, declaration.map(|(number, _)| number));
        let mut error = None;
        let mut remaining = lines.iter();

        for &(number, raw) in remaining.by_ref() {
            if let Err(err) = builder.accept(number, raw) {
                error = Some(err);
                break;
            }
        }

        // Comments past the error still belong to the document.
        for &(number, raw) in remaining {
            builder.collect_comment(number, raw);
        }

        let feature = match error {
            Some(_) => None,
            None => match builder.finish() {
                Ok(feature) => feature,
                Err(err) => {
                    error = Some(err);
                    None
                }
            },
        };

        debug!(
            source_id,
            language = dialect.code,
            has_feature = feature.is_some(),
            failed = error.is_some(),
            "Parsed document"
        );

        ParseOutcome {
            document: Document {
                source_id: source_id.to_string(),
                language: dialect.code.to_string(),
                feature,
                comments: builder.comments,
            },
            error,
        }
    }
}

/// Finds a `# language:` line ahead of any structural line.
///
/// Only blank lines, comments and tag lines may precede the declaration.
fn find_language_declaration<'s>(lines: &[(u32, &'s str)]) -> Option<(u32, &'s str)> {
    for &(number, raw) in lines {
        let content = raw.trim();
        if content.is_empty() || content.starts_with('@') {
            continue;
        }
        if !content.starts_with('#') {
            return None;
        }
        if let Some(code) = token::language_code(content) {
            return Some((number, code));
        }
    }
    None
}

/// The construct that receives the next line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Start,
    FeatureHeader,
    RuleHeader,
    BackgroundHeader,
    BackgroundSteps,
    ScenarioHeader,
    ScenarioSteps,
    ExamplesHeader,
    ExamplesTable,
}

impl Section {
    /// Sections whose header may be followed by free description text.
    fn takes_description(self) -> bool {
        matches!(
            self,
            Section::FeatureHeader
                | Section::RuleHeader
                | Section::BackgroundHeader
                | Section::ScenarioHeader
                | Section::ExamplesHeader
        )
    }

    /// Line kinds that cannot start anything in this section and are read as
    /// free description text instead.
    fn reads_as_description(self, kind: &LineKind<'_>) -> bool {
        match self {
            Section::FeatureHeader | Section::RuleHeader => matches!(
                kind,
                LineKind::StepLine { .. }
                    | LineKind::TableRow
                    | LineKind::DocStringSeparator { .. }
                    | LineKind::ExamplesLine(_)
            ),
            Section::BackgroundHeader => matches!(
                kind,
                LineKind::TableRow | LineKind::DocStringSeparator { .. } | LineKind::ExamplesLine(_)
            ),
            Section::ScenarioHeader => {
                matches!(kind, LineKind::TableRow | LineKind::DocStringSeparator { .. })
            }
            Section::ExamplesHeader => {
                matches!(kind, LineKind::StepLine { .. } | LineKind::DocStringSeparator { .. })
            }
            _ => false,
        }
    }

    fn takes_steps(self) -> bool {
        matches!(
            self,
            Section::BackgroundHeader
                | Section::BackgroundSteps
                | Section::ScenarioHeader
                | Section::ScenarioSteps
        )
    }

    fn in_scenario(self) -> bool {
        matches!(
            self,
            Section::ScenarioHeader
                | Section::ScenarioSteps
                | Section::ExamplesHeader
                | Section::ExamplesTable
        )
    }
}

struct OpenDocString {
    position: TextPosition,
    delimiter: &'static str,
    content_type: String,
    indent: usize,
    lines: Vec<String>,
}

impl OpenDocString {
    fn push_line(&mut self, raw: &str) {
        let cut: usize = raw
            .chars()
            .take(self.indent)
            .take_while(|c| c.is_whitespace())
            .map(char::len_utf8)
            .sum();
        self.lines.push(raw[cut..].to_string());
    }

    fn close(self) -> DocString {
        let escaped: String = self.delimiter.chars().flat_map(|c| ['\\', c]).collect();
        let content = self.lines.join("\n").replace(&escaped, self.delimiter);
        DocString {
            position: self.position,
            content_type: self.content_type,
            content,
            delimiter: self.delimiter.to_string(),
        }
    }
}

struct TreeBuilder<'s> {
    dialect: &'static Dialect,
    language_line: Option<u32>,
    feature: Option<Feature>,
    section: Section,
    in_rule: bool,
    pending_tags: Vec<Tag>,
    description: Vec<&'s str>,
    doc_string: Option<OpenDocString>,
    comments: Vec<Comment>,
}

type Accept = Result<(), ParseError>;

impl<'s> TreeBuilder<'s> {
    fn new(dialect: &'static Dialect, language_line: Option<u32>) -> Self {
        Self {
            dialect,
            language_line,
            feature: None,
            section: Section::Start,
            in_rule: false,
            pending_tags: Vec::new(),
            description: Vec::new(),
            doc_string: None,
            comments: Vec::new(),
        }
    }

    fn accept(&mut self, number: u32, raw: &'s str) -> Accept {
        if let Some(open) = self.doc_string.as_mut() {
            if raw.trim_start().starts_with(open.delimiter) {
                self.close_doc_string();
            } else {
                open.push_line(raw);
            }
            return Ok(());
        }

        let mut line = token::classify(number, raw, self.dialect);
        if self.pending_tags.is_empty() && self.section.reads_as_description(&line.kind) {
            line.kind = LineKind::Other;
        }
        match line.kind {
            LineKind::Empty => {
                if self.section.takes_description() && !self.description.is_empty() {
                    self.description.push("");
                }
                Ok(())
            }
            LineKind::Comment => {
                self.push_comment(&line);
                Ok(())
            }
            LineKind::Language(_) => {
                if self.language_line != Some(line.number) {
                    self.push_comment(&line);
                }
                Ok(())
            }
            LineKind::TagLine => {
                self.flush_description();
                let tags = match parse_tags(&line) {
                    Ok(tags) => tags,
                    Err(_) if self.feature.is_none() => return Err(self.missing_feature()),
                    Err(e) => return Err(e),
                };
                self.pending_tags.extend(tags);
                Ok(())
            }
            _ if self.feature.is_none() && !matches!(line.kind, LineKind::FeatureLine(_)) => {
                Err(self.missing_feature())
            }
            _ if !self.pending_tags.is_empty() && !accepts_tags(&line.kind) => {
                Err(ParseError::syntax_at(
                    "tags must be followed by a Feature, Rule, Scenario or Examples line",
                    line.position(),
                ))
            }
            LineKind::FeatureLine(title) => self.start_feature(&line, title),
            LineKind::RuleLine(title) => self.start_rule(&line, title),
            LineKind::BackgroundLine(title) => self.start_background(&line, title),
            LineKind::ScenarioLine(title) => self.start_scenario(&line, title, false),
            LineKind::ScenarioOutlineLine(title) => self.start_scenario(&line, title, true),
            LineKind::ExamplesLine(title) => self.start_examples(&line, title),
            LineKind::StepLine { keyword, text } => self.push_step(&line, keyword, text),
            LineKind::TableRow => self.push_row(&line),
            LineKind::DocStringSeparator {
                delimiter,
                content_type,
            } => self.open_doc_string(&line, delimiter, content_type),
            LineKind::Other => {
                if !self.section.takes_description() {
                    return Err(unexpected(&line));
                }
                self.description.push(line.raw.trim_end());
                Ok(())
            }
        }
    }

    /// Completes the tree once every line has been accepted.
    fn finish(&mut self) -> Result<Option<Feature>, ParseError> {
        if let Some(open) = &self.doc_string {
            return Err(ParseError::syntax_at(
                "unterminated doc string",
                open.position,
            ));
        }
        if let Some(tag) = self.pending_tags.first() {
            return Err(match self.feature {
                Some(_) => ParseError::syntax_at("tags at end of file", tag.position),
                None => self.missing_feature(),
            });
        }
        self.flush_description();
        Ok(self.feature.take())
    }

    fn collect_comment(&mut self, number: u32, raw: &str) {
        let line = token::classify(number, raw, self.dialect);
        match line.kind {
            LineKind::Comment => self.push_comment(&line),
            LineKind::Language(_) if self.language_line != Some(number) => self.push_comment(&line),
            _ => {}
        }
    }

    fn push_comment(&mut self, line: &Line<'_>) {
        self.comments.push(Comment {
            position: line.position(),
            text: line.raw.to_string(),
        });
    }

    fn start_feature(&mut self, line: &Line<'_>, title: Title<'_>) -> Accept {
        if self.feature.is_some() {
            return Err(ParseError::syntax_at(
                "a document may contain only one Feature",
                line.position(),
            ));
        }
        self.feature = Some(Feature {
            position: line.position(),
            keyword: title.keyword.to_string(),
            language: self.dialect.code.to_string(),
            name: title.name.to_string(),
            description: String::new(),
            tags: std::mem::take(&mut self.pending_tags),
            background: None,
            scenarios: Vec::new(),
            rules: Vec::new(),
        });
        self.section = Section::FeatureHeader;
        Ok(())
    }

    fn start_rule(&mut self, line: &Line<'_>, title: Title<'_>) -> Accept {
        self.flush_description();
        let tags = std::mem::take(&mut self.pending_tags);
        let Some(feature) = self.feature.as_mut() else {
            return Err(unexpected(line));
        };
        feature.rules.push(Rule {
            position: line.position(),
            keyword: title.keyword.to_string(),
            name: title.name.to_string(),
            description: String::new(),
            tags,
            background: None,
            scenarios: Vec::new(),
        });
        self.in_rule = true;
        self.section = Section::RuleHeader;
        Ok(())
    }

    fn start_background(&mut self, line: &Line<'_>, title: Title<'_>) -> Accept {
        if !self.pending_tags.is_empty() {
            return Err(ParseError::syntax_at(
                "a Background cannot be tagged",
                line.position(),
            ));
        }
        self.flush_description();

        let in_rule = self.in_rule;
        let Some(feature) = self.feature.as_mut() else {
            return Err(unexpected(line));
        };
        let slot = if in_rule {
            match feature.rules.last_mut() {
                Some(rule) if rule.scenarios.is_empty() => &mut rule.background,
                _ => return Err(misplaced_background(line)),
            }
        } else if feature.scenarios.is_empty() && feature.rules.is_empty() {
            &mut feature.background
        } else {
            return Err(misplaced_background(line));
        };
        if slot.is_some() {
            return Err(misplaced_background(line));
        }

        *slot = Some(Background {
            position: line.position(),
            keyword: title.keyword.to_string(),
            name: title.name.to_string(),
            description: String::new(),
            steps: Vec::new(),
        });
        self.section = Section::BackgroundHeader;
        Ok(())
    }

    fn start_scenario(&mut self, line: &Line<'_>, title: Title<'_>, outline: bool) -> Accept {
        self.flush_description();
        let scenario = Scenario {
            position: line.position(),
            keyword: title.keyword.to_string(),
            name: title.name.to_string(),
            description: String::new(),
            tags: std::mem::take(&mut self.pending_tags),
            steps: Vec::new(),
            examples: Vec::new(),
            is_outline: outline,
        };

        let in_rule = self.in_rule;
        let container = self.feature.as_mut().and_then(|feature| {
            if in_rule {
                feature.rules.last_mut().map(|rule| &mut rule.scenarios)
            } else {
                Some(&mut feature.scenarios)
            }
        });
        let Some(container) = container else {
            return Err(unexpected(line));
        };
        container.push(scenario);
        self.section = Section::ScenarioHeader;
        Ok(())
    }

    fn missing_feature(&self) -> ParseError {
        ParseError::document(format!(
            "expected a Feature line (language '{}')",
            self.dialect.code
        ))
    }

    fn start_examples(&mut self, line: &Line<'_>, title: Title<'_>) -> Accept {
        if !self.section.in_scenario() {
            return Err(ParseError::syntax_at(
                "Examples must belong to a Scenario",
                line.position(),
            ));
        }
        self.flush_description();
        let examples = Examples {
            position: line.position(),
            keyword: title.keyword.to_string(),
            name: title.name.to_string(),
            description: String::new(),
            tags: std::mem::take(&mut self.pending_tags),
            table: None,
        };

        let Some(scenario) = self.current_scenario() else {
            return Err(unexpected(line));
        };
        scenario.examples.push(examples);
        scenario.is_outline = true;
        self.section = Section::ExamplesHeader;
        Ok(())
    }

    fn push_step(&mut self, line: &Line<'_>, keyword: &'static str, text: &str) -> Accept {
        if !self.section.takes_steps() {
            return Err(ParseError::syntax_at(
                format!("step '{}{}' has no Scenario or Background", keyword, text),
                line.position(),
            ));
        }
        self.flush_description();
        let step = Step {
            position: line.position(),
            keyword: keyword.to_string(),
            keyword_type: self.dialect.step_keyword_type(keyword),
            text: text.to_string(),
            data_table: None,
            doc_string: None,
        };

        let Some(steps) = self.current_steps() else {
            return Err(unexpected(line));
        };
        steps.push(step);
        self.section = match self.section {
            Section::BackgroundHeader | Section::BackgroundSteps => Section::BackgroundSteps,
            _ => Section::ScenarioSteps,
        };
        Ok(())
    }

    fn push_row(&mut self, line: &Line<'_>) -> Accept {
        let cells = token::split_cells(line.content);
        let position = line.position();

        match self.section {
            Section::ExamplesHeader | Section::ExamplesTable => {
                self.flush_description();
                let Some(examples) = self
                    .current_scenario()
                    .and_then(|scenario| scenario.examples.last_mut())
                else {
                    return Err(unexpected(line));
                };
                examples
                    .table
                    .get_or_insert_with(|| DataTable {
                        position,
                        rows: Vec::new(),
                    })
                    .rows
                    .push(cells);
                self.section = Section::ExamplesTable;
                Ok(())
            }
            Section::BackgroundSteps | Section::ScenarioSteps => {
                match self.current_steps().and_then(|steps| steps.last_mut()) {
                    Some(step) if step.doc_string.is_none() => {
                        step.data_table
                            .get_or_insert_with(|| DataTable {
                                position,
                                rows: Vec::new(),
                            })
                            .rows
                            .push(cells);
                        Ok(())
                    }
                    _ => Err(unexpected(line)),
                }
            }
            _ => Err(ParseError::syntax_at(
                "table row has no Step or Examples",
                position,
            )),
        }
    }

    fn open_doc_string(
        &mut self,
        line: &Line<'_>,
        delimiter: &'static str,
        content_type: &str,
    ) -> Accept {
        let free = matches!(
            self.current_steps().and_then(|steps| steps.last()),
            Some(step) if step.doc_string.is_none() && step.data_table.is_none()
        );
        if !matches!(
            self.section,
            Section::BackgroundSteps | Section::ScenarioSteps
        ) || !free
        {
            return Err(ParseError::syntax_at(
                "doc string has no Step to attach to",
                line.position(),
            ));
        }
        self.doc_string = Some(OpenDocString {
            position: line.position(),
            delimiter,
            content_type: content_type.to_string(),
            indent: line.indent as usize,
            lines: Vec::new(),
        });
        Ok(())
    }

    fn close_doc_string(&mut self) {
        let Some(open) = self.doc_string.take() else {
            return;
        };
        let doc_string = open.close();
        if let Some(step) = self.current_steps().and_then(|steps| steps.last_mut()) {
            step.doc_string = Some(doc_string);
        }
    }

    fn flush_description(&mut self) {
        if self.description.is_empty() {
            return;
        }
        let mut lines = std::mem::take(&mut self.description);
        while lines.last().is_some_and(|line| line.trim().is_empty()) {
            lines.pop();
        }
        let text = lines.join("\n");

        if let Some(slot) = self.description_slot() {
            *slot = text;
        }
    }

    fn description_slot(&mut self) -> Option<&mut String> {
        match self.section {
            Section::FeatureHeader => self.feature.as_mut().map(|f| &mut f.description),
            Section::RuleHeader => self
                .feature
                .as_mut()
                .and_then(|f| f.rules.last_mut())
                .map(|r| &mut r.description),
            Section::BackgroundHeader => self.current_background().map(|b| &mut b.description),
            Section::ScenarioHeader => self.current_scenario().map(|s| &mut s.description),
            Section::ExamplesHeader => self
                .current_scenario()
                .and_then(|s| s.examples.last_mut())
                .map(|e| &mut e.description),
            _ => None,
        }
    }

    fn current_scenario(&mut self) -> Option<&mut Scenario> {
        let feature = self.feature.as_mut()?;
        if self.in_rule {
            feature.rules.last_mut()?.scenarios.last_mut()
        } else {
            feature.scenarios.last_mut()
        }
    }

    fn current_background(&mut self) -> Option<&mut Background> {
        let feature = self.feature.as_mut()?;
        if self.in_rule {
            feature.rules.last_mut()?.background.as_mut()
        } else {
            feature.background.as_mut()
        }
    }

    fn current_steps(&mut self) -> Option<&mut Vec<Step>> {
        match self.section {
            Section::BackgroundHeader | Section::BackgroundSteps => {
                self.current_background().map(|b| &mut b.steps)
            }
            Section::ScenarioHeader | Section::ScenarioSteps => {
                self.current_scenario().map(|s| &mut s.steps)
            }
            _ => None,
        }
    }
}

fn accepts_tags(kind: &LineKind<'_>) -> bool {
    matches!(
        kind,
        LineKind::FeatureLine(_)
            | LineKind::RuleLine(_)
            | LineKind::ScenarioLine(_)
            | LineKind::ScenarioOutlineLine(_)
            | LineKind::ExamplesLine(_)
            | LineKind::BackgroundLine(_)
    )
}

fn unexpected(line: &Line<'_>) -> ParseError {
    ParseError::syntax_at(
        format!("unexpected line: '{}'", line.content),
        line.position(),
    )
}

fn misplaced_background(line: &Line<'_>) -> ParseError {
    ParseError::syntax_at(
        "Background must come before any Scenario or Rule, once per container",
        line.position(),
    )
}

/// Parses the `@name` tokens of a tag line.
fn parse_tags(line: &Line<'_>) -> Result<Vec<Tag>, ParseError> {
    let mut tags = Vec::new();
    let mut column = line.indent + 1;
    let mut rest = line.content;

    loop {
        let skipped = rest.chars().take_while(|c| c.is_whitespace()).count() as u32;
        rest = rest.trim_start();
        column += skipped;
        if rest.is_empty() || rest.starts_with('#') {
            break;
        }

        let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        let token = &rest[..end];
        let position = TextPosition::new(line.number, column);
        match token.strip_prefix('@') {
            Some(name) if !name.is_empty() => tags.push(Tag {
                position,
                name: name.to_string(),
            }),
            _ => {
                return Err(ParseError::syntax_at(
                    format!("invalid tag '{token}'"),
                    position,
                ));
            }
        }

        column += token.chars().count() as u32;
        rest = &rest[end..];
    }

    Ok(tags)
}
