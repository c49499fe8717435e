//! Walk functions for document traversal.
//!
//! The order is fixed and is part of the contract that analyses rely on:
//!
//! 1. `enter_document`
//! 2. the feature, if present: its tags, background, top-level scenarios,
//!    then rules, each bracketed by its own enter/leave pair
//! 3. every comment in source order
//! 4. `leave_document`

use crate::{Background, Document, Examples, Feature, Rule, Scenario, Step, Tag};

use super::visit::Visitor;

/// Walks a whole document, invoking every visitor hook exactly once per node.
pub fn walk<'a, V>(document: &'a Document, visitor: &mut V)
where
    V: Visitor<'a> + ?Sized,
{
    visitor.enter_document(document);

    if let Some(feature) = &document.feature {
        walk_feature(visitor, feature);
    }

    for comment in &document.comments {
        visitor.visit_comment(comment);
    }

    visitor.leave_document(document);
}

/// Walks a feature and everything beneath it.
pub fn walk_feature<'a, V>(visitor: &mut V, feature: &'a Feature)
where
    V: Visitor<'a> + ?Sized,
{
    visitor.enter_feature(feature);
    walk_tags(visitor, &feature.tags);

    if let Some(background) = &feature.background {
        walk_background(visitor, background);
    }

    for scenario in &feature.scenarios {
        walk_scenario(visitor, scenario);
    }

    for rule in &feature.rules {
        walk_rule(visitor, rule);
    }

    visitor.leave_feature(feature);
}

pub fn walk_rule<'a, V>(visitor: &mut V, rule: &'a Rule)
where
    V: Visitor<'a> + ?Sized,
{
    visitor.enter_rule(rule);
    walk_tags(visitor, &rule.tags);

    if let Some(background) = &rule.background {
        walk_background(visitor, background);
    }

    for scenario in &rule.scenarios {
        walk_scenario(visitor, scenario);
    }

    visitor.leave_rule(rule);
}

pub fn walk_background<'a, V>(visitor: &mut V, background: &'a Background)
where
    V: Visitor<'a> + ?Sized,
{
    visitor.enter_background(background);
    walk_steps(visitor, &background.steps);
    visitor.leave_background(background);
}

pub fn walk_scenario<'a, V>(visitor: &mut V, scenario: &'a Scenario)
where
    V: Visitor<'a> + ?Sized,
{
    visitor.enter_scenario(scenario);
    walk_tags(visitor, &scenario.tags);
    walk_steps(visitor, &scenario.steps);

    for examples in &scenario.examples {
        walk_examples(visitor, examples);
    }

    visitor.leave_scenario(scenario);
}

pub fn walk_examples<'a, V>(visitor: &mut V, examples: &'a Examples)
where
    V: Visitor<'a> + ?Sized,
{
    visitor.enter_examples(examples);
    walk_tags(visitor, &examples.tags);
    visitor.leave_examples(examples);
}

#[inline]
fn walk_steps<'a, V>(visitor: &mut V, steps: &'a [Step])
where
    V: Visitor<'a> + ?Sized,
{
    for step in steps {
        visitor.enter_step(step);
        visitor.leave_step(step);
    }
}

#[inline]
fn walk_tags<'a, V>(visitor: &mut V, tags: &'a [Tag])
where
    V: Visitor<'a> + ?Sized,
{
    for tag in tags {
        visitor.enter_tag(tag);
        visitor.leave_tag(tag);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Comment, DataTable, KeywordType, TextPosition};
    use pretty_assertions::assert_eq;

    fn pos(line: u32, column: u32) -> TextPosition {
        TextPosition::new(line, column)
    }

    fn tag(line: u32, column: u32, name: &str) -> Tag {
        Tag {
            position: pos(line, column),
            name: name.to_string(),
        }
    }

    fn step(line: u32, keyword: &str, keyword_type: KeywordType, text: &str) -> Step {
        Step {
            position: pos(line, 5),
            keyword: keyword.to_string(),
            keyword_type,
            text: text.to_string(),
            data_table: None,
            doc_string: None,
        }
    }

    fn scenario(line: u32, name: &str, steps: Vec<Step>) -> Scenario {
        Scenario {
            position: pos(line, 3),
            keyword: "Scenario".to_string(),
            name: name.to_string(),
            description: String::new(),
            tags: Vec::new(),
            steps,
            examples: Vec::new(),
            is_outline: false,
        }
    }

    /// @smoke
    /// Feature: Shop
    ///   Background:
    ///     Given a catalog
    ///   @fast
    ///   Scenario Outline: buy
    ///     When I buy <item>
    ///     Examples:
    ///       | item |
    ///       | tea  |
    ///   Rule: Refunds
    ///     Scenario: refund
    ///       Then I get money back
    /// # trailing
    fn sample_document() -> Document {
        let mut outline = scenario(
            6,
            "buy",
            vec![step(7, "When ", KeywordType::Action, "I buy <item>")],
        );
        outline.keyword = "Scenario Outline".to_string();
        outline.is_outline = true;
        outline.tags = vec![tag(5, 3, "fast")];
        outline.examples = vec![Examples {
            position: pos(8, 5),
            keyword: "Examples".to_string(),
            name: String::new(),
            description: String::new(),
            tags: Vec::new(),
            table: Some(DataTable {
                position: pos(9, 7),
                rows: vec![vec!["item".to_string()], vec!["tea".to_string()]],
            }),
        }];

        Document {
            source_id: "shop.feature".to_string(),
            language: "en".to_string(),
            feature: Some(Feature {
                position: pos(2, 1),
                keyword: "Feature".to_string(),
                language: "en".to_string(),
                name: "Shop".to_string(),
                description: String::new(),
                tags: vec![tag(1, 1, "smoke")],
                background: Some(Background {
                    position: pos(3, 3),
                    keyword: "Background".to_string(),
                    name: String::new(),
                    description: String::new(),
                    steps: vec![step(4, "Given ", KeywordType::Context, "a catalog")],
                }),
                scenarios: vec![outline],
                rules: vec![Rule {
                    position: pos(11, 3),
                    keyword: "Rule".to_string(),
                    name: "Refunds".to_string(),
                    description: String::new(),
                    tags: Vec::new(),
                    background: None,
                    scenarios: vec![scenario(
                        12,
                        "refund",
                        vec![step(13, "Then ", KeywordType::Outcome, "I get money back")],
                    )],
                }],
            }),
            comments: vec![Comment {
                position: pos(14, 1),
                text: "# trailing".to_string(),
            }],
        }
    }

    /// Records every event as a short string.
    #[derive(Default)]
    struct EventRecorder {
        events: Vec<String>,
    }

    impl<'a> Visitor<'a> for EventRecorder {
        fn enter_document(&mut self, _document: &'a Document) {
            self.events.push("enter:document".to_string());
        }
        fn leave_document(&mut self, _document: &'a Document) {
            self.events.push("leave:document".to_string());
        }
        fn enter_feature(&mut self, feature: &'a Feature) {
            self.events.push(format!("enter:feature:{}", feature.name));
        }
        fn leave_feature(&mut self, feature: &'a Feature) {
            self.events.push(format!("leave:feature:{}", feature.name));
        }
        fn enter_rule(&mut self, rule: &'a Rule) {
            self.events.push(format!("enter:rule:{}", rule.name));
        }
        fn leave_rule(&mut self, rule: &'a Rule) {
            self.events.push(format!("leave:rule:{}", rule.name));
        }
        fn enter_background(&mut self, _background: &'a Background) {
            self.events.push("enter:background".to_string());
        }
        fn leave_background(&mut self, _background: &'a Background) {
            self.events.push("leave:background".to_string());
        }
        fn enter_scenario(&mut self, scenario: &'a Scenario) {
            self.events.push(format!("enter:scenario:{}", scenario.name));
        }
        fn leave_scenario(&mut self, scenario: &'a Scenario) {
            self.events.push(format!("leave:scenario:{}", scenario.name));
        }
        fn enter_step(&mut self, step: &'a Step) {
            self.events.push(format!("enter:step:{}", step.text));
        }
        fn leave_step(&mut self, step: &'a Step) {
            self.events.push(format!("leave:step:{}", step.text));
        }
        fn enter_examples(&mut self, _examples: &'a Examples) {
            self.events.push("enter:examples".to_string());
        }
        fn leave_examples(&mut self, _examples: &'a Examples) {
            self.events.push("leave:examples".to_string());
        }
        fn enter_tag(&mut self, tag: &'a Tag) {
            self.events.push(format!("enter:tag:{}", tag.name));
        }
        fn leave_tag(&mut self, tag: &'a Tag) {
            self.events.push(format!("leave:tag:{}", tag.name));
        }
        fn visit_comment(&mut self, comment: &'a Comment) {
            self.events.push(format!("comment:{}", comment.text));
        }
    }

    #[test]
    fn walk_follows_fixed_order() {
        let document = sample_document();
        let mut recorder = EventRecorder::default();
        walk(&document, &mut recorder);

        assert_eq!(
            recorder.events,
            vec![
                "enter:document",
                "enter:feature:Shop",
                "enter:tag:smoke",
                "leave:tag:smoke",
                "enter:background",
                "enter:step:a catalog",
                "leave:step:a catalog",
                "leave:background",
                "enter:scenario:buy",
                "enter:tag:fast",
                "leave:tag:fast",
                "enter:step:I buy <item>",
                "leave:step:I buy <item>",
                "enter:examples",
                "leave:examples",
                "leave:scenario:buy",
                "enter:rule:Refunds",
                "enter:scenario:refund",
                "enter:step:I get money back",
                "leave:step:I get money back",
                "leave:scenario:refund",
                "leave:rule:Refunds",
                "leave:feature:Shop",
                "comment:# trailing",
                "leave:document",
            ]
        );
    }

    #[test]
    fn walk_without_feature_visits_comments() {
        let mut document = Document::empty("broken.feature", "en");
        document.comments.push(Comment {
            position: pos(1, 1),
            text: "# only a comment".to_string(),
        });

        let mut recorder = EventRecorder::default();
        walk(&document, &mut recorder);

        assert_eq!(
            recorder.events,
            vec![
                "enter:document",
                "comment:# only a comment",
                "leave:document"
            ]
        );
    }

    #[test]
    fn noop_visitor_completes_walk() {
        struct Noop;
        impl<'a> Visitor<'a> for Noop {}

        let document = sample_document();
        walk(&document, &mut Noop);
    }

    #[test]
    fn walk_accepts_trait_objects() {
        let document = sample_document();
        let mut recorder = EventRecorder::default();
        {
            let visitor: &mut dyn Visitor<'_> = &mut recorder;
            walk(&document, visitor);
        }
        assert_eq!(recorder.events.first().map(String::as_str), Some("enter:document"));
        assert_eq!(recorder.events.last().map(String::as_str), Some("leave:document"));
    }

    #[test]
    fn visitor_can_borrow_nodes() {
        struct StepTexts<'a> {
            texts: Vec<&'a str>,
        }

        impl<'a> Visitor<'a> for StepTexts<'a> {
            fn enter_step(&mut self, step: &'a Step) {
                self.texts.push(&step.text);
            }
        }

        let document = sample_document();
        let mut collector = StepTexts { texts: Vec::new() };
        walk(&document, &mut collector);

        assert_eq!(
            collector.texts,
            vec!["a catalog", "I buy <item>", "I get money back"]
        );
    }
}
