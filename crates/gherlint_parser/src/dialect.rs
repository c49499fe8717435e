//! Gherkin keyword dialects.
//!
//! A static table mapping language codes to the keyword spellings accepted
//! for each construct. Lookups are pure and the table is read-only, so it is
//! freely shared between threads.
//!
//! Step spellings keep their trailing separator: most languages end them with
//! a space, while languages written without word spacing (`ja`, `ko`, `zh-CN`,
//! `zh-TW`) do not. The bullet `* ` is accepted for every step class.

use gherlint_ast::KeywordType;
use languages::*;

mod languages;

/// Language used when a document declares none, or declares an unknown one.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Keyword spellings for one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dialect {
    /// Language code as written in `# language:` declarations.
    pub code: &'static str,
    /// English name of the language.
    pub name: &'static str,
    /// Native name of the language.
    pub native: &'static str,
    pub feature: &'static [&'static str],
    pub background: &'static [&'static str],
    pub scenario: &'static [&'static str],
    pub scenario_outline: &'static [&'static str],
    pub examples: &'static [&'static str],
    pub rule: &'static [&'static str],
    pub given: &'static [&'static str],
    pub when: &'static [&'static str],
    pub then: &'static [&'static str],
    pub and: &'static [&'static str],
    pub but: &'static [&'static str],
}

/// Header constructs introduced by `<keyword>:`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TitleKind {
    Feature,
    Background,
    Scenario,
    ScenarioOutline,
    Examples,
    Rule,
}

impl TitleKind {
    /// All header constructs.
    pub const ALL: [TitleKind; 6] = [
        TitleKind::Feature,
        TitleKind::Background,
        TitleKind::Scenario,
        TitleKind::ScenarioOutline,
        TitleKind::Examples,
        TitleKind::Rule,
    ];
}

impl Dialect {
    /// Returns the spellings accepted for a header construct.
    pub fn title_keywords(&self, kind: TitleKind) -> &'static [&'static str] {
        match kind {
            TitleKind::Feature => self.feature,
            TitleKind::Background => self.background,
            TitleKind::Scenario => self.scenario,
            TitleKind::ScenarioOutline => self.scenario_outline,
            TitleKind::Examples => self.examples,
            TitleKind::Rule => self.rule,
        }
    }

    /// Iterates over every step spelling of this dialect, duplicates included.
    pub fn step_keywords(&self) -> impl Iterator<Item = &'static str> {
        self.given
            .iter()
            .chain(self.when)
            .chain(self.then)
            .chain(self.and)
            .chain(self.but)
            .copied()
    }

    /// Classifies a literal step keyword.
    ///
    /// A spelling that belongs to more than one step class (the bullet belongs
    /// to all of them) cannot be attributed to a single role and yields
    /// [`KeywordType::Unknown`], as does a spelling this dialect does not know.
    pub fn step_keyword_type(&self, keyword: &str) -> KeywordType {
        let classes = [
            (self.given, KeywordType::Context),
            (self.when, KeywordType::Action),
            (self.then, KeywordType::Outcome),
            (self.and, KeywordType::Conjunction),
            (self.but, KeywordType::Conjunction),
        ];

        let mut found: Option<KeywordType> = None;
        for (spellings, kind) in classes {
            if !spellings.contains(&keyword) {
                continue;
            }
            match found {
                None => found = Some(kind),
                Some(existing) if existing == kind => {}
                Some(_) => return KeywordType::Unknown,
            }
        }

        found.unwrap_or(KeywordType::Unknown)
    }

    /// Matches the longest header keyword followed by `:` at the start of `text`.
    ///
    /// Returns the construct, the keyword spelling and the remainder after the colon.
    pub fn match_title<'t>(&self, text: &'t str) -> Option<(TitleKind, &'static str, &'t str)> {
        let mut best: Option<(TitleKind, &'static str)> = None;
        for kind in TitleKind::ALL {
            for &keyword in self.title_keywords(kind) {
                let Some(rest) = text.strip_prefix(keyword) else {
                    continue;
                };
                if !rest.starts_with(':') {
                    continue;
                }
                if best.is_none_or(|(_, current)| keyword.len() > current.len()) {
                    best = Some((kind, keyword));
                }
            }
        }

        best.map(|(kind, keyword)| (kind, keyword, &text[keyword.len() + 1..]))
    }

    /// Matches the longest step keyword at the start of `text`.
    ///
    /// Returns the keyword spelling and the remainder of the line.
    pub fn match_step<'t>(&self, text: &'t str) -> Option<(&'static str, &'t str)> {
        self.step_keywords()
            .filter(|keyword| text.starts_with(keyword))
            .max_by_key(|keyword| keyword.len())
            .map(|keyword| (keyword, &text[keyword.len()..]))
    }
}

/// Every dialect shipped with the parser.
pub fn all() -> &'static [Dialect] {
    DIALECTS
}

/// Looks up a dialect by code; `None` if the code is unknown.
pub fn lookup(code: &str) -> Option<&'static Dialect> {
    DIALECTS
        .iter()
        .find(|dialect| dialect.code.eq_ignore_ascii_case(code))
}

/// Resolves a dialect by code, falling back to [`DEFAULT_LANGUAGE`].
pub fn resolve(code: &str) -> &'static Dialect {
    lookup(code).unwrap_or_else(default_dialect)
}

/// The dialect used when nothing else applies.
pub fn default_dialect() -> &'static Dialect {
    &DIALECTS[0]
}

static DIALECTS: &[Dialect] = &[
    EN, FR, DE, ES, IT, PT, NL, PL, RU, JA, ZH_CN, AF, AM, AN, AR, AST, AZ, BE, BG, BM, BS, CA, CS,
    CY_GB, DA, EL, EM, EN_SCOUSE, EN_AU, EN_LOL, EN_PIRATE, EO, ET, FA, FI, GJ, GL, HE, HI, HR, HT,
    HU, ID, IS, JV, KA, KN, KO, LT, LU, LV, MK_CYRL, MK_LATN, MN, MR, NE, NO, PA, RO, SK, SL,
    SR_CYRL, SR_LATN, SV, TA, TE, TH, TLH, TR, TT, UK, UR, UZ, VI, ZH_TW,
];

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_default_dialect_is_english() {
        assert_eq!(default_dialect().code, DEFAULT_LANGUAGE);
    }

    #[rstest]
    #[case("fr", "fr")]
    #[case("de", "de")]
    #[case("zh-CN", "zh-CN")]
    #[case("zh-cn", "zh-CN")]
    #[case("SR-CYRL", "sr-Cyrl")]
    #[case("en-Scouse", "en-Scouse")]
    #[case("xx", "en")]
    #[case("", "en")]
    fn test_resolve(#[case] code: &str, #[case] expected: &str) {
        assert_eq!(resolve(code).code, expected);
    }

    #[rstest]
    #[case("sv", "Egenskap: Inloggning", TitleKind::Feature)]
    #[case("da", "Egenskab: Login", TitleKind::Feature)]
    #[case("no", "Abstrakt Scenario: x", TitleKind::ScenarioOutline)]
    #[case("tr", "Senaryo taslağı: x", TitleKind::ScenarioOutline)]
    #[case("uk", "Передумова:", TitleKind::Background)]
    #[case("ko", "시나리오 개요: x", TitleKind::ScenarioOutline)]
    #[case("ar", "خاصية: x", TitleKind::Feature)]
    #[case("sr-Latn", "Pravilo: x", TitleKind::Rule)]
    #[case("zh-TW", "例子:", TitleKind::Examples)]
    fn test_match_title_in_more_languages(
        #[case] code: &str,
        #[case] text: &str,
        #[case] expected: TitleKind,
    ) {
        let dialect = lookup(code).unwrap();
        assert_eq!(dialect.code, code);
        assert_eq!(dialect.match_title(text).unwrap().0, expected);
    }

    #[test]
    fn test_catalogue_covers_dozens_of_languages() {
        assert!(all().len() > 70);
        assert_eq!(all()[0].code, DEFAULT_LANGUAGE);
    }

    #[test]
    fn test_lookup_unknown() {
        assert!(lookup("klingon").is_none());
    }

    #[test]
    fn test_codes_are_unique() {
        let mut codes: Vec<&str> = all().iter().map(|d| d.code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), all().len());
    }

    #[test]
    fn test_every_dialect_defines_every_construct() {
        for dialect in all() {
            for kind in TitleKind::ALL {
                assert!(
                    !dialect.title_keywords(kind).is_empty(),
                    "{} has no {:?} keyword",
                    dialect.code,
                    kind
                );
            }
            assert!(dialect.step_keywords().count() > 5, "{}", dialect.code);
        }
    }

    #[rstest]
    #[case("en", "Given ", KeywordType::Context)]
    #[case("en", "When ", KeywordType::Action)]
    #[case("en", "Then ", KeywordType::Outcome)]
    #[case("en", "And ", KeywordType::Conjunction)]
    #[case("en", "But ", KeywordType::Conjunction)]
    #[case("en", "* ", KeywordType::Unknown)]
    #[case("en", "Soit ", KeywordType::Unknown)]
    #[case("fr", "Soit ", KeywordType::Context)]
    #[case("fr", "Lorsqu'", KeywordType::Action)]
    #[case("fr", "Et que ", KeywordType::Conjunction)]
    #[case("ja", "前提", KeywordType::Context)]
    #[case("ru", "Тогда ", KeywordType::Outcome)]
    #[case("sv", "Givet ", KeywordType::Context)]
    #[case("fi", "Kun ", KeywordType::Action)]
    #[case("hu", "Akkor ", KeywordType::Outcome)]
    #[case("ko", "그리고", KeywordType::Conjunction)]
    #[case("em", "🎬", KeywordType::Action)]
    fn test_step_keyword_type(
        #[case] code: &str,
        #[case] keyword: &str,
        #[case] expected: KeywordType,
    ) {
        assert_eq!(resolve(code).step_keyword_type(keyword), expected);
    }

    #[test]
    fn test_match_title_requires_colon() {
        let en = resolve("en");
        assert!(en.match_title("Feature Login").is_none());
        assert_eq!(
            en.match_title("Feature: Login"),
            Some((TitleKind::Feature, "Feature", " Login"))
        );
    }

    #[test]
    fn test_match_title_outline_over_scenario() {
        let en = resolve("en");
        let (kind, keyword, rest) = en.match_title("Scenario Outline: eat").unwrap();
        assert_eq!(kind, TitleKind::ScenarioOutline);
        assert_eq!(keyword, "Scenario Outline");
        assert_eq!(rest, " eat");

        let (kind, _, _) = en.match_title("Scenario: eat").unwrap();
        assert_eq!(kind, TitleKind::Scenario);
    }

    #[test]
    fn test_match_title_german_examples_vs_example() {
        let de = resolve("de");
        assert_eq!(de.match_title("Beispiele:").unwrap().0, TitleKind::Examples);
        assert_eq!(de.match_title("Beispiel: x").unwrap().0, TitleKind::Scenario);
    }

    #[test]
    fn test_match_step_prefers_longest() {
        let fr = resolve("fr");
        assert_eq!(
            fr.match_step("Etant donné que le panier est vide"),
            Some(("Etant donné que ", "le panier est vide"))
        );
        assert_eq!(fr.match_step("Etant donné un panier"), Some(("Etant donné ", "un panier")));
    }

    #[test]
    fn test_match_step_without_separator() {
        let ja = resolve("ja");
        assert_eq!(ja.match_step("前提ログインしている"), Some(("前提", "ログインしている")));
    }

    #[test]
    fn test_match_step_bullet() {
        let en = resolve("en");
        assert_eq!(en.match_step("* a thing"), Some(("* ", "a thing")));
        assert_eq!(en.match_step("*nothing"), None);
    }
}
