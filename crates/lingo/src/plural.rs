//! Locale plural-rule resolution.
//!
//! Each language has an ordered list of CLDR plural categories with a
//! matching rule per category - English has "one" and "other", Russian has
//! "one", "few", "many", and "other", Arabic uses all six. The rules are
//! shipped as choice expressions (see [`crate::expr`]) so locale data and
//! author-written message conditions run through the same evaluator.
//!
//! Compiled rule lists are cached per thread per language to avoid
//! re-parsing the expressions on every call. The cache is initialized
//! lazily on first access within each thread.
//!
//! Every list ends with a catch-all rule, and unknown languages resolve to
//! a single catch-all, so a caller always gets at least one rule. Callers
//! must not assume the rule count equals a message's variant count.

use std::cell::RefCell;
use std::rc::Rc;

use crate::expr::ChoiceExpr;

/// One plural rule: a CLDR category name plus its matching expression.
#[derive(Debug, Clone)]
pub struct PluralRule {
    category: &'static str,
    expr: ChoiceExpr,
}

impl PluralRule {
    /// The CLDR category this rule selects ("one", "few", "many", ...).
    pub fn category(&self) -> &'static str {
        self.category
    }

    /// The rule expression source text.
    pub fn source(&self) -> &str {
        self.expr.as_str()
    }

    /// Evaluate this rule against a quantity.
    pub fn matches(&self, n: f64) -> bool {
        self.expr.matches(n)
    }
}

/// A rule as shipped in the data table: (category, expression source).
type RuleSpec = (&'static str, &'static str);

/// The catch-all list used for languages without grammatical plural and as
/// the fallback for unknown languages.
const CATCH_ALL: &[RuleSpec] = &[("other", "true")];

/// Per-language-family plural rules, written in the choice-expression
/// grammar. Order within a family's list is the locale's category order;
/// every list ends with a catch-all.
const RULE_TABLE: &[(&[&str], &[RuleSpec])] = &[
    // No grammatical plural.
    (
        &[
            "bo", "dz", "id", "ja", "jv", "km", "ko", "lo", "ms", "my", "th", "vi", "yo", "zh",
        ],
        CATCH_ALL,
    ),
    // Singular for exactly one.
    (
        &[
            "af", "az", "bg", "ca", "da", "de", "el", "en", "eo", "es", "et", "eu", "fi", "gl",
            "gu", "hu", "it", "ka", "kk", "ky", "mn", "nb", "ne", "nl", "nn", "no", "pa", "sq",
            "sv", "sw", "ta", "te", "tr", "ur", "uz",
        ],
        &[("one", "n == 1"), ("other", "true")],
    ),
    // Singular covers zero and one.
    (
        &["am", "bn", "fa", "fr", "hi", "kn", "mr", "pt", "zu"],
        &[("one", "n >= 0 && n < 2"), ("other", "true")],
    ),
    // Hebrew dual.
    (
        &["he"],
        &[("one", "n == 1"), ("two", "n == 2"), ("other", "true")],
    ),
    // East Slavic / Serbo-Croatian.
    (
        &["be", "bs", "hr", "ru", "sh", "sr", "uk"],
        &[
            ("one", "n % 10 == 1 && n % 100 != 11"),
            ("few", "n % 10 in 2..4 && n % 100 not in 12..14"),
            ("many", "n % 10 == 0 || n % 10 in 5..9 || n % 100 in 11..14"),
            ("other", "true"),
        ],
    ),
    // Polish.
    (
        &["pl"],
        &[
            ("one", "n == 1"),
            ("few", "n % 10 in 2..4 && n % 100 not in 12..14"),
            (
                "many",
                "n != 1 && (n % 10 in 0..1 || n % 10 in 5..9 || n % 100 in 12..14)",
            ),
            ("other", "true"),
        ],
    ),
    // Czech and Slovak.
    (
        &["cs", "sk"],
        &[("one", "n == 1"), ("few", "n in 2..4"), ("other", "true")],
    ),
    // Lithuanian.
    (
        &["lt"],
        &[
            ("one", "n % 10 == 1 && n % 100 not in 11..19"),
            ("few", "n % 10 in 2..9 && n % 100 not in 11..19"),
            ("other", "true"),
        ],
    ),
    // Latvian.
    (
        &["lv"],
        &[
            ("zero", "n % 10 == 0 || n % 100 in 11..19"),
            ("one", "n % 10 == 1 && n % 100 != 11"),
            ("other", "true"),
        ],
    ),
    // Romanian and Moldavian.
    (
        &["mo", "ro"],
        &[
            ("one", "n == 1"),
            ("few", "n == 0 || (n != 1 && n % 100 in 1..19)"),
            ("other", "true"),
        ],
    ),
    // Irish.
    (
        &["ga"],
        &[
            ("one", "n == 1"),
            ("two", "n == 2"),
            ("few", "n in 3..6"),
            ("many", "n in 7..10"),
            ("other", "true"),
        ],
    ),
    // Arabic.
    (
        &["ar"],
        &[
            ("zero", "n == 0"),
            ("one", "n == 1"),
            ("two", "n == 2"),
            ("few", "n % 100 in 3..10"),
            ("many", "n % 100 in 11..99"),
            ("other", "true"),
        ],
    ),
    // Slovenian.
    (
        &["sl"],
        &[
            ("one", "n % 100 == 1"),
            ("two", "n % 100 == 2"),
            ("few", "n % 100 in 3..4"),
            ("other", "true"),
        ],
    ),
    // Maltese.
    (
        &["mt"],
        &[
            ("one", "n == 1"),
            ("few", "n == 0 || n % 100 in 2..10"),
            ("many", "n % 100 in 11..19"),
            ("other", "true"),
        ],
    ),
    // Icelandic and Macedonian.
    (
        &["is", "mk"],
        &[("one", "n % 10 == 1 && n % 100 != 11"), ("other", "true")],
    ),
    // Welsh.
    (
        &["cy"],
        &[
            ("zero", "n == 0"),
            ("one", "n == 1"),
            ("two", "n == 2"),
            ("few", "n == 3"),
            ("many", "n == 6"),
            ("other", "true"),
        ],
    ),
];

thread_local! {
    /// Per-thread cache of compiled rule lists keyed by language code.
    static RULES_CACHE: RefCell<Vec<(&'static str, Rc<[PluralRule]>)>> =
        const { RefCell::new(Vec::new()) };
}

/// Normalize a locale identifier: lowercase, `-` separators become `_`.
///
/// # Example
///
/// ```
/// use lingo::canonical_id;
///
/// assert_eq!(canonical_id("en-US"), "en_us");
/// assert_eq!(canonical_id("RU"), "ru");
/// ```
pub fn canonical_id(locale: &str) -> String {
    locale.trim().to_lowercase().replace('-', "_")
}

/// Find the rule table entry for a language code.
///
/// Returns the canonical `&'static str` key for caching, or the empty key
/// with the catch-all list for unrecognized languages.
fn rule_specs(lang: &str) -> (&'static str, &'static [RuleSpec]) {
    for (languages, specs) in RULE_TABLE {
        if let Some(code) = languages.iter().find(|&&code| code == lang) {
            return (code, specs);
        }
    }
    ("", CATCH_ALL)
}

/// Get the ordered plural rules for a locale.
///
/// The locale may be a bare language (`"ru"`) or a full identifier
/// (`"ru-RU"`, `"ru_ru"`); only the language subtag decides the rules.
/// Rules are cached per thread per language, so repeated calls with the
/// same language reuse the previously compiled list.
///
/// # Examples
///
/// ```
/// use lingo::plural_rules;
///
/// let en = plural_rules("en");
/// assert_eq!(en.len(), 2);
/// assert!(en[0].matches(1.0));
/// assert!(en[1].matches(42.0));
///
/// let ru = plural_rules("ru_RU");
/// assert_eq!(ru.len(), 4);
/// ```
pub fn plural_rules(locale: &str) -> Rc<[PluralRule]> {
    let canonical = canonical_id(locale);
    let lang = canonical.split('_').next().unwrap_or_default();
    let (key, specs) = rule_specs(lang);

    RULES_CACHE.with_borrow_mut(|cache| {
        if let Some((_, rules)) = cache.iter().find(|(code, _)| *code == key) {
            return Rc::clone(rules);
        }
        let compiled: Vec<PluralRule> = specs
            .iter()
            .map(|(category, source)| PluralRule {
                category,
                expr: ChoiceExpr::parse(source).expect("shipped plural rule should parse"),
            })
            .collect();
        let rules: Rc<[PluralRule]> = compiled.into();
        cache.push((key, Rc::clone(&rules)));
        rules
    })
}

/// Index of the first rule matching `n`, falling back to the last rule.
///
/// The last rule of every shipped list is a catch-all, so the fallback only
/// fires for quantities nothing matches under a malformed custom list.
pub fn matching_rule(rules: &[PluralRule], n: f64) -> usize {
    rules
        .iter()
        .position(|rule| rule.matches(n))
        .unwrap_or(rules.len().saturating_sub(1))
}
