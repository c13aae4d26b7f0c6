//! Integration tests for plural-variant selection.

use lingo::{choose, evaluate, plural_rules, split_variants};

// =============================================================================
// Splitting
// =============================================================================

#[test]
fn split_is_strict_on_pipes() {
    assert_eq!(split_variants("a|b|c"), vec!["a", "b", "c"]);
    assert_eq!(split_variants("just one"), vec!["just one"]);
    assert_eq!(split_variants("a||b"), vec!["a", "", "b"]);
}

#[test]
fn split_and_rejoin_round_trips() {
    let message = "variant1|variant2|variant3";
    assert_eq!(split_variants(message).join("|"), message);
}

// =============================================================================
// Zipped selection against locale rules
// =============================================================================

#[test]
fn russian_three_variants() {
    let rules = plural_rules("ru");
    let message = "огурец|огурца|огурцов";
    assert_eq!(choose(message, Some(1.0), &rules), "огурец");
    assert_eq!(choose(message, Some(2.0), &rules), "огурца");
    assert_eq!(choose(message, Some(5.0), &rules), "огурцов");
    assert_eq!(choose(message, Some(0.0), &rules), "огурцов");
    assert_eq!(choose(message, Some(21.0), &rules), "огурец");
    assert_eq!(choose(message, Some(22.0), &rules), "огурца");
    assert_eq!(choose(message, Some(11.0), &rules), "огурцов");
}

#[test]
fn english_two_variants() {
    let rules = plural_rules("en");
    let message = "cucumber|cucumbers";
    assert_eq!(choose(message, Some(1.0), &rules), "cucumber");
    assert_eq!(choose(message, Some(0.0), &rules), "cucumbers");
    assert_eq!(choose(message, Some(2.0), &rules), "cucumbers");
}

#[test]
fn rich_locale_rules_beyond_variant_count_are_unused() {
    // Two variants against Russian's four rules: only "one" and "few" are
    // zipped, and the last zipped clause doubles as the default.
    let rules = plural_rules("ru");
    let message = "zombie|zombies";
    assert_eq!(choose(message, Some(1.0), &rules), "zombie");
    assert_eq!(choose(message, Some(2.0), &rules), "zombies");
    assert_eq!(choose(message, Some(10.0), &rules), "zombies");
}

#[test]
fn variants_beyond_rule_count_are_unreachable() {
    // English has two rules; the third variant can never be selected.
    let rules = plural_rules("en");
    let message = "one|other|never";
    assert_eq!(choose(message, Some(1.0), &rules), "one");
    assert_eq!(choose(message, Some(5.0), &rules), "other");
    assert_eq!(choose(message, Some(0.0), &rules), "other");
}

#[test]
fn single_rule_locale_always_picks_first_variant() {
    let rules = plural_rules("ja");
    assert_eq!(rules.len(), 1);
    let message = "まい|まい達";
    assert_eq!(choose(message, Some(1.0), &rules), "まい");
    assert_eq!(choose(message, Some(7.0), &rules), "まい");
}

// =============================================================================
// Explicit conditions
// =============================================================================

#[test]
fn explicit_conditions_are_taken_as_written() {
    let rules = plural_rules("en");
    let message = "n==1#one book|n>1#many books";
    assert_eq!(choose(message, Some(1.0), &rules), "one book");
    assert_eq!(choose(message, Some(10.0), &rules), "many books");
}

#[test]
fn unmatched_quantity_falls_to_last_clause() {
    let rules = plural_rules("en");
    let message = "n==1#one book|n>1#many books";
    assert_eq!(choose(message, Some(0.0), &rules), "many books");
}

#[test]
fn one_embedded_condition_disables_zipping() {
    // The second variant has no condition; it is only the trailing default.
    let rules = plural_rules("en");
    let message = "n>=2#several|fallback";
    assert_eq!(choose(message, Some(2.0), &rules), "several");
    assert_eq!(choose(message, Some(1.0), &rules), "fallback");
}

#[test]
fn malformed_conditions_never_match() {
    let rules = plural_rules("en");
    let message = "n ===#broken|n==1#one|rest";
    assert_eq!(choose(message, Some(1.0), &rules), "one");
    assert_eq!(choose(message, Some(9.0), &rules), "rest");
}

#[test]
fn fractional_quantities_choose_by_comparison() {
    let rules = plural_rules("en");
    let message = "n<=1#at most one|n>1#more than one";
    assert_eq!(choose(message, Some(0.5), &rules), "at most one");
    assert_eq!(choose(message, Some(1.5), &rules), "more than one");
}

// =============================================================================
// Evaluator spot checks through the public surface
// =============================================================================

#[test]
fn evaluator_handles_cldr_compounds() {
    let few = "n % 10 in 2..4 && n % 100 not in 12..14";
    assert!(evaluate(few, 22.0));
    assert!(!evaluate(few, 13.0));
    let many = "n % 10 == 0 || n % 10 in 5..9 || n % 100 in 11..14";
    assert!(evaluate(many, 0.0));
    assert!(evaluate(many, 111.0));
    assert!(!evaluate(many, 2.0));
}
