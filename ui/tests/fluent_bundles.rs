//! Shipped Fluent bundles must define exactly the messages of the pt-BR
//! fallback, each message once.
//!
//! A new language needs `ui/i18n/<tag>/portfolio_ui.ftl` with every pt-BR id,
//! an entry in `TRANSLATIONS` below, and a `Locale` variant in `ui/src/i18n.rs`.

use std::collections::BTreeSet;

const FALLBACK: &str = include_str!("../i18n/pt-BR/portfolio_ui.ftl");

const TRANSLATIONS: &[(&str, &str)] = &[("en-US", include_str!("../i18n/en-US/portfolio_ui.ftl"))];

/// Message ids in file order. Only unindented `id = value` lines define a
/// message; comments, section headers and continuation lines are skipped.
fn message_ids(ftl: &str) -> Vec<&str> {
    ftl.lines()
        .filter(|line| line.starts_with(|c: char| c.is_ascii_lowercase()))
        .filter_map(|line| line.split_once('='))
        .map(|(id, _)| id.trim())
        .collect()
}

fn duplicates<'a>(ids: &[&'a str]) -> BTreeSet<&'a str> {
    let mut seen = BTreeSet::new();
    ids.iter().copied().filter(|id| !seen.insert(*id)).collect()
}

#[test]
fn fallback_defines_each_message_once() {
    let ids = message_ids(FALLBACK);
    assert!(ids.len() > 40, "pt-BR bundle looks truncated ({} ids)", ids.len());
    assert_eq!(duplicates(&ids), BTreeSet::new(), "pt-BR repeats ids");
}

#[test]
fn translations_define_each_message_once() {
    for (tag, ftl) in TRANSLATIONS {
        assert_eq!(duplicates(&message_ids(ftl)), BTreeSet::new(), "{tag} repeats ids");
    }
}

#[test]
fn translations_match_the_fallback_message_set() {
    let expected: BTreeSet<&str> = message_ids(FALLBACK).into_iter().collect();

    for (tag, ftl) in TRANSLATIONS {
        let actual: BTreeSet<&str> = message_ids(ftl).into_iter().collect();
        let missing: Vec<_> = expected.difference(&actual).collect();
        let extra: Vec<_> = actual.difference(&expected).collect();
        assert!(
            missing.is_empty() && extra.is_empty(),
            "{tag} differs from pt-BR\n  missing: {missing:?}\n  extra: {extra:?}"
        );
    }
}

#[test]
fn message_id_parsing_skips_comments_and_continuations() {
    let ftl = "# note = not a message\n## Section\nhello = Olá\n    wrapped = text\nbye = Tchau\n";
    assert_eq!(message_ids(ftl), vec!["hello", "bye"]);
}
