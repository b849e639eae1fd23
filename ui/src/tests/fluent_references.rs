//! Lookups in Rust and messages in the fallback bundle must agree: every id
//! the string tables ask for exists, and no message sits unused.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::i18n::{loader_for, Locale};

const LOOKUP: &str = "fl!(loader, \"";
const FALLBACK_FTL: &str = include_str!("../../i18n/pt-BR/portfolio_ui.ftl");

fn is_message_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// Literal ids passed to the lookup macro anywhere under `dir`.
fn collect_lookups(dir: &Path, ids: &mut BTreeSet<String>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for path in entries.flatten().map(|entry| entry.path()) {
        if path.is_dir() {
            collect_lookups(&path, ids);
            continue;
        }
        if path.extension().and_then(|ext| ext.to_str()) != Some("rs") {
            continue;
        }
        let source = fs::read_to_string(&path).unwrap_or_default();
        for tail in source.split(LOOKUP).skip(1) {
            if let Some((id, _)) = tail.split_once('"') {
                if is_message_id(id) {
                    ids.insert(id.to_string());
                }
            }
        }
    }
}

fn looked_up_ids() -> BTreeSet<String> {
    let mut ids = BTreeSet::new();
    collect_lookups(&PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src"), &mut ids);
    ids
}

#[test]
fn lookups_are_found_in_source() {
    let ids = looked_up_ids();
    assert!(ids.contains("nav-about"));
    assert!(ids.contains("footer-credit"));
    // One message per flattened table field.
    assert_eq!(ids.len(), Locale::Pt.strings().entries().len());
}

#[test]
fn every_lookup_resolves_in_the_fallback() {
    let loader = loader_for(Locale::Pt);
    let unresolved: Vec<String> = looked_up_ids()
        .into_iter()
        .filter(|id| !loader.has(id))
        .collect();
    assert!(unresolved.is_empty(), "ids missing from pt-BR: {unresolved:?}");
}

#[test]
fn every_fallback_message_is_displayed() {
    let looked_up = looked_up_ids();
    let unused: Vec<&str> = FALLBACK_FTL
        .lines()
        .filter_map(|line| line.split_once(" = ").map(|(id, _)| id))
        .filter(|id| is_message_id(id) && !looked_up.contains(*id))
        .collect();
    assert!(unused.is_empty(), "pt-BR messages never shown: {unused:?}");
}
