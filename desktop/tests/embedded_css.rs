#![cfg(test)]
//! Ensures the theme the desktop window embeds (shared `ui/assets/theme/main.css`)
//! is present and non-trivial.
//!
//! The desktop build ships no stylesheet file, so a truncated or relocated theme
//! would only show up as an unstyled window at runtime.

use ui::theme::THEME_CSS;

#[test]
fn embedded_css_file_exists_and_is_not_empty() {
    assert!(
        !THEME_CSS.trim().is_empty(),
        "Embedded CSS file appears to be empty. If this is intentional, remove the test."
    );
}

#[test]
fn embedded_css_contains_expected_tokens() {
    let required = ["--color-bg", "--color-accent", "body {", ".button--primary"];
    for token in required {
        assert!(
            THEME_CSS.contains(token),
            "Expected token `{token}` missing from embedded CSS"
        );
    }
}

#[test]
fn embedded_css_matches_file_on_disk() {
    let on_disk = include_str!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/../ui/assets/theme/main.css"
    ));
    assert_eq!(THEME_CSS, on_disk);
}
