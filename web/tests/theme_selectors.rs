#![cfg(test)]
/*!
Selector lint for the web stylesheet.

The Dioxus components reference these classes by string; a stylesheet
refactor that drops or renames one regresses styling silently. A substring
presence check over the shipped CSS is enough of an early warning.

If you intentionally rename a selector:
  1. Update the component markup.
  2. Adjust REQUIRED_SELECTORS accordingly.
*/

const MAIN_CSS: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/main.css"));

const REQUIRED_SELECTORS: &[&str] = &[
    // Theme plumbing
    ":root",
    "[data-theme=\"dark\"]",
    "body {",
    // Header
    ".navbar {",
    ".navbar__theme-toggle",
    // Form
    ".analyze-form",
    ".file-input {",
    ".file-input--accepted",
    ".btn-primary {",
    ".btn-primary--busy",
    // Results region
    ".results-container",
    ".results-error",
    ".score-number",
    ".results-card",
    ".results-chart",
    ".section-item",
    ".section-name",
    ".section-score",
    ".keyword-tag",
    ".keyword-tag.match",
    ".keyword-tag.missing",
    ".results-actions",
    // Print mode
    "body.printing",
];

#[test]
fn stylesheet_contains_required_selectors() {
    let missing: Vec<&str> = REQUIRED_SELECTORS
        .iter()
        .copied()
        .filter(|selector| !MAIN_CSS.contains(selector))
        .collect();

    assert!(
        missing.is_empty(),
        "main.css is missing selectors: {missing:?}"
    );
}
