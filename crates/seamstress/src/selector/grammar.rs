//! Textual selector grammar.
//!
//! A style key holds one or more selectors separated by commas. Each selector
//! is one of:
//!
//! - one or more prop selectors: `[prop]`, `[prop=42]`, `[prop=true]`,
//!   `[prop="text"]`
//! - zero or more prop selectors followed by one sub-component selector:
//!   `[prop]::indicator`, `::indicator`
//! - a bare style-property name: `color`
//!
//! Matching is case-insensitive.

use std::sync::LazyLock;

use regex::Regex;

/// One `[name]` or `[name=literal]` group.
pub(crate) const PROP_SELECTOR: &str =
    r#"(?:\[\s*([A-Za-z0-9_]+)\s*(?:\s*=\s*([0-9]+|true|false|"(?:[^"]|\\")+")\s*)?\s*\])"#;

/// A `::name` sub-component suffix.
pub(crate) const SUB_COMPONENT_SELECTOR: &str = r"(?:::([^\s:=]+))";

/// A bare style-property name.
pub(crate) const STYLE_PROPERTY: &str = r"[a-z0-9]+";

static VALID_SELECTOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        "(?i)^(?:{PROP_SELECTOR}+|{PROP_SELECTOR}*{SUB_COMPONENT_SELECTOR}|{STYLE_PROPERTY})$"
    ))
    .expect("selector grammar is a valid regex")
});

static BARE_STYLE_PROPERTY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("(?i)^{STYLE_PROPERTY}$")).expect("style property grammar is a valid regex")
});

/// Example selectors shown alongside grammar diagnostics.
pub const VALID_SELECTOR_EXAMPLES: &[&str] = &[
    "::subComponent",
    "::subComponent, ::subComponent2",
    "[prop]",
    "[prop=false]",
    "[prop=42]",
    "[prop=\"string\"], [prop2=42]",
    "[prop]::subComponent",
    "[prop1][prop2=\"string\"]::subComponent",
];

/// Check whether a style key is well formed.
///
/// Every comma-separated selector in the key must satisfy the grammar. A
/// trailing or doubled comma produces an empty selector, which is invalid.
pub fn is_valid(key: &str) -> bool {
    split_selectors(key).into_iter().all(is_valid_selector)
}

/// Check a single selector (no top-level commas) against the grammar.
pub fn is_valid_selector(selector: &str) -> bool {
    VALID_SELECTOR.is_match(selector.trim())
}

/// Check whether a selector is a bare style-property name.
pub fn is_style_property(selector: &str) -> bool {
    BARE_STYLE_PROPERTY.is_match(selector.trim())
}

/// Split a style key into its trimmed selectors.
///
/// A comma separates selectors only when an even number of `"` characters
/// follows it, so commas inside quoted literals stay put.
pub fn split_selectors(key: &str) -> Vec<&str> {
    let mut quotes_after = key.bytes().filter(|b| *b == b'"').count();
    let mut pieces = vec![];
    let mut start = 0;

    for (index, byte) in key.bytes().enumerate() {
        match byte {
            b'"' => quotes_after -= 1,
            b',' if quotes_after % 2 == 0 => {
                pieces.push(key[start..index].trim());
                start = index + 1;
            }
            _ => {}
        }
    }
    pieces.push(key[start..].trim());

    pieces
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prop_selectors() {
        assert!(is_valid("[toggled]"));
        assert!(is_valid("[toggled=true]"));
        assert!(is_valid("[toggled=FALSE]"));
        assert!(is_valid("[size=42]"));
        assert!(is_valid(r#"[label="hello"]"#));
        assert!(is_valid(r#"[label="say \"hi\""]"#));
        assert!(is_valid("[ spaced = 1 ]"));
        assert!(is_valid("[a][b=2][c=\"x\"]"));
    }

    #[test]
    fn sub_component_selectors() {
        assert!(is_valid("::indicator"));
        assert!(is_valid("::root"));
        assert!(is_valid("[toggled]::indicator"));
        assert!(is_valid("[a][b=\"x\"]::icon"));
    }

    #[test]
    fn style_property_selectors() {
        assert!(is_valid("color"));
        assert!(is_valid("Color"));
        assert!(is_style_property("opacity"));
        assert!(!is_style_property("[opacity]"));
        assert!(!is_valid("background-color"));
    }

    #[test]
    fn malformed_selectors() {
        assert!(!is_valid(""));
        assert!(!is_valid("[]"));
        assert!(!is_valid("[a=]"));
        assert!(!is_valid("[a=\"\"]"));
        assert!(!is_valid("[a=-1]"));
        assert!(!is_valid("[a=maybe]"));
        assert!(!is_valid("::"));
        assert!(!is_valid("::a::b"));
        assert!(!is_valid("::a=b"));
        assert!(!is_valid("[a]color"));
        assert!(!is_valid(":hover"));
        assert!(!is_valid("[a"));
    }

    #[test]
    fn comma_separated_selectors() {
        assert!(is_valid("[a],[b]"));
        assert!(is_valid("::a, ::b"));
        assert!(is_valid(r#"[a="x,y"]"#));
        assert!(is_valid(r#"[a="x,y"], [b="1,2"]::c"#));
        assert!(!is_valid("[a],"));
        assert!(!is_valid(",[a]"));
        assert!(!is_valid("[a],,[b]"));
        assert!(!is_valid("[a], nope!"));
    }

    #[test]
    fn split_keeps_quoted_commas() {
        assert_eq!(split_selectors("[a], [b]"), vec!["[a]", "[b]"]);
        assert_eq!(split_selectors(r#"[a="x,y"]"#), vec![r#"[a="x,y"]"#]);
        assert_eq!(split_selectors("[a],"), vec!["[a]", ""]);
    }
}
