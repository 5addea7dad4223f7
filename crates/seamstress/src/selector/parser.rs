//! Selector parser.
//!
//! Turns the text of one selector into its prop conditions and target. The
//! parser re-checks the grammar itself and returns [`Error::InvalidSelector`]
//! for anything malformed, so callers that skip validation still never get a
//! silently defaulted selector.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::Number;

use super::grammar::{self, PROP_SELECTOR, SUB_COMPONENT_SELECTOR};
use super::{ConditionValue, PropCondition, Selector};
use crate::{Error, Result};

static PROP_GROUP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("(?i)^{PROP_SELECTOR}$")).expect("prop selector grammar is a valid regex")
});

static SUB_COMPONENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("(?i)^{SUB_COMPONENT_SELECTOR}$"))
        .expect("sub-component grammar is a valid regex")
});

/// Parse a single selector (no top-level commas).
///
/// # Example
///
/// ```
/// use seamstress::selector::{parse_selector, PropCondition, SubComponentTarget};
///
/// let selector = parse_selector(r#"[kind="primary"][toggled]::icon"#).unwrap();
/// assert_eq!(selector.conditions, vec![
///     PropCondition::equals("kind", "primary"),
///     PropCondition::truthy("toggled"),
/// ]);
/// assert_eq!(selector.target, SubComponentTarget::named("icon"));
/// ```
pub fn parse_selector(text: &str) -> Result<Selector> {
    let text = text.trim();

    if !grammar::is_valid_selector(text) {
        return Err(Error::invalid_selector(text, "does not match the selector grammar"));
    }

    // A bare style property applies to the root unconditionally.
    if grammar::is_style_property(text) {
        return Ok(Selector::root());
    }

    parse_groups(text)?.ok_or_else(|| {
        Error::invalid_selector(text, "could not be split into prop and sub-component selectors")
    })
}

/// Parse every comma-separated selector in a style key.
pub fn parse_key(key: &str) -> Result<Vec<Selector>> {
    grammar::split_selectors(key)
        .into_iter()
        .map(parse_selector)
        .collect()
}

impl FromStr for Selector {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_selector(s)
    }
}

/// Parse `[...]` groups from the left, then an optional `::name` suffix.
///
/// A quoted literal may contain `\"` and `]`, so each `]` is tried as the
/// end of the current group until the remainder parses too.
fn parse_groups(rest: &str) -> Result<Option<Selector>> {
    if rest.is_empty() {
        return Ok(Some(Selector::root()));
    }

    if rest.starts_with("::") {
        return Ok(SUB_COMPONENT
            .captures(rest)
            .and_then(|caps| caps.get(1))
            .map(|name| Selector::sub_component(name.as_str())));
    }

    for (end, _) in rest.match_indices(']') {
        let Some(caps) = PROP_GROUP.captures(&rest[..=end]) else {
            continue;
        };
        let Some(mut selector) = parse_groups(&rest[end + 1..])? else {
            continue;
        };

        let prop = caps.get(1).map_or("", |m| m.as_str());
        let expected = coerce_literal(rest, caps.get(2).map(|m| m.as_str()))?;
        selector.conditions.insert(0, PropCondition::equals(prop, expected));
        return Ok(Some(selector));
    }

    Ok(None)
}

fn coerce_literal(selector: &str, literal: Option<&str>) -> Result<ConditionValue> {
    let Some(literal) = literal else {
        return Ok(ConditionValue::Truthy);
    };

    if let Some(quoted) = literal.strip_prefix('"').and_then(|l| l.strip_suffix('"')) {
        return Ok(ConditionValue::String(quoted.replace("\\\"", "\"")));
    }
    if literal.eq_ignore_ascii_case("true") {
        return Ok(ConditionValue::Bool(true));
    }
    if literal.eq_ignore_ascii_case("false") {
        return Ok(ConditionValue::Bool(false));
    }

    // Integers too large for u64 fall back to the nearest float.
    literal
        .parse::<u64>()
        .ok()
        .map(Number::from)
        .or_else(|| literal.parse::<f64>().ok().and_then(Number::from_f64))
        .map(ConditionValue::Number)
        .ok_or_else(|| Error::invalid_selector(selector, format!("bad number literal '{}'", literal)))
}
