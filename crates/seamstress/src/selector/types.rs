//! Selector type definitions.

use std::fmt;

use serde_json::{Number, Value};

/// A parsed selector (e.g., `[toggled][size=2]::indicator`).
///
/// A selector consists of zero or more prop conditions, all of which must
/// hold, and the sub-component the selector's style applies to.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Selector {
    /// Prop conditions, ANDed together.
    pub conditions: Vec<PropCondition>,
    /// The sub-component this selector styles.
    pub target: SubComponentTarget,
}

impl Selector {
    /// Create an unconditional selector for the root.
    pub fn root() -> Self {
        Self::default()
    }

    /// Create an unconditional selector for a sub-component.
    pub fn sub_component(name: impl Into<String>) -> Self {
        Self {
            conditions: vec![],
            target: SubComponentTarget::named(name),
        }
    }

    /// Add a condition.
    pub fn with_condition(mut self, condition: PropCondition) -> Self {
        self.conditions.push(condition);
        self
    }

    /// Check if the selector applies regardless of props.
    pub fn is_unconditional(&self) -> bool {
        self.conditions.is_empty()
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for condition in &self.conditions {
            write!(f, "{}", condition)?;
        }
        match &self.target {
            SubComponentTarget::Root if self.conditions.is_empty() => write!(f, "::root"),
            SubComponentTarget::Root => Ok(()),
            SubComponentTarget::Named(name) => write!(f, "::{}", name),
        }
    }
}

/// A single `[prop]` or `[prop=value]` test.
#[derive(Debug, Clone, PartialEq)]
pub struct PropCondition {
    /// Name of the prop being tested.
    pub prop: String,
    /// What the prop must be.
    pub expected: ConditionValue,
}

impl PropCondition {
    /// Create a value-less condition (`[prop]`).
    pub fn truthy(prop: impl Into<String>) -> Self {
        Self {
            prop: prop.into(),
            expected: ConditionValue::Truthy,
        }
    }

    /// Create a value-bearing condition (`[prop=value]`).
    pub fn equals(prop: impl Into<String>, expected: impl Into<ConditionValue>) -> Self {
        Self {
            prop: prop.into(),
            expected: expected.into(),
        }
    }

    /// Whether the condition carries an explicit value.
    pub fn has_value(&self) -> bool {
        !matches!(self.expected, ConditionValue::Truthy)
    }
}

impl fmt::Display for PropCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.expected {
            ConditionValue::Truthy => write!(f, "[{}]", self.prop),
            expected => write!(f, "[{}={}]", self.prop, expected),
        }
    }
}

/// The value side of a prop condition.
#[derive(Debug, Clone, PartialEq)]
pub enum ConditionValue {
    /// No `=value`: the prop only has to be truthy.
    Truthy,
    /// `true` or `false`.
    Bool(bool),
    /// An unsigned integer literal.
    Number(Number),
    /// A double-quoted string literal, unescaped.
    String(String),
}

impl ConditionValue {
    /// The value a prop would need to hold to satisfy this condition.
    ///
    /// The truthy sentinel maps to `true`.
    pub fn to_value(&self) -> Value {
        match self {
            ConditionValue::Truthy => Value::Bool(true),
            ConditionValue::Bool(b) => Value::Bool(*b),
            ConditionValue::Number(n) => Value::Number(n.clone()),
            ConditionValue::String(s) => Value::String(s.clone()),
        }
    }
}

impl fmt::Display for ConditionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConditionValue::Truthy => Ok(()),
            ConditionValue::Bool(b) => write!(f, "{}", b),
            ConditionValue::Number(n) => write!(f, "{}", n),
            ConditionValue::String(s) => write!(f, "\"{}\"", s.replace('"', "\\\"")),
        }
    }
}

impl From<bool> for ConditionValue {
    fn from(value: bool) -> Self {
        ConditionValue::Bool(value)
    }
}

impl From<u64> for ConditionValue {
    fn from(value: u64) -> Self {
        ConditionValue::Number(value.into())
    }
}

impl From<&str> for ConditionValue {
    fn from(value: &str) -> Self {
        ConditionValue::String(value.to_string())
    }
}

impl From<String> for ConditionValue {
    fn from(value: String) -> Self {
        ConditionValue::String(value)
    }
}

/// The part of a composite element a selector styles.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum SubComponentTarget {
    /// The element itself (no `::name`, or `::root`).
    #[default]
    Root,
    /// A named sub-component.
    Named(String),
}

impl SubComponentTarget {
    /// Create a target from a sub-component name.
    ///
    /// The name `root` refers to the element itself.
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        if name == "root" {
            Self::Root
        } else {
            Self::Named(name)
        }
    }

    /// Check if this is the root target.
    pub fn is_root(&self) -> bool {
        matches!(self, Self::Root)
    }

    /// The target's name (`root` for the root).
    pub fn name(&self) -> &str {
        match self {
            Self::Root => "root",
            Self::Named(name) => name,
        }
    }
}

impl fmt::Display for SubComponentTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "::{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_display() {
        let sel = Selector::sub_component("indicator")
            .with_condition(PropCondition::truthy("toggled"))
            .with_condition(PropCondition::equals("size", 2u64));
        assert_eq!(sel.to_string(), "[toggled][size=2]::indicator");

        let sel = Selector::root().with_condition(PropCondition::equals("label", "a\"b"));
        assert_eq!(sel.to_string(), r#"[label="a\"b"]"#);

        assert_eq!(Selector::root().to_string(), "::root");
    }

    #[test]
    fn root_name_maps_to_root() {
        assert_eq!(SubComponentTarget::named("root"), SubComponentTarget::Root);
        assert_eq!(SubComponentTarget::named("icon").name(), "icon");
        assert!(!SubComponentTarget::named("icon").is_root());
    }

    #[test]
    fn condition_value_for_validation() {
        assert_eq!(ConditionValue::Truthy.to_value(), Value::Bool(true));
        assert_eq!(ConditionValue::from(42u64).to_value(), serde_json::json!(42));
        assert!(!PropCondition::truthy("a").has_value());
        assert!(PropCondition::equals("a", false).has_value());
    }
}
