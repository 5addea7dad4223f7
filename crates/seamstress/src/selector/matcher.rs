//! Selector matching against a prop snapshot.

use super::{ConditionValue, PropCondition, Selector};
use crate::types::{Props, is_truthy, loosely_equal};

impl PropCondition {
    /// Check the condition against the current props.
    ///
    /// `[prop]` tests truthiness, so `0`, `""` and `false` do not satisfy it.
    /// A prop missing from `props` never satisfies a condition.
    pub fn matches(&self, props: &Props) -> bool {
        let Some(actual) = props.get(&self.prop) else {
            return false;
        };

        match &self.expected {
            ConditionValue::Truthy => is_truthy(actual),
            expected => loosely_equal(actual, &expected.to_value()),
        }
    }
}

impl Selector {
    /// Check if every condition holds (all conditions must match).
    pub fn matches(&self, props: &Props) -> bool {
        self.conditions.iter().all(|condition| condition.matches(props))
    }
}
