//! Style value cascading.

use serde_json::Value;

/// Merge a later style value onto an earlier one.
///
/// This is the core of selector cascading: the value from a later satisfied
/// selector is applied on top of what earlier selectors produced.
pub trait Cascade {
    /// Apply `source` on top of `self`.
    fn cascade(&mut self, source: &Self);
}

impl Cascade for Value {
    /// - object onto object: per-key, `source` wins
    /// - string onto string: class names joined with a space
    /// - array onto array: concatenated
    /// - anything else: `source` replaces `self`
    fn cascade(&mut self, source: &Self) {
        match (self, source) {
            (Value::Object(target), Value::Object(source)) => {
                for (key, value) in source {
                    target.insert(key.clone(), value.clone());
                }
            }
            (Value::String(target), Value::String(source)) => {
                if target.is_empty() {
                    target.clone_from(source);
                } else if !source.is_empty() {
                    target.push(' ');
                    target.push_str(source);
                }
            }
            (Value::Array(target), Value::Array(source)) => {
                target.extend(source.iter().cloned());
            }
            (target, source) => *target = source.clone(),
        }
    }
}
