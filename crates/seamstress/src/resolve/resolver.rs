//! Per-sub-component style resolution.

use serde_json::Value;

use crate::resolve::{Cascade, TargetEntries};
use crate::selector::SubComponentTarget;
use crate::types::{Props, StyleValue};

/// The merged style value for every sub-component with a matching selector.
///
/// A target with no satisfied selector is absent, never present with an
/// empty value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResolvedStyleSet {
    styles: Vec<(SubComponentTarget, StyleValue)>,
}

impl ResolvedStyleSet {
    /// Get the resolved value for a target.
    pub fn get(&self, target: &SubComponentTarget) -> Option<&StyleValue> {
        self.styles
            .iter()
            .find(|(t, _)| t == target)
            .map(|(_, value)| value)
    }

    /// Get the resolved value for the root.
    pub fn root(&self) -> Option<&StyleValue> {
        self.get(&SubComponentTarget::Root)
    }

    /// Check if a target has a resolved value.
    pub fn contains(&self, target: &SubComponentTarget) -> bool {
        self.get(target).is_some()
    }

    /// Get the number of resolved targets.
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Check if nothing resolved.
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Iterate over resolved targets in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&SubComponentTarget, &StyleValue)> {
        self.styles.iter().map(|(target, value)| (target, value))
    }

    /// Convert into a JSON object keyed by sub-component name (`root` for
    /// the root).
    pub fn into_json(self) -> Value {
        Value::Object(
            self.styles
                .into_iter()
                .map(|(target, value)| (target.name().to_string(), value))
                .collect(),
        )
    }
}

/// Resolve the style value of every target against the current props.
///
/// Entries are visited in stored order; each satisfied entry is cascaded onto
/// the target's accumulated value, so later entries win.
pub fn resolve(by_target: &[TargetEntries], props: &Props) -> ResolvedStyleSet {
    let mut styles = Vec::with_capacity(by_target.len());

    for group in by_target {
        let mut resolved: Option<StyleValue> = None;

        for entry in group.entries.iter().filter(|e| e.selector.matches(props)) {
            match resolved.as_mut() {
                Some(value) => value.cascade(&entry.value),
                None => resolved = Some(entry.value.clone()),
            }
        }

        match resolved {
            Some(value) => styles.push((group.target.clone(), value)),
            None => tracing::trace!("No satisfied selector for {}", group.target),
        }
    }

    ResolvedStyleSet { styles }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::StyleEntry;
    use crate::selector::{PropCondition, Selector};
    use serde_json::json;

    fn entry(selector: Selector, value: Value) -> StyleEntry {
        StyleEntry {
            key: selector.to_string(),
            selector,
            value,
        }
    }

    fn props(value: Value) -> Props {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn later_satisfied_entry_wins() {
        let groups = vec![TargetEntries {
            target: SubComponentTarget::Root,
            entries: vec![
                entry(Selector::root(), json!({ "a": 1 })),
                entry(
                    Selector::root().with_condition(PropCondition::truthy("x")),
                    json!({ "a": 2, "b": 3 }),
                ),
            ],
        }];

        let resolved = resolve(&groups, &props(json!({ "x": true })));
        assert_eq!(resolved.root(), Some(&json!({ "a": 2, "b": 3 })));

        let resolved = resolve(&groups, &props(json!({ "x": false })));
        assert_eq!(resolved.root(), Some(&json!({ "a": 1 })));
    }

    #[test]
    fn unsatisfied_targets_are_omitted() {
        let groups = vec![
            TargetEntries {
                target: SubComponentTarget::named("icon"),
                entries: vec![entry(
                    Selector::sub_component("icon").with_condition(PropCondition::truthy("x")),
                    json!({ "a": 1 }),
                )],
            },
            TargetEntries {
                target: SubComponentTarget::named("label"),
                entries: vec![entry(Selector::sub_component("label"), json!({}))],
            },
        ];

        let resolved = resolve(&groups, &Props::new());
        assert!(!resolved.contains(&SubComponentTarget::named("icon")));
        assert_eq!(resolved.get(&SubComponentTarget::named("label")), Some(&json!({})));
        assert_eq!(resolved.len(), 1);
    }

    #[test]
    fn value_less_condition_is_truthiness() {
        let groups = vec![TargetEntries {
            target: SubComponentTarget::Root,
            entries: vec![entry(
                Selector::root().with_condition(PropCondition::truthy("count")),
                json!("has-count"),
            )],
        }];

        for falsy in [json!(0), json!(""), json!(false), json!(null)] {
            let resolved = resolve(&groups, &props(json!({ "count": falsy })));
            assert!(resolved.is_empty());
        }
        assert!(!resolve(&groups, &props(json!({ "count": 3 }))).is_empty());
    }

    #[test]
    fn into_json_keys_by_name() {
        let groups = vec![
            TargetEntries {
                target: SubComponentTarget::Root,
                entries: vec![entry(Selector::root(), json!("a"))],
            },
            TargetEntries {
                target: SubComponentTarget::named("icon"),
                entries: vec![entry(Selector::sub_component("icon"), json!("b"))],
            },
        ];

        let json = resolve(&groups, &Props::new()).into_json();
        assert_eq!(json, json!({ "root": "a", "icon": "b" }));
    }
}
