//! Sub-component classification.
//!
//! Splits every style key into its selectors, parses them and files the
//! resulting entries under the sub-component they target. Entry order within
//! a target follows declaration order and is the merge priority used by the
//! resolver: later entries win.

use serde_json::Value;

use crate::rules::StyleDeclaration;
use crate::selector::{self, Selector, SubComponentTarget};
use crate::types::StyleValue;
use crate::validate::SubComponentTypes;

/// One parsed selector and the style value it applies.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleEntry {
    /// The style key the selector came from.
    pub key: String,
    /// The parsed selector.
    pub selector: Selector,
    /// The style value to apply when the selector matches.
    pub value: StyleValue,
}

/// All entries for one target, in priority order.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetEntries {
    /// The targeted sub-component.
    pub target: SubComponentTarget,
    /// Entries, lowest priority first.
    pub entries: Vec<StyleEntry>,
}

/// The result of classifying a style configuration.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Classification {
    /// Entries grouped by target, targets in first-seen order.
    pub by_target: Vec<TargetEntries>,
    /// Targets missing from the known sub-components, de-duplicated, in
    /// first-seen order.
    pub invalid_targets: Vec<String>,
}

impl Classification {
    /// Get the entries filed under a target.
    pub fn entries(&self, target: &SubComponentTarget) -> Option<&[StyleEntry]> {
        self.by_target
            .iter()
            .find(|group| &group.target == target)
            .map(|group| group.entries.as_slice())
    }

    /// Iterate over targets in first-seen order.
    pub fn targets(&self) -> impl Iterator<Item = &SubComponentTarget> {
        self.by_target.iter().map(|group| &group.target)
    }

    /// Append the entries of a later classification, so they take priority.
    pub fn extend(&mut self, later: Classification) {
        for group in later.by_target {
            self.file_all(group.target, group.entries);
        }
        for target in later.invalid_targets {
            if !self.invalid_targets.contains(&target) {
                self.invalid_targets.push(target);
            }
        }
    }

    fn file(&mut self, entry: StyleEntry) {
        let target = entry.selector.target.clone();
        self.file_all(target, vec![entry]);
    }

    fn file_all(&mut self, target: SubComponentTarget, entries: Vec<StyleEntry>) {
        match self.by_target.iter_mut().find(|group| group.target == target) {
            Some(group) => group.entries.extend(entries),
            None => self.by_target.push(TargetEntries { target, entries }),
        }
    }
}

/// Classify style declarations by the sub-component each selector targets.
///
/// When `known_targets` is given, every named target not in it is reported
/// in [`Classification::invalid_targets`]. The root is never checked.
/// Malformed keys are skipped; report them with
/// [`validate_styles`](crate::validate::validate_styles).
pub fn classify<'a>(
    declarations: impl IntoIterator<Item = &'a StyleDeclaration>,
    known_targets: Option<&SubComponentTypes>,
) -> Classification {
    let mut classification = Classification::default();

    for declaration in declarations {
        for (key, value) in declaration.iter() {
            for piece in selector::split_selectors(key) {
                let selector = match selector::parse_selector(piece) {
                    Ok(selector) => selector,
                    Err(e) => {
                        tracing::warn!("Skipping style selector: {}", e);
                        continue;
                    }
                };

                // `color: red` is shorthand for `::root: { color: red }`.
                let value = if selector::is_style_property(piece) {
                    let mut map = serde_json::Map::new();
                    map.insert(piece.to_string(), value.clone());
                    Value::Object(map)
                } else {
                    value.clone()
                };

                if let (Some(known), SubComponentTarget::Named(name)) =
                    (known_targets, &selector.target)
                {
                    if !known.contains(name) && !classification.invalid_targets.contains(name) {
                        classification.invalid_targets.push(name.clone());
                    }
                }

                classification.file(StyleEntry {
                    key: key.to_string(),
                    selector,
                    value,
                });
            }
        }
    }

    tracing::trace!(
        targets = classification.by_target.len(),
        invalid = classification.invalid_targets.len(),
        "Classified style declarations"
    );

    classification
}
