//! Style validation entry points.
//!
//! Validation runs three independent passes over a style configuration and
//! collects every problem into one diagnostics list instead of stopping at
//! the first:
//!
//! 1. grammar: keys that are not well-formed selectors
//! 2. sub-components: `::name` targets the schema does not declare
//! 3. prop types: selector values the prop's validator rejects

use crate::resolve::classify;
use crate::rules::StyleInput;
use crate::selector;
use crate::types::{Props, is_truthy};

use super::{Diagnostic, StyleSchema, ValidationError};

/// Validate the style configuration held in `props[prop_name]`.
///
/// This has the shape of a conventional prop checker so a host can register
/// it for its styles prop. A missing or falsy style prop is valid.
///
/// # Example
///
/// ```
/// use seamstress::prelude::*;
/// use serde_json::json;
///
/// let schema = StyleSchema::new().with_sub_component("bar", SubComponentType::Simple);
/// let props = json!({ "styles": { "[a": {}, "::foo": {} } });
///
/// let err = validate_styles(&schema, props.as_object().unwrap(), "styles", "Widget").unwrap();
/// assert_eq!(err.diagnostics().len(), 2);
/// ```
pub fn validate_styles(
    schema: &StyleSchema,
    props: &Props,
    prop_name: &str,
    component_name: &str,
) -> Option<ValidationError> {
    let styles = props.get(prop_name).filter(|value| is_truthy(value))?;
    validate_input(schema, &StyleInput::from_json(styles), component_name)
}

/// Validate a style configuration against a schema.
pub fn validate_input(
    schema: &StyleSchema,
    input: &StyleInput,
    component_name: &str,
) -> Option<ValidationError> {
    let mut diagnostics = vec![];

    check_grammar(input, &mut diagnostics);
    check_sub_components(schema, input, component_name, &mut diagnostics);
    check_prop_types(schema, input, component_name, &mut diagnostics);

    if !diagnostics.is_empty() {
        tracing::debug!(
            component = component_name,
            count = diagnostics.len(),
            "Style validation failed"
        );
    }

    ValidationError::from_diagnostics(diagnostics)
}

fn check_grammar(input: &StyleInput, diagnostics: &mut Vec<Diagnostic>) {
    let keys: Vec<String> = input
        .iter()
        .flat_map(|declaration| declaration.keys())
        .filter(|key| !selector::is_valid(key))
        .map(str::to_string)
        .collect();

    if !keys.is_empty() {
        diagnostics.push(Diagnostic::MalformedSelectors { keys });
    }
}

fn check_sub_components(
    schema: &StyleSchema,
    input: &StyleInput,
    component_name: &str,
    diagnostics: &mut Vec<Diagnostic>,
) {
    let Some(known) = schema.sub_component_types.as_ref() else {
        return;
    };

    let invalid = classify(input.iter(), Some(known)).invalid_targets;
    if !invalid.is_empty() {
        diagnostics.push(Diagnostic::UnknownSubComponents {
            targets: invalid,
            component: component_name.to_string(),
            valid: known.names().map(str::to_string).collect(),
        });
    }
}

fn check_prop_types(
    schema: &StyleSchema,
    input: &StyleInput,
    component_name: &str,
    diagnostics: &mut Vec<Diagnostic>,
) {
    let Some(prop_types) = schema.prop_types.as_ref() else {
        return;
    };

    for key in input.iter().flat_map(|declaration| declaration.keys()) {
        // Malformed keys were already reported by the grammar pass.
        let Ok(selectors) = selector::parse_key(key) else {
            continue;
        };

        for condition in selectors.iter().flat_map(|s| s.conditions.iter()) {
            let Some(validator) = prop_types.get(&condition.prop) else {
                continue;
            };

            let mut implied = Props::new();
            implied.insert(condition.prop.clone(), condition.expected.to_value());

            if let Err(e) = validator.validate(&implied, &condition.prop, component_name, "prop") {
                diagnostics.push(Diagnostic::PropType {
                    key: key.to_string(),
                    message: e.message,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::{SubComponentType, prop_types};
    use serde_json::{Value, json};

    fn props(value: Value) -> Props {
        value.as_object().cloned().unwrap_or_default()
    }

    fn toggler_schema() -> StyleSchema {
        StyleSchema::new()
            .with_sub_component("indicator", SubComponentType::Simple)
            .with_prop_type("toggled", prop_types::bool())
            .with_prop_type("size", prop_types::one_of([json!(1), json!(2)]))
    }

    #[test]
    fn falsy_styles_are_valid() {
        for value in [json!(null), json!(false), json!(0), json!("")] {
            let props = props(json!({ "styles": value }));
            assert!(validate_styles(&toggler_schema(), &props, "styles", "X").is_none());
        }
        assert!(validate_styles(&StyleSchema::new(), &Props::new(), "styles", "X").is_none());
    }

    #[test]
    fn valid_styles_produce_no_error() {
        let props = props(json!({
            "styles": {
                "::root": "Toggler",
                "[toggled]": "Toggler_toggled",
                "::indicator": "TogglerIndicator",
                "[toggled=true][size=2]::indicator": "TogglerIndicator_toggled",
                "color": "red",
            }
        }));
        assert!(validate_styles(&toggler_schema(), &props, "styles", "Toggler").is_none());
    }

    #[test]
    fn malformed_keys_collected_across_declarations() {
        let props = props(json!({
            "styles": [
                { "[a": 1, "[ok]": 2 },
                { "b c": 3 },
            ]
        }));

        let err = validate_styles(&StyleSchema::new(), &props, "styles", "X").unwrap();
        assert_eq!(
            err.diagnostics(),
            &[Diagnostic::MalformedSelectors {
                keys: vec!["[a".into(), "b c".into()]
            }]
        );
    }

    #[test]
    fn grammar_and_target_errors_aggregate() {
        let schema = StyleSchema::new().with_sub_component("bar", SubComponentType::Simple);
        let props = props(json!({ "styles": { "[oops": {}, "::foo": {} } }));

        let err = validate_styles(&schema, &props, "styles", "Widget").unwrap();
        let message = err.to_string();

        assert!(message.contains("Malformed selector: \"[oops\""));
        assert!(message.contains("::foo is not a valid sub-component of `Widget`."));
        assert!(message.contains("\n\n"));
    }

    #[test]
    fn unchecked_targets_without_schema() {
        let props = props(json!({ "styles": { "::anything": {} } }));
        assert!(validate_styles(&StyleSchema::new(), &props, "styles", "X").is_none());
    }

    #[test]
    fn prop_type_failures_prefixed_with_key() {
        let props = props(json!({
            "styles": {
                "[toggled=42]": {},
                "[size=3], [toggled]": {},
                "[unchecked=\"x\"]": {},
            }
        }));

        let err = validate_styles(&toggler_schema(), &props, "styles", "Toggler").unwrap();
        let diagnostics = err.diagnostics();

        assert_eq!(diagnostics.len(), 2);
        assert_eq!(
            diagnostics[0],
            Diagnostic::PropType {
                key: "[toggled=42]".into(),
                message: "Invalid prop `toggled` of type `number` supplied to `Toggler`, \
                          expected `boolean`."
                    .into(),
            }
        );
        assert!(diagnostics[1].to_string().starts_with("\"[size=3], [toggled]\" is not a valid selector."));
    }

    #[test]
    fn value_less_condition_validated_as_true() {
        let schema = StyleSchema::new().with_prop_type("label", prop_types::string());
        let props = props(json!({ "styles": { "[label]": {} } }));

        let err = validate_styles(&schema, &props, "styles", "X").unwrap();
        assert!(err.to_string().contains("of type `boolean`"));
    }
}
