//! Style validation diagnostics.

use crate::selector::VALID_SELECTOR_EXAMPLES;

/// One problem found while validating a style configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Diagnostic {
    /// Keys that do not match the selector grammar.
    #[error("{}", malformed_message(.keys))]
    MalformedSelectors { keys: Vec<String> },

    /// Selectors naming sub-components the component does not declare.
    #[error("{}", unknown_sub_components_message(.targets, .component, .valid))]
    UnknownSubComponents {
        targets: Vec<String>,
        component: String,
        valid: Vec<String>,
    },

    /// A selector value the prop's validator rejects.
    #[error("\"{key}\" is not a valid selector. {message}")]
    PropType { key: String, message: String },
}

/// Every problem found in one validation pass.
///
/// Never empty: validation reports success as `None` instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", join_diagnostics(.diagnostics))]
pub struct ValidationError {
    diagnostics: Vec<Diagnostic>,
}

impl ValidationError {
    /// Wrap collected diagnostics, or `None` if there are none.
    pub fn from_diagnostics(diagnostics: Vec<Diagnostic>) -> Option<Self> {
        if diagnostics.is_empty() {
            None
        } else {
            Some(Self { diagnostics })
        }
    }

    /// The individual diagnostics, in the order they were found.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}

fn join_diagnostics(diagnostics: &[Diagnostic]) -> String {
    diagnostics
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn malformed_message(keys: &[String]) -> String {
    let plural = if keys.len() == 1 { "" } else { "s" };
    let keys = keys
        .iter()
        .map(|key| format!("\"{}\"", key))
        .collect::<Vec<_>>()
        .join(", ");
    let examples = VALID_SELECTOR_EXAMPLES
        .iter()
        .map(|example| format!("  {}", example))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Malformed selector{plural}: {keys}\n\nHere are some examples of valid selectors:\n{examples}"
    )
}

fn sub_component_list(names: &[String]) -> String {
    names
        .iter()
        .map(|name| format!("::{}", name))
        .collect::<Vec<_>>()
        .join("\n")
}

fn unknown_sub_components_message(targets: &[String], component: &str, valid: &[String]) -> String {
    let intro = if targets.len() == 1 {
        format!(
            "{} is not a valid sub-component of `{}`.",
            sub_component_list(targets),
            component
        )
    } else {
        format!(
            "[{}] are not valid sub-components of `{}`.",
            sub_component_list(targets),
            component
        )
    };

    format!(
        "{intro}\n\nValid sub-components are:\n\n{}",
        sub_component_list(valid)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_message_lists_keys_and_examples() {
        let single = Diagnostic::MalformedSelectors { keys: vec!["[a".into()] }.to_string();
        assert!(single.starts_with("Malformed selector: \"[a\"\n\n"));
        assert!(single.contains("  [prop]::subComponent"));

        let many = Diagnostic::MalformedSelectors {
            keys: vec!["[a".into(), "b!".into()],
        }
        .to_string();
        assert!(many.starts_with("Malformed selectors: \"[a\", \"b!\""));
    }

    #[test]
    fn unknown_sub_component_message() {
        let single = Diagnostic::UnknownSubComponents {
            targets: vec!["foo".into()],
            component: "Toggler".into(),
            valid: vec!["indicator".into(), "label".into()],
        }
        .to_string();
        assert_eq!(
            single,
            "::foo is not a valid sub-component of `Toggler`.\n\n\
             Valid sub-components are:\n\n::indicator\n::label"
        );

        let many = Diagnostic::UnknownSubComponents {
            targets: vec!["foo".into(), "bar".into()],
            component: "Toggler".into(),
            valid: vec![],
        }
        .to_string();
        assert!(many.starts_with("[::foo\n::bar] are not valid sub-components of `Toggler`."));
    }

    #[test]
    fn prop_type_message_prefixed_with_key() {
        let diag = Diagnostic::PropType {
            key: "[size=3]".into(),
            message: "bad size".into(),
        };
        assert_eq!(diag.to_string(), "\"[size=3]\" is not a valid selector. bad size");
    }

    #[test]
    fn validation_error_joins_diagnostics() {
        assert!(ValidationError::from_diagnostics(vec![]).is_none());

        let err = ValidationError::from_diagnostics(vec![
            Diagnostic::PropType { key: "a".into(), message: "x".into() },
            Diagnostic::PropType { key: "b".into(), message: "y".into() },
        ])
        .unwrap();

        assert_eq!(err.diagnostics().len(), 2);
        assert_eq!(
            err.to_string(),
            "\"a\" is not a valid selector. x\n\n\"b\" is not a valid selector. y"
        );
    }
}
