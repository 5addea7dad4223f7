//! Style declarations and the style input normalizer.
//!
//! A style declaration is an ordered list of `selector key -> style value`
//! pairs. A style configuration arrives as one declaration, a list of them,
//! or nothing at all; [`StyleInput::normalize`] turns every shape into the
//! same ordered list so later stages never branch on it.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::types::{StyleValue, is_truthy};

/// One style-configuration object: selector keys mapped to style values.
///
/// Keys keep their source order and duplicates are never collapsed.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct StyleDeclaration {
    entries: Vec<(String, StyleValue)>,
}

impl StyleDeclaration {
    /// Create an empty declaration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.push(key, value);
        self
    }

    /// Append an entry after the existing ones.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<StyleValue>) {
        self.entries.push((key.into(), value.into()));
    }

    /// Iterate over entries in source order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Iterate over selector keys in source order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Get the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the declaration is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Map<String, Value>> for StyleDeclaration {
    fn from(map: Map<String, Value>) -> Self {
        map.into_iter().collect()
    }
}

impl<K: Into<String>, V: Into<StyleValue>> FromIterator<(K, V)> for StyleDeclaration {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

/// A style configuration in any of its accepted shapes.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(from = "Value")]
pub enum StyleInput {
    /// No styles.
    #[default]
    None,
    /// A single declaration.
    Single(StyleDeclaration),
    /// Declarations in priority order (later entries win).
    Many(Vec<StyleDeclaration>),
}

impl StyleInput {
    /// Interpret a JSON prop value as a style configuration.
    ///
    /// Falsy values mean no styles, an object is a single declaration and an
    /// array is a list of declarations. Array elements that are not objects
    /// are skipped, as is any other truthy scalar.
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Object(map) => Self::Single(map.clone().into()),
            Value::Array(items) => Self::Many(
                items
                    .iter()
                    .filter_map(Value::as_object)
                    .map(|map| map.clone().into())
                    .collect(),
            ),
            other => {
                if is_truthy(other) {
                    tracing::debug!("Ignoring non-object style configuration: {}", other);
                }
                Self::None
            }
        }
    }

    /// Turn the input into its canonical ordered list of declarations.
    ///
    /// Order is preserved: earlier declarations have lower priority.
    pub fn normalize(self) -> Vec<StyleDeclaration> {
        match self {
            StyleInput::None => vec![],
            StyleInput::Single(declaration) => vec![declaration],
            StyleInput::Many(declarations) => declarations,
        }
    }

    /// Iterate over the declarations without consuming the input.
    pub fn iter(&self) -> std::slice::Iter<'_, StyleDeclaration> {
        match self {
            StyleInput::None => std::slice::Iter::default(),
            StyleInput::Single(declaration) => std::slice::from_ref(declaration).iter(),
            StyleInput::Many(declarations) => declarations.iter(),
        }
    }

    /// Append another input after this one, so its declarations win.
    pub fn chain(self, other: StyleInput) -> StyleInput {
        let mut declarations = self.normalize();
        declarations.extend(other.normalize());
        StyleInput::Many(declarations)
    }

    /// Check if the input holds no declarations.
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

impl From<Value> for StyleInput {
    fn from(value: Value) -> Self {
        Self::from_json(&value)
    }
}

impl From<StyleDeclaration> for StyleInput {
    fn from(declaration: StyleDeclaration) -> Self {
        Self::Single(declaration)
    }
}

impl From<Vec<StyleDeclaration>> for StyleInput {
    fn from(declarations: Vec<StyleDeclaration>) -> Self {
        Self::Many(declarations)
    }
}

impl<T: Into<StyleInput>> From<Option<T>> for StyleInput {
    fn from(input: Option<T>) -> Self {
        input.map_or(Self::None, Into::into)
    }
}
