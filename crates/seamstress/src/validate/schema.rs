//! The host component's style schema.

use std::sync::Arc;

use super::{PropTypes, PropValidator};

/// How a sub-component consumes its resolved style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SubComponentType {
    /// A plain element that applies the style directly.
    #[default]
    Simple,
    /// A styled component that accepts a style configuration of its own.
    Composite,
}

/// The sub-components a component declares, in declaration order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SubComponentTypes {
    entries: Vec<(String, SubComponentType)>,
}

impl SubComponentTypes {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sub-component.
    pub fn with(mut self, name: impl Into<String>, kind: SubComponentType) -> Self {
        self.insert(name, kind);
        self
    }

    /// Add or replace a sub-component.
    pub fn insert(&mut self, name: impl Into<String>, kind: SubComponentType) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = kind,
            None => self.entries.push((name, kind)),
        }
    }

    /// Check if a sub-component is declared.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Get the kind of a declared sub-component.
    pub fn get(&self, name: &str) -> Option<SubComponentType> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, kind)| *kind)
    }

    /// Iterate over names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Get the number of sub-components.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no sub-components are declared.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, SubComponentType)> for SubComponentTypes {
    fn from_iter<I: IntoIterator<Item = (K, SubComponentType)>>(iter: I) -> Self {
        let mut types = Self::new();
        for (name, kind) in iter {
            types.insert(name, kind);
        }
        types
    }
}

/// What a component declares about its styles.
///
/// Both parts are optional: without sub-component types any `::name` is
/// accepted, and without prop types no selector values are type-checked.
#[derive(Debug, Clone, Default)]
pub struct StyleSchema {
    /// Known sub-components.
    pub sub_component_types: Option<SubComponentTypes>,
    /// Validators for the component's props.
    pub prop_types: Option<PropTypes>,
}

impl StyleSchema {
    /// Create a schema with no checks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a sub-component.
    pub fn with_sub_component(mut self, name: impl Into<String>, kind: SubComponentType) -> Self {
        self.sub_component_types
            .get_or_insert_with(SubComponentTypes::new)
            .insert(name, kind);
        self
    }

    /// Replace the declared sub-components.
    pub fn with_sub_component_types(mut self, types: SubComponentTypes) -> Self {
        self.sub_component_types = Some(types);
        self
    }

    /// Register a validator for a prop.
    pub fn with_prop_type(
        mut self,
        prop: impl Into<String>,
        validator: impl PropValidator + 'static,
    ) -> Self {
        self.prop_types
            .get_or_insert_with(PropTypes::new)
            .insert(prop, Arc::new(validator));
        self
    }

    /// Replace the prop validators.
    pub fn with_prop_types(mut self, prop_types: PropTypes) -> Self {
        self.prop_types = Some(prop_types);
        self
    }
}
