//! Configured style engine.

use crate::resolve::{Classification, ResolvedStyleSet, classify, resolve};
use crate::rules::StyleInput;
use crate::types::Props;
use crate::validate::{StyleSchema, ValidationError, validate_input, validate_styles};

/// A component's style configuration, validated and classified once.
///
/// The engine holds the component's default styles and schema. Each
/// [`compute`](Self::compute) call is a pure function of the props it is
/// given; nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct StyleEngine {
    /// Schema the defaults were validated against.
    schema: StyleSchema,
    /// Component name used in diagnostics.
    component_name: String,
    /// The default styles, classified by target.
    defaults: Classification,
}

impl StyleEngine {
    /// Create an engine for a component.
    ///
    /// Returns every problem in the default styles at once if they do not
    /// validate against `schema`.
    pub fn new(
        schema: StyleSchema,
        styles: impl Into<StyleInput>,
        component_name: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let component_name = component_name.into();
        let styles = styles.into();

        if let Some(err) = validate_input(&schema, &styles, &component_name) {
            return Err(err);
        }

        let defaults = classify(styles.iter(), schema.sub_component_types.as_ref());
        tracing::debug!(
            component = component_name.as_str(),
            targets = defaults.by_target.len(),
            "Created style engine"
        );

        Ok(Self {
            schema,
            component_name,
            defaults,
        })
    }

    /// Get the schema.
    pub fn schema(&self) -> &StyleSchema {
        &self.schema
    }

    /// Get the component name.
    pub fn component_name(&self) -> &str {
        &self.component_name
    }

    /// Get the classified default styles.
    pub fn defaults(&self) -> &Classification {
        &self.defaults
    }

    /// Resolve the default styles for the given props.
    pub fn compute(&self, props: &Props) -> ResolvedStyleSet {
        resolve(&self.defaults.by_target, props)
    }

    /// Resolve the default styles followed by caller-supplied overrides.
    ///
    /// Override entries come after the defaults for each target, so they win
    /// where both apply. Malformed override keys are skipped; check them with
    /// [`validate`](Self::validate).
    pub fn compute_with(&self, props: &Props, overrides: &StyleInput) -> ResolvedStyleSet {
        if overrides.is_empty() {
            return self.compute(props);
        }

        let mut classification = self.defaults.clone();
        classification.extend(classify(overrides.iter(), None));
        resolve(&classification.by_target, props)
    }

    /// Validate the style configuration in `props[prop_name]` against this
    /// engine's schema.
    pub fn validate(&self, props: &Props, prop_name: &str) -> Option<ValidationError> {
        validate_styles(&self.schema, props, prop_name, &self.component_name)
    }
}
