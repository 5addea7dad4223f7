//! Prop-driven selector styling.
//!
//! This crate resolves the styles of a composite UI element from a set of
//! declarative, CSS-like selectors keyed on the element's props:
//!
//! - **Selectors**: `[prop]`, `[prop=42]`, `[prop="text"]` conditions, optionally
//!   followed by a `::subComponent` target
//! - **Validation**: grammar, sub-component and prop-type checks that report every
//!   problem in a single diagnostic
//! - **Resolution**: ordered, last-wins merging of every satisfied selector into
//!   one style value per sub-component
//!
//! # Example
//!
//! ```
//! use seamstress::prelude::*;
//! use serde_json::json;
//!
//! let styles = StyleInput::from_json(&json!({
//!     "::root": { "display": "flex" },
//!     "[toggled]": { "color": "blue" },
//!     "[toggled]::indicator": { "opacity": 1 },
//! }));
//!
//! let schema = StyleSchema::new().with_sub_component("indicator", SubComponentType::Simple);
//! let engine = StyleEngine::new(schema, styles, "Toggler").unwrap();
//!
//! let props = json!({ "toggled": true });
//! let resolved = engine.compute(props.as_object().unwrap());
//!
//! assert_eq!(resolved.root(), Some(&json!({ "display": "flex", "color": "blue" })));
//! assert!(resolved.contains(&SubComponentTarget::named("indicator")));
//! ```

pub mod types;
pub mod selector;
pub mod rules;
pub mod resolve;
pub mod validate;

mod error;

pub use error::{Error, Result};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::types::{Props, StyleValue};
    pub use crate::selector::{ConditionValue, PropCondition, Selector, SubComponentTarget};
    pub use crate::rules::{StyleDeclaration, StyleInput, StyleSheet};
    pub use crate::resolve::{Cascade, Classification, ResolvedStyleSet, StyleEngine, classify, resolve};
    pub use crate::validate::{
        Diagnostic, PropValidator, StyleSchema, SubComponentType, SubComponentTypes,
        ValidationError, validate_styles,
    };
}
