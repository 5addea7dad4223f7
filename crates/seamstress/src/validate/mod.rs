//! Style validation: sub-component schema, prop-type checks and the
//! aggregated diagnostic.

mod diagnostic;
mod orchestrator;
pub mod prop_types;
mod schema;

pub use diagnostic::{Diagnostic, ValidationError};
pub use orchestrator::{validate_input, validate_styles};
pub use prop_types::{CustomValidator, PropTypeError, PropTypes, PropValidator};
pub use schema::{StyleSchema, SubComponentType, SubComponentTypes};
