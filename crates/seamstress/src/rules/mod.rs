//! Style declarations and style configuration sources.

mod declaration;
mod stylesheet;

pub use declaration::{StyleDeclaration, StyleInput};
pub use stylesheet::StyleSheet;
