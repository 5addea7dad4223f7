//! Style payload and prop snapshot types.

mod value;

pub use value::{Props, StyleValue, is_truthy, loosely_equal};
