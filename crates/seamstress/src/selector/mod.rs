//! Prop selector grammar, parsing and matching.

mod grammar;
mod matcher;
mod parser;
mod types;

pub use grammar::{
    VALID_SELECTOR_EXAMPLES, is_style_property, is_valid, is_valid_selector, split_selectors,
};
pub use parser::{parse_key, parse_selector};
pub use types::*;
