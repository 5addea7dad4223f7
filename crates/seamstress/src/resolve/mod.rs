//! Style resolution: classification, cascading and the configured engine.

mod cascade;
mod classify;
mod engine;
mod resolver;

pub use cascade::Cascade;
pub use classify::{Classification, StyleEntry, TargetEntries, classify};
pub use engine::StyleEngine;
pub use resolver::{ResolvedStyleSet, resolve};
