//! Style configuration loaded from JSON.

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::rules::{StyleDeclaration, StyleInput};
use crate::{Error, Result};

/// An ordered collection of style declarations.
///
/// The JSON form is any shape [`StyleInput::from_json`] accepts: an object,
/// an array of objects, or `null`.
#[derive(Debug, Clone, Default)]
pub struct StyleSheet {
    /// The declarations, lowest priority first.
    pub declarations: Vec<StyleDeclaration>,
    /// Source file path, when loaded from disk.
    pub source_path: Option<PathBuf>,
}

impl StyleSheet {
    /// Create an empty stylesheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a stylesheet from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;

        let mut sheet = Self::from_json(&content)?;
        sheet.source_path = Some(path.to_path_buf());
        tracing::debug!(
            "Loaded {} style declarations from {}",
            sheet.len(),
            path.display()
        );
        Ok(sheet)
    }

    /// Parse a stylesheet from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Ok(Self {
            declarations: StyleInput::from_json(&value).normalize(),
            source_path: None,
        })
    }

    /// Add a declaration after the existing ones.
    pub fn add_declaration(&mut self, declaration: StyleDeclaration) {
        self.declarations.push(declaration);
    }

    /// Get the number of declarations.
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    /// Check if the stylesheet is empty.
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Iterate over declarations.
    pub fn iter(&self) -> impl Iterator<Item = &StyleDeclaration> {
        self.declarations.iter()
    }
}

impl From<StyleSheet> for StyleInput {
    fn from(sheet: StyleSheet) -> Self {
        StyleInput::Many(sheet.declarations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn stylesheet_from_json() {
        let sheet = StyleSheet::from_json(r#"{ "[toggled]": "on", "::icon": "icon" }"#).unwrap();
        assert_eq!(sheet.len(), 1);
        assert_eq!(
            sheet.declarations[0].keys().collect::<Vec<_>>(),
            vec!["[toggled]", "::icon"]
        );

        let sheet = StyleSheet::from_json("null").unwrap();
        assert!(sheet.is_empty());
    }

    #[test]
    fn stylesheet_rejects_bad_json() {
        let err = StyleSheet::from_json("{ nope").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn stylesheet_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{ "::root": "a" }}, {{ "[b]": "b" }}]"#).unwrap();

        let sheet = StyleSheet::from_file(file.path()).unwrap();
        assert_eq!(sheet.len(), 2);
        assert_eq!(sheet.source_path.as_deref(), Some(file.path()));

        let err = StyleSheet::from_file(file.path().with_extension("missing")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn stylesheet_into_input() {
        let mut sheet = StyleSheet::new();
        sheet.add_declaration(StyleDeclaration::new().with("[a]", json!(1)));

        let input: StyleInput = sheet.into();
        assert_eq!(input.normalize().len(), 1);
    }
}
