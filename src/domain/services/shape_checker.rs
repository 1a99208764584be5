use std::collections::BTreeSet;

use crate::domain::models::document::SettingsDocument;
use crate::domain::models::field::SettingField;

/// Result of checking a parsed document against the settings shape.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeReport {
    /// Fields the record requires but the document lacks.
    pub missing: Vec<String>,
    /// Paths in the document that are not settings fields.
    pub extra: Vec<String>,
    /// Fields present with an empty value.
    pub empty_values: Vec<String>,
}

impl ShapeReport {
    /// Returns true if the document has exactly the expected fields, all set.
    pub fn is_ok(&self) -> bool {
        self.missing.is_empty() && self.extra.is_empty() && self.empty_values.is_empty()
    }

    /// Total number of issues found.
    pub fn issue_count(&self) -> usize {
        self.missing.len() + self.extra.len() + self.empty_values.len()
    }
}

/// Verifies that a document declares exactly the settings field set.
pub struct ShapeChecker;

impl ShapeChecker {
    /// Compare a document's paths against [`SettingField::ALL`].
    ///
    /// - **Missing**: fields absent from `document`
    /// - **Extra**: paths that do not name a field
    /// - **Empty values**: fields present with a blank value
    ///
    /// All result vectors are sorted alphabetically.
    pub fn check(&self, document: &SettingsDocument) -> ShapeReport {
        let expected: BTreeSet<&str> = SettingField::ALL.iter().map(|f| f.path()).collect();
        let present: BTreeSet<&str> = document.paths().into_iter().collect();

        let missing = expected
            .difference(&present)
            .map(|p| p.to_string())
            .collect();

        let extra = present
            .difference(&expected)
            .map(|p| p.to_string())
            .collect();

        let empty_values = document
            .entries
            .iter()
            .filter(|(path, value)| expected.contains(path.as_str()) && value.trim().is_empty())
            .map(|(path, _)| path.clone())
            .collect();

        ShapeReport {
            missing,
            extra,
            empty_values,
        }
    }
}
