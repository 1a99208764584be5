use super::field::SettingField;

/// One field whose literal value differs between two environments.
#[derive(Debug, Clone, PartialEq)]
pub struct DiffEntry {
    pub field: SettingField,
    pub left_value: String,
    pub right_value: String,
}

/// Result of comparing two environments.
///
/// Both sides share the same shape, so entries only ever describe
/// changed values.
#[derive(Debug, Clone, PartialEq)]
pub struct DiffResult {
    pub left_name: String,
    pub right_name: String,
    pub entries: Vec<DiffEntry>,
}

impl DiffResult {
    /// Returns true if there are no differences.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
