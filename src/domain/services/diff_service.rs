use crate::domain::models::diff_result::{DiffEntry, DiffResult};
use crate::domain::models::environment::EnvironmentSettings;

/// Compares two settings records field by field.
pub struct DiffService;

impl DiffService {
    /// Return every field whose value differs between `left` and `right`.
    ///
    /// Entries follow declaration order. Fields with equal values are
    /// omitted.
    pub fn diff(
        &self,
        left: &EnvironmentSettings,
        right: &EnvironmentSettings,
        left_name: &str,
        right_name: &str,
    ) -> DiffResult {
        let entries = left
            .fields()
            .zip(right.fields())
            .filter(|((_, l), (_, r))| l != r)
            .map(|((field, l), (_, r))| DiffEntry {
                field,
                left_value: l.into_owned(),
                right_value: r.into_owned(),
            })
            .collect();

        DiffResult {
            left_name: left_name.to_string(),
            right_name: right_name.to_string(),
            entries,
        }
    }
}
