use super::field::SettingField;

/// How serious a validation finding is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    Error,
}

/// A single finding about one field.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationIssue {
    pub field: SettingField,
    pub severity: Severity,
    pub message: String,
}

/// All findings for one settings record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub(crate) fn error(&mut self, field: SettingField, message: impl Into<String>) {
        self.issues.push(ValidationIssue {
            field,
            severity: Severity::Error,
            message: message.into(),
        });
    }

    pub(crate) fn warning(&mut self, field: SettingField, message: impl Into<String>) {
        self.issues.push(ValidationIssue {
            field,
            severity: Severity::Warning,
            message: message.into(),
        });
    }

    pub fn errors(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(|i| i.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(|i| i.severity == Severity::Warning)
    }

    /// True when no errors were found. Warnings do not fail a report.
    pub fn is_ok(&self) -> bool {
        self.errors().next().is_none()
    }

    /// Findings for one field.
    pub fn for_field(&self, field: SettingField) -> Vec<&ValidationIssue> {
        self.issues.iter().filter(|i| i.field == field).collect()
    }
}
