use std::borrow::Cow;
use std::collections::BTreeMap;
use std::path::PathBuf;

use super::environment::{AuthSettings, EnvironmentSettings};
use super::field::SettingField;
use crate::domain::errors::{BrewenvError, Result};

/// A parsed settings file flattened to `path -> value`.
///
/// Known paths (including legacy `auth0.*` names) are stored under their
/// canonical path; anything else is kept verbatim so shape checks can
/// report it. A field spelled both ways keeps only the canonical
/// spelling under the canonical path; the other spelling stays as an
/// extra path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsDocument {
    pub entries: BTreeMap<String, String>,
    pub source_path: Option<PathBuf>,
    /// Canonical path -> legacy spelling it was read from.
    aliases: BTreeMap<String, String>,
}

impl SettingsDocument {
    /// Insert a value, normalizing known paths.
    pub fn insert(&mut self, path: &str, value: impl Into<String>) {
        let value = value.into();
        let Some(field) = SettingField::from_path(path) else {
            self.entries.insert(path.to_string(), value);
            return;
        };
        let key = field.path();

        if !self.entries.contains_key(key) {
            if path != key {
                self.aliases.insert(key.to_string(), path.to_string());
            }
            self.entries.insert(key.to_string(), value);
            return;
        }

        if path != key {
            // Second spelling of a field that is already set.
            self.entries.insert(path.to_string(), value);
        } else if let Some(alias) = self.aliases.remove(key) {
            // Canonical spelling arrived after the legacy one: move the
            // legacy value back under its own name.
            if let Some(previous) = self.entries.insert(key.to_string(), value) {
                self.entries.insert(alias, previous);
            }
        } else {
            self.entries.insert(key.to_string(), value);
        }
    }

    /// Insert a value for a known field.
    pub fn insert_field(&mut self, field: SettingField, value: impl Into<String>) {
        self.entries.insert(field.path().to_string(), value.into());
    }

    /// Returns the value stored for a path, if present.
    pub fn get(&self, path: &str) -> Option<&str> {
        self.entries.get(path).map(String::as_str)
    }

    /// All paths present, sorted.
    pub fn paths(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    /// Flatten a typed record.
    pub fn from_settings(settings: &EnvironmentSettings) -> Self {
        let mut doc = Self::default();
        for (field, value) in settings.fields() {
            doc.insert_field(field, value.into_owned());
        }
        doc
    }

    /// Convert into a typed record.
    ///
    /// # Errors
    ///
    /// - `ShapeMismatch` if any field is missing or any path is unknown.
    /// - `InvalidValue` if `production` is not `true` or `false`.
    pub fn to_settings(&self) -> Result<EnvironmentSettings> {
        let missing: Vec<&str> = SettingField::ALL
            .iter()
            .map(|f| f.path())
            .filter(|p| !self.entries.contains_key(*p))
            .collect();
        let extra: Vec<&str> = self
            .paths()
            .into_iter()
            .filter(|p| !SettingField::ALL.iter().any(|f| f.path() == *p))
            .collect();

        if !missing.is_empty() || !extra.is_empty() {
            return Err(BrewenvError::ShapeMismatch {
                missing: join_or_none(&missing),
                extra: join_or_none(&extra),
            });
        }

        let text = |field: SettingField| -> Cow<'static, str> {
            Cow::Owned(self.entries[field.path()].clone())
        };

        Ok(EnvironmentSettings {
            production: parse_bool(&self.entries[SettingField::Production.path()])?,
            api_server_url: text(SettingField::ApiServerUrl),
            auth: AuthSettings {
                domain_prefix: text(SettingField::AuthDomainPrefix),
                audience: text(SettingField::AuthAudience),
                client_id: text(SettingField::AuthClientId),
                callback_url: text(SettingField::AuthCallbackUrl),
            },
        })
    }
}

fn parse_bool(raw: &str) -> Result<bool> {
    match raw.trim() {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(BrewenvError::InvalidValue {
            field: SettingField::Production.path().to_string(),
            detail: format!("expected true or false, got '{other}'"),
        }),
    }
}

fn join_or_none(items: &[&str]) -> String {
    if items.is_empty() {
        "(none)".to_string()
    } else {
        items.join(", ")
    }
}
