use toml::Value;

use crate::adapters::formats::{ScalarKind, check_scalar, input_error};
use crate::domain::errors::{BrewenvError, Result};
use crate::domain::models::document::SettingsDocument;
use crate::domain::models::environment::EnvironmentSettings;
use crate::domain::traits::format::{SettingsParser, SettingsRenderer};

/// Reads and writes settings as TOML with an `[auth]` table.
pub struct TomlFormat;

fn flatten(prefix: &str, value: &Value, doc: &mut SettingsDocument) -> Result<()> {
    match value {
        Value::Table(table) => {
            for (key, child) in table {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten(&path, child, doc)?;
            }
        }
        Value::String(s) => {
            check_scalar(prefix, ScalarKind::Text)?;
            doc.insert(prefix, s.as_str());
        }
        Value::Boolean(b) => {
            check_scalar(prefix, ScalarKind::Boolean)?;
            doc.insert(prefix, b.to_string());
        }
        Value::Integer(i) => {
            check_scalar(prefix, ScalarKind::Other("an integer"))?;
            doc.insert(prefix, i.to_string());
        }
        Value::Float(f) => {
            check_scalar(prefix, ScalarKind::Other("a float"))?;
            doc.insert(prefix, f.to_string());
        }
        Value::Datetime(d) => {
            check_scalar(prefix, ScalarKind::Other("a datetime"))?;
            doc.insert(prefix, d.to_string());
        }
        Value::Array(_) => {
            return Err(input_error("toml", format!("'{prefix}': arrays are not supported")));
        }
    }
    Ok(())
}

impl SettingsParser for TomlFormat {
    fn parse(&self, content: &str) -> Result<SettingsDocument> {
        let table: toml::Table =
            toml::from_str(content).map_err(|e| input_error("toml", e.to_string()))?;

        let mut doc = SettingsDocument::default();
        flatten("", &Value::Table(table), &mut doc)?;
        Ok(doc)
    }
}

impl SettingsRenderer for TomlFormat {
    fn render(&self, settings: &EnvironmentSettings) -> Result<String> {
        toml::to_string(settings).map_err(|e| BrewenvError::InvalidValue {
            field: "settings".into(),
            detail: format!("cannot encode as TOML: {e}"),
        })
    }

    fn extension(&self) -> &'static str {
        "toml"
    }
}
