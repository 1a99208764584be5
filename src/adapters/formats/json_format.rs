use serde_json::Value;

use crate::adapters::formats::{ScalarKind, check_scalar, input_error};
use crate::domain::errors::{BrewenvError, Result};
use crate::domain::models::document::SettingsDocument;
use crate::domain::models::environment::EnvironmentSettings;
use crate::domain::traits::format::{SettingsParser, SettingsRenderer};

/// Reads and writes settings as a nested JSON object, the shape a
/// JavaScript bundler expects.
pub struct JsonFormat;

fn flatten(prefix: &str, value: &Value, doc: &mut SettingsDocument) -> Result<()> {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
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
        Value::Bool(b) => {
            check_scalar(prefix, ScalarKind::Boolean)?;
            doc.insert(prefix, b.to_string());
        }
        Value::Number(n) => {
            check_scalar(prefix, ScalarKind::Other("a number"))?;
            doc.insert(prefix, n.to_string());
        }
        Value::Null => {
            check_scalar(prefix, ScalarKind::Other("null"))?;
            doc.insert(prefix, "");
        }
        Value::Array(_) => {
            return Err(input_error("json", format!("'{prefix}': arrays are not supported")));
        }
    }
    Ok(())
}

impl SettingsParser for JsonFormat {
    fn parse(&self, content: &str) -> Result<SettingsDocument> {
        let value: Value =
            serde_json::from_str(content).map_err(|e| input_error("json", e.to_string()))?;
        if !value.is_object() {
            return Err(input_error("json", "top level must be an object"));
        }

        let mut doc = SettingsDocument::default();
        flatten("", &value, &mut doc)?;
        Ok(doc)
    }
}

impl SettingsRenderer for JsonFormat {
    fn render(&self, settings: &EnvironmentSettings) -> Result<String> {
        let mut out =
            serde_json::to_string_pretty(settings).map_err(|e| BrewenvError::InvalidValue {
                field: "settings".into(),
                detail: format!("cannot encode as JSON: {e}"),
            })?;
        out.push('\n');
        Ok(out)
    }

    fn extension(&self) -> &'static str {
        "json"
    }
}
