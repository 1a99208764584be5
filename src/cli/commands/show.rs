use colored::Colorize;

use brewenv::domain::errors::{BrewenvError, Result};
use brewenv::domain::models::field::SettingField;

use super::env_helpers;
use crate::cli::output;

/// Execute the `brewenv show` command.
///
/// Prints every field of the resolved environment, or only the raw
/// value of `--field` so scripts can capture it.
pub fn execute(env: Option<&str>, field: Option<&str>) -> Result<()> {
    let (_, environment) = env_helpers::resolve(env)?;
    let settings = &environment.settings;

    if let Some(path) = field {
        let field = SettingField::from_path(path).ok_or_else(|| BrewenvError::InvalidValue {
            field: path.to_string(),
            detail: format!(
                "unknown field; expected one of: {}",
                SettingField::ALL.map(|f| f.path()).join(", ")
            ),
        })?;
        println!("{}", settings.value_of(field));
        return Ok(());
    }

    output::header(&format!(
        "Environment: {} ({})",
        environment.name,
        settings.mode()
    ));
    if environment.layers.len() > 1 {
        output::info(&format!("  Inherits: {}", environment.layers.join(" -> ")));
    }
    for (field, value) in settings.fields() {
        output::info(&format!("  {:<18} {}", field.path(), value.cyan()));
    }

    Ok(())
}
