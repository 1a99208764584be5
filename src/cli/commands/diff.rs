use colored::Colorize;

use brewenv::domain::errors::{BrewenvError, Result};
use brewenv::domain::services::diff_service::DiffService;
use brewenv::domain::services::env_resolver::EnvResolver;

use super::env_helpers;
use crate::cli::output;

/// Execute the `brewenv diff --env <a> --env <b>` command.
///
/// Lists the fields whose values differ between the two environments.
pub fn execute(envs: &[String]) -> Result<()> {
    let [left, right] = envs else {
        return Err(BrewenvError::InvalidValue {
            field: "--env".into(),
            detail: format!(
                "diff needs exactly two environments (got {}): --env <a> --env <b>",
                envs.len()
            ),
        });
    };

    let config = env_helpers::load_config()?;
    let left_env = EnvResolver.resolve(left, &config)?;
    let right_env = EnvResolver.resolve(right, &config)?;

    let result = DiffService.diff(
        &left_env.settings,
        &right_env.settings,
        &left_env.name,
        &right_env.name,
    );

    output::header(&format!(
        "🔍 brewenv diff: {} ↔ {}",
        result.left_name, result.right_name
    ));

    if result.is_empty() {
        output::success("No differences");
        return Ok(());
    }

    for entry in &result.entries {
        output::info(&format!(
            "  {} {:<18} {} → {}",
            "~".yellow(),
            entry.field.path(),
            entry.left_value.red(),
            entry.right_value.green(),
        ));
    }
    output::info(&format!("\n  {} field(s) differ", result.entries.len()));

    Ok(())
}
