use colored::Colorize;

use brewenv::domain::errors::Result;
use brewenv::domain::services::env_resolver::EnvResolver;

use super::env_helpers;
use crate::cli::output;

/// Execute the `brewenv list` command.
///
/// Lists built-in and custom environments with their build mode and
/// inheritance chain. The default environment is marked with `*`.
pub fn execute() -> Result<()> {
    let config = env_helpers::load_config()?;
    let default_env = config.default_env().to_string();

    output::header("Environments");

    for name in config.environment_names() {
        let marker = if name == default_env { "*" } else { " " };
        match EnvResolver.resolve(&name, &config) {
            Ok(env) => output::info(&format!(
                "  {marker} {:<14} {:<12} {}",
                name,
                env.settings.mode().to_string(),
                env.layers.join(" -> ").dimmed(),
            )),
            Err(e) => {
                let reason = e.to_string();
                let first_line = reason.lines().next().unwrap_or_default();
                output::warning(&format!("{name}: {first_line}"));
            }
        }
    }

    Ok(())
}
