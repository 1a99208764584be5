use brewenv::config::app_config::AppConfig;
use brewenv::domain::errors::Result;
use brewenv::domain::models::resolved_environment::Environment;
use brewenv::domain::models::validation_report::{Severity, ValidationReport};
use brewenv::domain::services::env_resolver::EnvResolver;

use crate::cli::{context, output};

/// Load `brewenv.toml` (or the `--config` override).
pub fn load_config() -> Result<AppConfig> {
    AppConfig::load(context::config_path())
}

/// Resolve `env`, falling back to the configured default.
pub fn resolve(env: Option<&str>) -> Result<(AppConfig, Environment)> {
    let config = load_config()?;
    let name = env.unwrap_or_else(|| config.default_env()).to_string();
    let environment = EnvResolver.resolve(&name, &config)?;
    Ok((config, environment))
}

/// Print every issue in a validation report.
pub fn print_report(report: &ValidationReport) {
    for issue in &report.issues {
        let line = format!("{}: {}", issue.field, issue.message);
        match issue.severity {
            Severity::Error => output::error(&line),
            Severity::Warning => output::warning(&line),
        }
    }
}
