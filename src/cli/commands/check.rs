use std::path::Path;

use brewenv::adapters::formats;
use brewenv::domain::errors::{BrewenvError, Result};
use brewenv::domain::models::environment::EnvironmentSettings;
use brewenv::domain::services::shape_checker::ShapeChecker;
use brewenv::domain::services::validator::Validator;

use super::env_helpers;
use crate::cli::output;

/// Execute the `brewenv check` command.
///
/// Without a file, validates the resolved environment. With a file,
/// first verifies it declares exactly the settings fields, then
/// validates its values.
pub fn execute(file: Option<&str>, env: Option<&str>) -> Result<()> {
    match file {
        Some(path) => check_file(Path::new(path)),
        None => {
            let (_, environment) = env_helpers::resolve(env)?;
            output::header(&format!("🔍 brewenv check: {}", environment.name));
            validate(&environment.settings)
        }
    }
}

fn check_file(path: &Path) -> Result<()> {
    let doc = formats::load_document(path)?;

    output::header(&format!("🔍 brewenv check: {}", path.display()));

    let report = ShapeChecker.check(&doc);
    if !report.missing.is_empty() {
        output::warning(&format!("Missing fields ({}):", report.missing.len()));
        for key in &report.missing {
            output::info(&format!("    • {key}"));
        }
    }
    if !report.extra.is_empty() {
        output::warning(&format!("Unexpected fields ({}):", report.extra.len()));
        for key in &report.extra {
            output::info(&format!("    • {key}"));
        }
    }
    if !report.empty_values.is_empty() {
        output::warning(&format!("Empty values ({}):", report.empty_values.len()));
        for key in &report.empty_values {
            output::info(&format!("    • {key}"));
        }
    }

    if !report.missing.is_empty() || !report.extra.is_empty() {
        return Err(BrewenvError::ShapeMismatch {
            missing: join_or_none(&report.missing),
            extra: join_or_none(&report.extra),
        });
    }
    output::success("Shape matches the settings record");

    let settings = doc.to_settings()?;
    validate(&settings)
}

fn validate(settings: &EnvironmentSettings) -> Result<()> {
    let report = Validator.validate(settings);
    env_helpers::print_report(&report);

    let errors = report.errors().count();
    if errors > 0 {
        return Err(BrewenvError::ValidationFailed { errors });
    }

    let warnings = report.warnings().count();
    if warnings == 0 {
        output::success("No issues found");
    } else {
        output::success(&format!("Valid, with {warnings} warning(s)"));
    }
    Ok(())
}

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "(none)".to_string()
    } else {
        items.join(", ")
    }
}
