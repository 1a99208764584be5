pub mod dotenv_format;
pub mod json_format;
pub mod toml_format;
pub mod typescript_format;

use std::path::{Path, PathBuf};

use crate::domain::errors::{BrewenvError, Result};
use crate::domain::models::document::SettingsDocument;
use crate::domain::models::field::SettingField;
use crate::domain::traits::format::{SettingsParser, SettingsRenderer};

use dotenv_format::DotenvFormat;
use json_format::JsonFormat;
use toml_format::TomlFormat;
use typescript_format::TypescriptFormat;

/// Names accepted by [`renderer_by_name`].
pub const FORMAT_NAMES: [&str; 4] = ["json", "toml", "dotenv", "ts"];

/// Parse error for content that has no file path yet.
pub(crate) fn input_error(kind: &str, detail: impl Into<String>) -> BrewenvError {
    BrewenvError::ParseError {
        file: PathBuf::from(format!("<{kind} input>")),
        detail: detail.into(),
    }
}

/// Scalar type of a value in a typed format (JSON, TOML).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ScalarKind {
    Boolean,
    Text,
    Other(&'static str),
}

impl ScalarKind {
    fn name(self) -> &'static str {
        match self {
            Self::Boolean => "a boolean",
            Self::Text => "a string",
            Self::Other(name) => name,
        }
    }
}

/// Reject a scalar whose type does not match the field at `path`.
/// Unknown paths are left for the shape check.
pub(crate) fn check_scalar(path: &str, found: ScalarKind) -> Result<()> {
    let Some(field) = SettingField::from_path(path) else {
        return Ok(());
    };
    let expected = if field.is_flag() {
        ScalarKind::Boolean
    } else {
        ScalarKind::Text
    };
    if found == expected {
        Ok(())
    } else {
        Err(BrewenvError::InvalidValue {
            field: path.to_string(),
            detail: format!("expected {}, got {}", expected.name(), found.name()),
        })
    }
}

/// Look up a renderer by format name.
pub fn renderer_by_name(name: &str) -> Result<Box<dyn SettingsRenderer>> {
    match name.to_ascii_lowercase().as_str() {
        "json" => Ok(Box::new(JsonFormat)),
        "toml" => Ok(Box::new(TomlFormat)),
        "dotenv" | "env" => Ok(Box::new(DotenvFormat)),
        "ts" | "typescript" => Ok(Box::new(TypescriptFormat)),
        _ => Err(BrewenvError::UnsupportedFormat {
            name: name.to_string(),
        }),
    }
}

/// Pick a parser from a file's extension (`.json`, `.toml`, `.env`) or
/// a dotenv-style name such as `.env` or `prod.env`.
pub fn parser_for_path(path: &Path) -> Result<Box<dyn SettingsParser>> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();
    if file_name == ".env" || file_name.starts_with(".env.") {
        return Ok(Box::new(DotenvFormat));
    }

    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => Ok(Box::new(JsonFormat)),
        Some("toml") => Ok(Box::new(TomlFormat)),
        Some("env") => Ok(Box::new(DotenvFormat)),
        other => Err(BrewenvError::UnsupportedFormat {
            name: other.unwrap_or(file_name).to_string(),
        }),
    }
}

/// Read and parse a settings file, attributing parse errors to `path`.
pub fn load_document(path: &Path) -> Result<SettingsDocument> {
    if !path.exists() {
        return Err(BrewenvError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let parser = parser_for_path(path)?;
    let content = std::fs::read_to_string(path)?;
    let mut doc = parser.parse(&content).map_err(|e| match e {
        BrewenvError::ParseError { detail, .. } => BrewenvError::ParseError {
            file: path.to_path_buf(),
            detail,
        },
        other => other,
    })?;
    doc.source_path = Some(path.to_path_buf());

    tracing::debug!(path = %path.display(), fields = doc.entries.len(), "parsed settings document");
    Ok(doc)
}
