use std::path::PathBuf;

/// All domain errors for brewenv.
///
/// Each variant provides enough context to diagnose the issue
/// without needing a debugger.
#[derive(Debug, thiserror::Error)]
pub enum BrewenvError {
    #[error(
        "File not found: {path}\n\n  \
         Check that the path is correct and the file exists.\n  \
         Run 'brewenv list' to see available environments."
    )]
    FileNotFound { path: PathBuf },

    #[error(
        "Parse error in {file}: {detail}\n\n  \
         Supported inputs: .json, .toml and .env files with the\n  \
         same fields as 'brewenv export' produces."
    )]
    ParseError { file: PathBuf, detail: String },

    #[error(
        "Unsupported format '{name}'\n\n  \
         Available formats: json, toml, dotenv, ts"
    )]
    UnsupportedFormat { name: String },

    #[error(
        "Environment '{name}' not found\n\n  \
         Available environments: {available}\n  \
         Check brewenv.toml for custom environment definitions."
    )]
    EnvironmentNotFound { name: String, available: String },

    #[error(
        "Circular inheritance detected: {chain}\n\n  \
         Two or more environments inherit from each other, creating a loop.\n\n  \
         Fix: edit brewenv.toml so every chain ends at a built-in variant:\n    \
         → Valid:   production → staging → demo\n    \
         → Invalid: staging → demo → staging (cycle)"
    )]
    CircularInheritance { chain: String },

    #[error("Invalid configuration: {detail}")]
    InvalidConfig { detail: String },

    #[error(
        "Invalid environment name '{name}'\n\n  \
         Names must start with a lowercase letter or digit and contain only\n  \
         lowercase letters, digits, '-' and '_'."
    )]
    InvalidEnvName { name: String },

    #[error(
        "This project uses format version {project_version}, but your brewenv \
         only supports up to version {supported_version}.\n\n  \
         Update brewenv to read this brewenv.toml."
    )]
    FormatVersionTooNew {
        project_version: u32,
        supported_version: u32,
    },

    #[error(
        "Settings shape mismatch\n\n  \
         Missing fields: {missing}\n  \
         Unexpected fields: {extra}\n\n  \
         Every variant must declare exactly: production, apiServerUrl,\n  \
         auth.domainPrefix, auth.audience, auth.clientId, auth.callbackURL"
    )]
    ShapeMismatch { missing: String, extra: String },

    #[error("Invalid value for {field}: {detail}")]
    InvalidValue { field: String, detail: String },

    #[error("Invalid URL '{value}': {reason}")]
    InvalidUrl { value: String, reason: String },

    #[error(
        "Environment settings already installed for this process\n\n  \
         Settings are selected once at startup and never replaced."
    )]
    AlreadyInstalled,

    #[error("Validation failed with {errors} error(s)")]
    ValidationFailed { errors: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, BrewenvError>;
