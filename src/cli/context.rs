use std::path::{Path, PathBuf};
use std::sync::OnceLock;

static CONFIG_PATH: OnceLock<Option<PathBuf>> = OnceLock::new();
static QUIET: OnceLock<bool> = OnceLock::new();

/// Record the global CLI options.
/// `custom` overrides the default `brewenv.toml` lookup.
pub fn init(custom: Option<&str>, quiet: bool) {
    let _ = CONFIG_PATH.set(custom.map(PathBuf::from));
    let _ = QUIET.set(quiet);
}

/// Explicit config path, if one was given.
pub fn config_path() -> Option<&'static Path> {
    CONFIG_PATH.get().and_then(|p| p.as_deref())
}

/// Whether informational output is suppressed.
pub fn quiet() -> bool {
    QUIET.get().copied().unwrap_or(false)
}
