use std::sync::OnceLock;

use super::errors::{BrewenvError, Result};
use super::models::environment::EnvironmentSettings;
use super::variants;

static INSTALLED: OnceLock<EnvironmentSettings> = OnceLock::new();

/// Install the settings selected at startup.
///
/// Only the first call wins; the record is never replaced afterwards.
pub fn install(settings: EnvironmentSettings) -> Result<&'static EnvironmentSettings> {
    let mut fresh = false;
    let stored = INSTALLED.get_or_init(|| {
        fresh = true;
        settings
    });
    if fresh {
        tracing::debug!(mode = %stored.mode(), api = %stored.api_server_url, "installed environment settings");
        Ok(stored)
    } else {
        Err(BrewenvError::AlreadyInstalled)
    }
}

/// The installed settings, or the compile-time active variant when
/// nothing was installed.
pub fn current() -> &'static EnvironmentSettings {
    INSTALLED
        .get()
        .unwrap_or_else(|| variants::for_mode(variants::active_mode()))
}

/// True once [`install`] has succeeded.
pub fn is_installed() -> bool {
    INSTALLED.get().is_some()
}
