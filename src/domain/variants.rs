//! Built-in settings variants.
//!
//! Each variant is a `const` literal. The cargo feature `production`
//! picks which one is [`ACTIVE`] at compile time.

use std::borrow::Cow;

use super::models::build_mode::BuildMode;
use super::models::environment::{AuthSettings, EnvironmentSettings};

/// Local development against the Flask API and the Ionic dev server.
pub const DEVELOPMENT: EnvironmentSettings = EnvironmentSettings {
    production: false,
    api_server_url: Cow::Borrowed("http://127.0.0.1:5000"),
    auth: AuthSettings {
        domain_prefix: Cow::Borrowed("dev-y4dtlj6thn26xy28.us"),
        audience: Cow::Borrowed("http://127.0.0.1:5000/"),
        client_id: Cow::Borrowed("J47SjndQpDdq9aXNEWGGDezCWzbiXru0"),
        callback_url: Cow::Borrowed("http://localhost:8100"),
    },
};

/// Production build. Shares the identity-provider tenant with
/// development; deployments override addresses through `brewenv.toml`.
pub const PRODUCTION: EnvironmentSettings = EnvironmentSettings {
    production: true,
    api_server_url: Cow::Borrowed("http://127.0.0.1:5000"),
    auth: AuthSettings {
        domain_prefix: Cow::Borrowed("dev-y4dtlj6thn26xy28.us"),
        audience: Cow::Borrowed("http://127.0.0.1:5000/"),
        client_id: Cow::Borrowed("J47SjndQpDdq9aXNEWGGDezCWzbiXru0"),
        callback_url: Cow::Borrowed("http://localhost:8100"),
    },
};

/// The variant selected at compile time.
#[cfg(not(feature = "production"))]
pub const ACTIVE: EnvironmentSettings = DEVELOPMENT;

/// The variant selected at compile time.
#[cfg(feature = "production")]
pub const ACTIVE: EnvironmentSettings = PRODUCTION;

static DEVELOPMENT_REF: EnvironmentSettings = DEVELOPMENT;
static PRODUCTION_REF: EnvironmentSettings = PRODUCTION;

/// Built-in variant for a build mode.
pub fn for_mode(mode: BuildMode) -> &'static EnvironmentSettings {
    match mode {
        BuildMode::Development => &DEVELOPMENT_REF,
        BuildMode::Production => &PRODUCTION_REF,
    }
}

/// Build mode of the compile-time active variant.
pub const fn active_mode() -> BuildMode {
    if cfg!(feature = "production") {
        BuildMode::Production
    } else {
        BuildMode::Development
    }
}
