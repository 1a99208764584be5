use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use super::build_mode::BuildMode;
use super::field::SettingField;

/// Environment-specific settings consumed by the Coffee Shop client.
///
/// Built-in variants are `const` items backed by borrowed literals;
/// records loaded from files own their strings. Either way the shape
/// is fixed: the same six fields, never more, never fewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EnvironmentSettings {
    /// Whether this is a production build.
    pub production: bool,
    /// Base address of the backend API.
    pub api_server_url: Cow<'static, str>,
    /// Identity-provider parameters.
    pub auth: AuthSettings,
}

/// Identity-provider parameters for the login and redirect flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AuthSettings {
    /// Tenant prefix, e.g. `dev-abc123.us` for `dev-abc123.us.auth0.com`.
    pub domain_prefix: Cow<'static, str>,
    /// Resource identifier access tokens are issued for.
    pub audience: Cow<'static, str>,
    /// Public identifier of the registered client application.
    pub client_id: Cow<'static, str>,
    /// Where the identity provider redirects after authentication.
    #[serde(rename = "callbackURL")]
    pub callback_url: Cow<'static, str>,
}

impl EnvironmentSettings {
    /// Build mode derived from the `production` flag.
    pub fn mode(&self) -> BuildMode {
        if self.production {
            BuildMode::Production
        } else {
            BuildMode::Development
        }
    }

    /// String form of a single field, as written to exports.
    pub fn value_of(&self, field: SettingField) -> Cow<'_, str> {
        match field {
            SettingField::Production => Cow::Owned(self.production.to_string()),
            SettingField::ApiServerUrl => Cow::Borrowed(&*self.api_server_url),
            SettingField::AuthDomainPrefix => Cow::Borrowed(&*self.auth.domain_prefix),
            SettingField::AuthAudience => Cow::Borrowed(&*self.auth.audience),
            SettingField::AuthClientId => Cow::Borrowed(&*self.auth.client_id),
            SettingField::AuthCallbackUrl => Cow::Borrowed(&*self.auth.callback_url),
        }
    }

    /// All fields paired with their string values, in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (SettingField, Cow<'_, str>)> {
        SettingField::ALL
            .iter()
            .map(move |&field| (field, self.value_of(field)))
    }
}
