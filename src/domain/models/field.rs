use std::fmt;

/// One leaf field of [`EnvironmentSettings`](super::environment::EnvironmentSettings).
///
/// The set is closed: every variant of the record carries exactly these
/// six fields, and tooling uses this enum to check that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SettingField {
    Production,
    ApiServerUrl,
    AuthDomainPrefix,
    AuthAudience,
    AuthClientId,
    AuthCallbackUrl,
}

impl SettingField {
    /// Every field, in declaration order.
    pub const ALL: [SettingField; 6] = [
        Self::Production,
        Self::ApiServerUrl,
        Self::AuthDomainPrefix,
        Self::AuthAudience,
        Self::AuthClientId,
        Self::AuthCallbackUrl,
    ];

    /// Dotted path as seen by consumers (`auth.clientId`).
    pub const fn path(self) -> &'static str {
        match self {
            Self::Production => "production",
            Self::ApiServerUrl => "apiServerUrl",
            Self::AuthDomainPrefix => "auth.domainPrefix",
            Self::AuthAudience => "auth.audience",
            Self::AuthClientId => "auth.clientId",
            Self::AuthCallbackUrl => "auth.callbackURL",
        }
    }

    /// True for the boolean field; every other field holds text.
    pub const fn is_flag(self) -> bool {
        matches!(self, Self::Production)
    }

    /// Variable name used in dotenv exports.
    pub const fn env_key(self) -> &'static str {
        match self {
            Self::Production => "PRODUCTION",
            Self::ApiServerUrl => "API_SERVER_URL",
            Self::AuthDomainPrefix => "AUTH_DOMAIN_PREFIX",
            Self::AuthAudience => "AUTH_AUDIENCE",
            Self::AuthClientId => "AUTH_CLIENT_ID",
            Self::AuthCallbackUrl => "AUTH_CALLBACK_URL",
        }
    }

    /// Resolve a dotted path. Accepts the legacy `auth0` group and its
    /// `url` key for the domain prefix.
    pub fn from_path(path: &str) -> Option<Self> {
        let (group, key) = match path.split_once('.') {
            Some((group, key)) => (Some(group), key),
            None => (None, path),
        };

        match (group, key) {
            (None, "production") => Some(Self::Production),
            (None, "apiServerUrl") => Some(Self::ApiServerUrl),
            (Some("auth" | "auth0"), "domainPrefix" | "url") => Some(Self::AuthDomainPrefix),
            (Some("auth" | "auth0"), "audience") => Some(Self::AuthAudience),
            (Some("auth" | "auth0"), "clientId") => Some(Self::AuthClientId),
            (Some("auth" | "auth0"), "callbackURL") => Some(Self::AuthCallbackUrl),
            _ => None,
        }
    }

    /// Resolve a dotenv variable name.
    pub fn from_env_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.env_key() == key)
    }
}

impl fmt::Display for SettingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_paths_resolve() {
        for field in SettingField::ALL {
            assert_eq!(SettingField::from_path(field.path()), Some(field));
            assert_eq!(SettingField::from_env_key(field.env_key()), Some(field));
        }
    }

    #[test]
    fn legacy_auth0_keys_resolve() {
        assert_eq!(
            SettingField::from_path("auth0.url"),
            Some(SettingField::AuthDomainPrefix)
        );
        assert_eq!(
            SettingField::from_path("auth0.clientId"),
            Some(SettingField::AuthClientId)
        );
    }

    #[test]
    fn unknown_paths_do_not_resolve() {
        assert_eq!(SettingField::from_path("auth.secret"), None);
        assert_eq!(SettingField::from_path("url"), None);
        assert_eq!(SettingField::from_path("callbackURL"), None);
    }
}
