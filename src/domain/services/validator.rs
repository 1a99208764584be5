use std::sync::LazyLock;

use regex::Regex;
use url::{Host, Url};

use crate::domain::models::environment::EnvironmentSettings;
use crate::domain::models::field::SettingField;
use crate::domain::models::validation_report::ValidationReport;

static DOMAIN_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9-]+)*$")
        .expect("domain prefix pattern is always valid")
});

static CLIENT_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_-]+$").expect("client id pattern is always valid")
});

/// Checks literal values for mistakes that would only surface when a
/// consumer tries to use them.
pub struct Validator;

impl Validator {
    /// Validate every field of `settings`.
    ///
    /// Errors make the record unusable; warnings flag values that are
    /// legal but suspicious for the build mode.
    pub fn validate(&self, settings: &EnvironmentSettings) -> ValidationReport {
        let mut report = ValidationReport::default();

        let api = check_http_url(&mut report, SettingField::ApiServerUrl, &settings.api_server_url);
        let callback = check_http_url(
            &mut report,
            SettingField::AuthCallbackUrl,
            &settings.auth.callback_url,
        );

        match Url::parse(&settings.auth.audience) {
            Err(e) => report.error(
                SettingField::AuthAudience,
                format!("'{}' is not an absolute URL ({e})", settings.auth.audience),
            ),
            Ok(audience) => {
                if let Some(api) = &api
                    && !audience_targets(&audience, api)
                {
                    report.warning(
                        SettingField::AuthAudience,
                        "audience does not point at apiServerUrl; tokens may be rejected by the API",
                    );
                }
            }
        }

        check_domain_prefix(&mut report, &settings.auth.domain_prefix);

        if settings.auth.client_id.is_empty() {
            report.error(SettingField::AuthClientId, "client id is empty");
        } else if !CLIENT_ID.is_match(&settings.auth.client_id) {
            report.error(
                SettingField::AuthClientId,
                "client id may only contain letters, digits, '-' and '_'",
            );
        }

        if settings.production {
            if let Some(url) = &api {
                if url.scheme() == "http" {
                    report.warning(
                        SettingField::ApiServerUrl,
                        "production build talks to the API over plain http",
                    );
                }
                if is_loopback(url) {
                    report.warning(
                        SettingField::ApiServerUrl,
                        "production build points at a loopback address",
                    );
                }
            }
            if let Some(url) = &callback {
                if url.scheme() == "http" {
                    report.warning(
                        SettingField::AuthCallbackUrl,
                        "production callback uses plain http",
                    );
                }
            }
        }

        tracing::debug!(
            mode = %settings.mode(),
            issues = report.issues.len(),
            "validated environment settings"
        );
        report
    }
}

/// Same origin as the API, and a path at or below the API's path.
fn audience_targets(audience: &Url, api: &Url) -> bool {
    if audience.origin() != api.origin() {
        return false;
    }
    let base = api.path().trim_end_matches('/');
    let path = audience.path();
    path == base || path.strip_prefix(base).is_some_and(|rest| rest.starts_with('/'))
}

/// Parse an absolute http(s) URL, recording an error when it is not one.
fn check_http_url(report: &mut ValidationReport, field: SettingField, raw: &str) -> Option<Url> {
    match Url::parse(raw) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Some(url),
        Ok(url) => {
            report.error(
                field,
                format!("expected an http or https URL, got scheme '{}'", url.scheme()),
            );
            None
        }
        Err(e) => {
            report.error(field, format!("'{raw}' is not an absolute URL ({e})"));
            None
        }
    }
}

fn check_domain_prefix(report: &mut ValidationReport, prefix: &str) {
    let field = SettingField::AuthDomainPrefix;
    if prefix.is_empty() {
        report.error(field, "domain prefix is empty");
    } else if prefix.contains("://") || prefix.contains('/') {
        report.error(field, "domain prefix must be a bare tenant name, not a URL");
    } else if prefix.ends_with("auth0.com") {
        report.error(
            field,
            "domain prefix must not include '.auth0.com'; it is appended automatically",
        );
    } else if !DOMAIN_PREFIX.is_match(prefix) {
        report.error(field, format!("'{prefix}' is not a valid tenant name"));
    }
}

fn is_loopback(url: &Url) -> bool {
    match url.host() {
        Some(Host::Ipv4(ip)) => ip.is_loopback(),
        Some(Host::Ipv6(ip)) => ip.is_loopback(),
        Some(Host::Domain(d)) => d == "localhost",
        None => false,
    }
}
