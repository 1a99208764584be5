//! Address derivation for the consumers of a settings record: the HTTP
//! client that talks to the drinks API and the login flow against the
//! identity provider.

use std::fmt;

use url::Url;

use crate::domain::errors::{BrewenvError, Result};
use crate::domain::models::environment::{AuthSettings, EnvironmentSettings};

/// Identity-provider host suffix appended to the domain prefix.
pub const AUTH_HOST_SUFFIX: &str = "auth0.com";

fn parse_url(raw: &str) -> Result<Url> {
    Url::parse(raw).map_err(|e| BrewenvError::InvalidUrl {
        value: raw.to_string(),
        reason: e.to_string(),
    })
}

/// Join `apiServerUrl` and `path` with exactly one slash between them.
pub fn api_endpoint(settings: &EnvironmentSettings, path: &str) -> Result<Url> {
    let base = settings.api_server_url.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        parse_url(base)
    } else {
        parse_url(&format!("{base}/{path}"))
    }
}

/// Routes served by the drinks API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiRoute {
    ListDrinks,
    DrinkDetails,
    CreateDrink,
    UpdateDrink(u64),
    DeleteDrink(u64),
}

impl ApiRoute {
    /// One of each route, with `0` standing in for drink ids.
    pub const CATALOG: [ApiRoute; 5] = [
        Self::ListDrinks,
        Self::DrinkDetails,
        Self::CreateDrink,
        Self::UpdateDrink(0),
        Self::DeleteDrink(0),
    ];

    pub const fn method(self) -> &'static str {
        match self {
            Self::ListDrinks | Self::DrinkDetails => "GET",
            Self::CreateDrink => "POST",
            Self::UpdateDrink(_) => "PATCH",
            Self::DeleteDrink(_) => "DELETE",
        }
    }

    /// Permission the access token must carry. `None` for public routes.
    pub const fn permission(self) -> Option<&'static str> {
        match self {
            Self::ListDrinks => None,
            Self::DrinkDetails => Some("get:drinks-detail"),
            Self::CreateDrink => Some("post:drinks"),
            Self::UpdateDrink(_) => Some("patch:drinks"),
            Self::DeleteDrink(_) => Some("delete:drinks"),
        }
    }

    pub fn path(self) -> String {
        match self {
            Self::ListDrinks | Self::CreateDrink => "/drinks".to_string(),
            Self::DrinkDetails => "/drinks-detail".to_string(),
            Self::UpdateDrink(id) | Self::DeleteDrink(id) => format!("/drinks/{id}"),
        }
    }

    /// Path with `<id>` in place of a concrete drink id.
    pub fn path_template(self) -> &'static str {
        match self {
            Self::ListDrinks | Self::CreateDrink => "/drinks",
            Self::DrinkDetails => "/drinks-detail",
            Self::UpdateDrink(_) | Self::DeleteDrink(_) => "/drinks/<id>",
        }
    }

    /// Absolute address of this route under `settings`.
    pub fn url(self, settings: &EnvironmentSettings) -> Result<Url> {
        api_endpoint(settings, &self.path())
    }

    /// Absolute address with `<id>` in place of a concrete drink id.
    ///
    /// Derived from [`ApiRoute::url`], so an unusable base fails here too.
    pub fn url_template(self, settings: &EnvironmentSettings) -> Result<String> {
        let url = self.url(settings)?;
        Ok(match self {
            Self::UpdateDrink(_) | Self::DeleteDrink(_) => {
                let full = url.as_str();
                let base = full.rsplit_once('/').map_or(full, |(base, _)| base);
                format!("{base}/<id>")
            }
            _ => url.to_string(),
        })
    }
}

impl fmt::Display for ApiRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method(), self.path_template())
    }
}

/// Identity-provider addresses derived from the `auth` group.
#[derive(Debug, Clone, Copy)]
pub struct AuthEndpoints<'a> {
    auth: &'a AuthSettings,
}

impl<'a> AuthEndpoints<'a> {
    pub fn new(settings: &'a EnvironmentSettings) -> Self {
        Self {
            auth: &settings.auth,
        }
    }

    /// `<prefix>.auth0.com`
    pub fn tenant_host(&self) -> String {
        format!("{}.{AUTH_HOST_SUFFIX}", self.auth.domain_prefix)
    }

    pub fn base_url(&self) -> Result<Url> {
        parse_url(&format!("https://{}", self.tenant_host()))
    }

    /// Expected `iss` claim of issued tokens.
    pub fn issuer(&self) -> String {
        format!("https://{}/", self.tenant_host())
    }

    /// Key set used to verify token signatures.
    pub fn jwks_url(&self) -> Result<Url> {
        parse_url(&format!("https://{}/.well-known/jwks.json", self.tenant_host()))
    }

    /// Login link for the implicit flow. `callback_path` is appended to
    /// the configured callback URL.
    pub fn authorize_url(&self, callback_path: &str) -> Result<Url> {
        let mut url = parse_url(&format!("https://{}/authorize", self.tenant_host()))?;
        let redirect = format!("{}{callback_path}", self.auth.callback_url);
        url.query_pairs_mut()
            .append_pair("audience", &self.auth.audience)
            .append_pair("response_type", "token")
            .append_pair("client_id", &self.auth.client_id)
            .append_pair("redirect_uri", &redirect);
        Ok(url)
    }

    /// Session logout, returning to the callback URL.
    pub fn logout_url(&self) -> Result<Url> {
        let mut url = parse_url(&format!("https://{}/v2/logout", self.tenant_host()))?;
        url.query_pairs_mut()
            .append_pair("client_id", &self.auth.client_id)
            .append_pair("returnTo", &self.auth.callback_url);
        Ok(url)
    }
}
