use colored::Colorize;

use brewenv::domain::errors::Result;
use brewenv::domain::services::endpoints::{ApiRoute, AuthEndpoints};

use super::env_helpers;
use crate::cli::output;

/// Execute the `brewenv urls` command.
///
/// Prints the drinks API routes and the identity-provider addresses
/// derived from the resolved environment.
pub fn execute(env: Option<&str>, callback_path: &str) -> Result<()> {
    let (_, environment) = env_helpers::resolve(env)?;
    let settings = &environment.settings;

    output::header(&format!("API routes ({})", environment.name));
    for route in ApiRoute::CATALOG {
        let permission = route
            .permission()
            .map(|p| format!("[{p}]"))
            .unwrap_or_else(|| "[public]".to_string());
        let url = route.url_template(settings)?;
        output::info(&format!(
            "  {:<7} {:<48} {}",
            route.method(),
            url,
            permission.dimmed(),
        ));
    }

    let auth = AuthEndpoints::new(settings);
    output::header("Identity provider");
    output::info(&format!("  Issuer:  {}", auth.issuer()));
    output::info(&format!("  JWKS:    {}", auth.jwks_url()?));
    output::info(&format!("  Login:   {}", auth.authorize_url(callback_path)?));
    output::info(&format!("  Logout:  {}", auth.logout_url()?));

    Ok(())
}
