use std::fmt::Write;

use crate::domain::errors::Result;
use crate::domain::models::environment::EnvironmentSettings;
use crate::domain::traits::format::SettingsRenderer;

/// Writes an Angular-style `environment.ts` module for the Ionic client.
pub struct TypescriptFormat;

/// Single-quoted TypeScript string literal.
fn quote(value: &str) -> String {
    let escaped = value
        .replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\u{2028}', "\\u2028")
        .replace('\u{2029}', "\\u2029");
    format!("'{escaped}'")
}

impl SettingsRenderer for TypescriptFormat {
    fn render(&self, settings: &EnvironmentSettings) -> Result<String> {
        let auth = &settings.auth;
        let mut out = String::new();

        // Writing to a String cannot fail.
        let _ = writeln!(out, "export const environment = {{");
        let _ = writeln!(out, "  production: {},", settings.production);
        let _ = writeln!(out, "  apiServerUrl: {},", quote(&settings.api_server_url));
        let _ = writeln!(out, "  auth: {{");
        let _ = writeln!(out, "    domainPrefix: {},", quote(&auth.domain_prefix));
        let _ = writeln!(out, "    audience: {},", quote(&auth.audience));
        let _ = writeln!(out, "    clientId: {},", quote(&auth.client_id));
        let _ = writeln!(out, "    callbackURL: {},", quote(&auth.callback_url));
        let _ = writeln!(out, "  }},");
        let _ = writeln!(out, "}};");

        Ok(out)
    }

    fn extension(&self) -> &'static str {
        "ts"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::variants::DEVELOPMENT;

    #[test]
    fn renders_environment_module() {
        let rendered = TypescriptFormat.render(&DEVELOPMENT).unwrap();

        assert!(rendered.starts_with("export const environment = {\n"));
        assert!(rendered.contains("  production: false,\n"));
        assert!(rendered.contains("  apiServerUrl: 'http://127.0.0.1:5000',\n"));
        assert!(rendered.contains("    callbackURL: 'http://localhost:8100',\n"));
        assert!(rendered.ends_with("};\n"));
    }

    #[test]
    fn quotes_are_escaped() {
        assert_eq!(quote("it's"), "'it\\'s'");
        assert_eq!(quote("a\\b"), "'a\\\\b'");
    }

    #[test]
    fn line_terminators_are_escaped() {
        assert_eq!(quote("a\r\nb"), "'a\\r\\nb'");
        assert_eq!(quote("a\u{2028}b\u{2029}c"), "'a\\u2028b\\u2029c'");
    }
}
