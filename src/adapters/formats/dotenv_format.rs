use crate::adapters::formats::input_error;
use crate::domain::errors::Result;
use crate::domain::models::document::SettingsDocument;
use crate::domain::models::environment::EnvironmentSettings;
use crate::domain::models::field::SettingField;
use crate::domain::traits::format::{SettingsParser, SettingsRenderer};

/// Reads and writes settings as `.env` variables.
///
/// Supports:
/// - `KEY=value` entries named after [`SettingField::env_key`]
/// - Quoted values (`KEY="value"` with `\\`, `\"`, `\n`, `\r` escapes,
///   and literal `KEY='value'`)
/// - Comment lines (`# ...`) and blank lines, which are skipped
///
/// Unknown variables are kept under their own name so shape checks can
/// report them.
pub struct DotenvFormat;

impl DotenvFormat {
    /// Parse a single line into a key-value pair, or `None` for
    /// comments and blanks.
    fn parse_line(raw: &str, line_number: usize) -> Result<Option<(String, String)>> {
        let trimmed = raw.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(None);
        }

        // Key=Value line — find the first '='
        let Some(eq_pos) = trimmed.find('=') else {
            return Err(input_error(
                "env",
                format!("line {line_number}: expected KEY=value, got: {trimmed}"),
            ));
        };

        let key = trimmed[..eq_pos].trim().to_string();
        if key.is_empty() {
            return Err(input_error("env", format!("line {line_number}: empty key")));
        }

        let value = strip_quotes(trimmed[eq_pos + 1..].trim());
        Ok(Some((key, value)))
    }
}

/// Remove matching surrounding quotes from a value. Double-quoted
/// values have their escapes undone; single-quoted values are literal.
fn strip_quotes(s: &str) -> String {
    let bytes = s.as_bytes();
    if bytes.len() >= 2 {
        let first = bytes[0];
        let last = bytes[bytes.len() - 1];
        if first == b'"' && last == b'"' {
            return unescape(&s[1..s.len() - 1]);
        }
        if first == b'\'' && last == b'\'' {
            return s[1..s.len() - 1].to_string();
        }
    }
    s.to_string()
}

fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}

/// Double-quoted value that [`strip_quotes`] reads back unchanged.
fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            other => out.push(other),
        }
    }
    out.push('"');
    out
}

impl SettingsParser for DotenvFormat {
    fn parse(&self, content: &str) -> Result<SettingsDocument> {
        let mut doc = SettingsDocument::default();

        for (idx, raw) in content.lines().enumerate() {
            if let Some((key, value)) = DotenvFormat::parse_line(raw, idx + 1)? {
                match SettingField::from_env_key(&key) {
                    Some(field) => doc.insert_field(field, value),
                    None => doc.insert(&key, value),
                }
            }
        }

        Ok(doc)
    }
}

impl SettingsRenderer for DotenvFormat {
    fn render(&self, settings: &EnvironmentSettings) -> Result<String> {
        let mut output = String::new();
        for (field, value) in settings.fields() {
            output.push_str(field.env_key());
            output.push('=');
            output.push_str(&quote(&value));
            output.push('\n');
        }
        Ok(output)
    }

    fn extension(&self) -> &'static str {
        "env"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::variants::DEVELOPMENT;

    #[test]
    fn render_lists_every_field() {
        let rendered = DotenvFormat.render(&DEVELOPMENT).unwrap();
        assert_eq!(
            rendered,
            "PRODUCTION=\"false\"\n\
             API_SERVER_URL=\"http://127.0.0.1:5000\"\n\
             AUTH_DOMAIN_PREFIX=\"dev-y4dtlj6thn26xy28.us\"\n\
             AUTH_AUDIENCE=\"http://127.0.0.1:5000/\"\n\
             AUTH_CLIENT_ID=\"J47SjndQpDdq9aXNEWGGDezCWzbiXru0\"\n\
             AUTH_CALLBACK_URL=\"http://localhost:8100\"\n"
        );
    }

    #[test]
    fn parse_maps_variables_to_fields() {
        let doc = DotenvFormat
            .parse("# dev\nPRODUCTION=false\n\nAPI_SERVER_URL=\"http://127.0.0.1:5000\"")
            .unwrap();
        assert_eq!(doc.get("production"), Some("false"));
        assert_eq!(doc.get("apiServerUrl"), Some("http://127.0.0.1:5000"));
    }

    #[test]
    fn parse_keeps_unknown_variables() {
        let doc = DotenvFormat.parse("DATABASE_URL='postgres://x'").unwrap();
        assert_eq!(doc.get("DATABASE_URL"), Some("postgres://x"));
    }

    #[test]
    fn render_then_parse_yields_same_record() {
        let rendered = DotenvFormat.render(&DEVELOPMENT).unwrap();
        let settings = DotenvFormat.parse(&rendered).unwrap().to_settings().unwrap();
        assert_eq!(settings, DEVELOPMENT);
    }

    #[test]
    fn awkward_values_survive_render_then_parse() {
        let mut settings = DEVELOPMENT.clone();
        settings.auth.callback_url = "'http://localhost:8100'".into();
        settings.auth.audience = "  padded \"quoted\" \\path\\  ".into();
        settings.auth.client_id = "line1\nline2\r".into();

        let rendered = DotenvFormat.render(&settings).unwrap();
        assert_eq!(rendered.lines().count(), 6);

        let parsed = DotenvFormat.parse(&rendered).unwrap().to_settings().unwrap();
        assert_eq!(parsed, settings);
    }

    #[test]
    fn double_quoted_escapes_are_undone() {
        assert_eq!(strip_quotes(r#""a\"b\\c\nd""#), "a\"b\\c\nd");
        assert_eq!(strip_quotes(r"'a\nb'"), r"a\nb");
    }

    #[test]
    fn parse_invalid_line_fails() {
        assert!(DotenvFormat.parse("THIS_IS_NOT_VALID").is_err());
        assert!(DotenvFormat.parse("=value").is_err());
    }

    #[test]
    fn strip_quotes_ignores_unbalanced() {
        assert_eq!(strip_quotes("\"abc"), "\"abc");
        assert_eq!(strip_quotes("'x'"), "x");
    }
}
