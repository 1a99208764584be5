use assert_cmd::cargo::cargo_bin_cmd;
use assert_fs::prelude::*;
use predicates::prelude::*;

/// Run brewenv with a clean environment.
fn brewenv() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("brewenv");
    cmd.env_remove("BREWENV_ENV").env("NO_COLOR", "1");
    cmd
}

// ─── Check command ──────────────────────────────────────────────

#[test]
fn check_development_is_clean() {
    let dir = assert_fs::TempDir::new().unwrap();

    brewenv()
        .current_dir(dir.path())
        .args(["check", "--env", "development"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No issues found"));
}

#[test]
fn check_production_reports_warnings_but_passes() {
    let dir = assert_fs::TempDir::new().unwrap();

    brewenv()
        .current_dir(dir.path())
        .args(["check", "--env", "production"])
        .assert()
        .success()
        .stdout(predicate::str::contains("plain http"))
        .stdout(predicate::str::contains("loopback"))
        .stdout(predicate::str::contains("warning(s)"));
}

#[test]
fn check_invalid_overlay_fails() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("brewenv.toml")
        .write_str("[environments.broken]\napi_server_url = \"not a url\"\n")
        .unwrap();

    brewenv()
        .current_dir(dir.path())
        .args(["check", "--env", "broken"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("apiServerUrl"))
        .stderr(predicate::str::contains("Validation failed with 1 error(s)"));
}

#[test]
fn check_file_with_missing_and_extra_fields() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("settings.json")
        .write_str(
            r#"{
                "production": false,
                "apiServerUrl": "http://127.0.0.1:5000",
                "debug": true,
                "auth": { "domainPrefix": "tenant.us", "audience": "http://127.0.0.1:5000/" }
            }"#,
        )
        .unwrap();

    brewenv()
        .current_dir(dir.path())
        .args(["check", "settings.json"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Missing fields (2)"))
        .stdout(predicate::str::contains("auth.callbackURL"))
        .stdout(predicate::str::contains("auth.clientId"))
        .stdout(predicate::str::contains("Unexpected fields (1)"))
        .stdout(predicate::str::contains("debug"))
        .stderr(predicate::str::contains("Settings shape mismatch"));
}

#[test]
fn check_dotenv_file_passes() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child(".env")
        .write_str(
            "PRODUCTION=false\n\
             API_SERVER_URL=http://127.0.0.1:5000\n\
             AUTH_DOMAIN_PREFIX=dev-y4dtlj6thn26xy28.us\n\
             AUTH_AUDIENCE=http://127.0.0.1:5000/\n\
             AUTH_CLIENT_ID=J47SjndQpDdq9aXNEWGGDezCWzbiXru0\n\
             AUTH_CALLBACK_URL=http://localhost:8100\n",
        )
        .unwrap();

    brewenv()
        .current_dir(dir.path())
        .args(["check", ".env"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No issues found"));
}

#[test]
fn check_file_with_both_auth_groups_fails() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("settings.json")
        .write_str(
            r#"{
                "production": false,
                "apiServerUrl": "http://127.0.0.1:5000",
                "auth": {
                    "domainPrefix": "a.us", "audience": "http://127.0.0.1:5000/",
                    "clientId": "abc", "callbackURL": "http://localhost:8100"
                },
                "auth0": {
                    "url": "b.eu", "audience": "http://127.0.0.1:5000/",
                    "clientId": "def", "callbackURL": "http://localhost:8100"
                }
            }"#,
        )
        .unwrap();

    brewenv()
        .current_dir(dir.path())
        .args(["check", "settings.json"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Unexpected fields (4)"))
        .stdout(predicate::str::contains("auth0.url"))
        .stderr(predicate::str::contains("Settings shape mismatch"));
}

#[test]
fn check_file_with_string_production_flag_fails() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("settings.toml")
        .write_str(
            "production = \"true\"\n\
             apiServerUrl = \"http://127.0.0.1:5000\"\n\n\
             [auth]\n\
             domainPrefix = \"tenant.us\"\n\
             audience = \"http://127.0.0.1:5000/\"\n\
             clientId = \"abc\"\n\
             callbackURL = \"http://localhost:8100\"\n",
        )
        .unwrap();

    brewenv()
        .current_dir(dir.path())
        .args(["check", "settings.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid value for production"))
        .stderr(predicate::str::contains("expected a boolean, got a string"));
}

#[test]
fn check_missing_file_fails() {
    let dir = assert_fs::TempDir::new().unwrap();

    brewenv()
        .current_dir(dir.path())
        .args(["check", "missing.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

// ─── Diff command ───────────────────────────────────────────────

#[test]
fn diff_builtins_shows_only_production_flag() {
    let dir = assert_fs::TempDir::new().unwrap();

    brewenv()
        .current_dir(dir.path())
        .args(["diff", "--env", "development", "--env", "production"])
        .assert()
        .success()
        .stdout(predicate::str::contains("production"))
        .stdout(predicate::str::contains("false → true"))
        .stdout(predicate::str::contains("1 field(s) differ"));
}

#[test]
fn diff_same_environment_has_no_differences() {
    let dir = assert_fs::TempDir::new().unwrap();

    brewenv()
        .current_dir(dir.path())
        .args(["diff", "--env", "dev", "--env", "development"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No differences"));
}

#[test]
fn diff_custom_environment_lists_changed_urls() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("brewenv.toml")
        .write_str(
            "[environments.staging]\n\
             inherits = \"production\"\n\
             api_server_url = \"https://api.staging.example\"\n",
        )
        .unwrap();

    brewenv()
        .current_dir(dir.path())
        .args(["diff", "--env", "production", "--env", "staging"])
        .assert()
        .success()
        .stdout(predicate::str::contains("apiServerUrl"))
        .stdout(predicate::str::contains("https://api.staging.example"))
        .stdout(predicate::str::contains("1 field(s) differ"));
}

#[test]
fn diff_requires_two_environments() {
    let dir = assert_fs::TempDir::new().unwrap();

    brewenv()
        .current_dir(dir.path())
        .args(["diff", "--env", "development"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exactly two environments"));
}
