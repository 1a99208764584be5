use assert_cmd::cargo::cargo_bin_cmd;
use assert_fs::prelude::*;
use predicates::prelude::*;

/// Run brewenv with a clean environment.
fn brewenv() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("brewenv");
    cmd.env_remove("BREWENV_ENV").env("NO_COLOR", "1");
    cmd
}

const STAGING_CONFIG: &str = r#"
[environments.staging]
inherits = "production"
api_server_url = "https://api.staging.example"

[environments.staging.auth]
callback_url = "https://app.staging.example"
"#;

// ─── Show command ───────────────────────────────────────────────

#[test]
fn show_development_lists_literals() {
    let dir = assert_fs::TempDir::new().unwrap();

    brewenv()
        .current_dir(dir.path())
        .args(["show", "--env", "development"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Environment: development (development)"))
        .stdout(predicate::str::contains("http://127.0.0.1:5000"))
        .stdout(predicate::str::contains("J47SjndQpDdq9aXNEWGGDezCWzbiXru0"));
}

#[test]
fn show_single_field_prints_raw_value() {
    let dir = assert_fs::TempDir::new().unwrap();

    brewenv()
        .current_dir(dir.path())
        .args(["show", "--env", "dev", "--field", "auth.audience"])
        .assert()
        .success()
        .stdout("http://127.0.0.1:5000/\n");

    brewenv()
        .current_dir(dir.path())
        .args(["show", "--env", "dev", "--field", "production"])
        .assert()
        .success()
        .stdout("false\n");
}

#[test]
fn show_unknown_field_fails() {
    let dir = assert_fs::TempDir::new().unwrap();

    brewenv()
        .current_dir(dir.path())
        .args(["show", "--field", "auth.secret"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown field"));
}

#[test]
fn show_reads_env_from_environment_variable() {
    let dir = assert_fs::TempDir::new().unwrap();

    brewenv()
        .current_dir(dir.path())
        .env("BREWENV_ENV", "production")
        .args(["show", "--field", "production"])
        .assert()
        .success()
        .stdout("true\n");
}

#[test]
fn show_custom_environment_applies_overlay() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("brewenv.toml").write_str(STAGING_CONFIG).unwrap();

    brewenv()
        .current_dir(dir.path())
        .args(["show", "--env", "staging"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Inherits: production -> staging"))
        .stdout(predicate::str::contains("https://api.staging.example"))
        .stdout(predicate::str::contains("https://app.staging.example"));
}

#[test]
fn show_unknown_environment_fails() {
    let dir = assert_fs::TempDir::new().unwrap();

    brewenv()
        .current_dir(dir.path())
        .args(["show", "--env", "qa"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Environment 'qa' not found"))
        .stderr(predicate::str::contains("development, production"));
}

#[test]
fn explicit_missing_config_fails() {
    let dir = assert_fs::TempDir::new().unwrap();

    brewenv()
        .current_dir(dir.path())
        .args(["show", "--config", "nope.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

// ─── Export command ─────────────────────────────────────────────

#[test]
fn export_json_to_stdout() {
    let dir = assert_fs::TempDir::new().unwrap();

    let output = brewenv()
        .current_dir(dir.path())
        .args(["export", "--env", "development", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["production"], false);
    assert_eq!(json["apiServerUrl"], "http://127.0.0.1:5000");
    assert_eq!(json["auth"]["audience"], "http://127.0.0.1:5000/");
    assert_eq!(json["auth"].as_object().unwrap().len(), 4);
    assert_eq!(json.as_object().unwrap().len(), 3);
}

#[test]
fn export_typescript_to_file() {
    let dir = assert_fs::TempDir::new().unwrap();

    brewenv()
        .current_dir(dir.path())
        .args([
            "export",
            "--env",
            "production",
            "--format",
            "ts",
            "--output",
            "src/environments/environment.prod.ts",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported production as ts"));

    dir.child("src/environments/environment.prod.ts")
        .assert(predicate::str::starts_with("export const environment = {"))
        .assert(predicate::str::contains("production: true,"));
}

#[test]
fn export_dotenv_uses_variable_names() {
    let dir = assert_fs::TempDir::new().unwrap();

    brewenv()
        .current_dir(dir.path())
        .args(["export", "--env", "dev", "-f", "dotenv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("API_SERVER_URL=\"http://127.0.0.1:5000\"\n"))
        .stdout(predicate::str::contains("AUTH_CALLBACK_URL=\"http://localhost:8100\"\n"));
}

#[test]
fn exported_dotenv_passes_check() {
    let dir = assert_fs::TempDir::new().unwrap();

    brewenv()
        .current_dir(dir.path())
        .args(["export", "--env", "dev", "--format", "dotenv", "-o", ".env"])
        .assert()
        .success();

    brewenv()
        .current_dir(dir.path())
        .args(["check", ".env"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No issues found"));
}

#[test]
fn export_unknown_format_fails() {
    let dir = assert_fs::TempDir::new().unwrap();

    brewenv()
        .current_dir(dir.path())
        .args(["export", "--format", "yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported format 'yaml'"));
}

#[test]
fn exported_file_passes_check() {
    let dir = assert_fs::TempDir::new().unwrap();

    brewenv()
        .current_dir(dir.path())
        .args(["export", "--env", "dev", "--format", "toml", "-o", "dev.toml"])
        .assert()
        .success();

    brewenv()
        .current_dir(dir.path())
        .args(["check", "dev.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Shape matches"))
        .stdout(predicate::str::contains("No issues found"));
}
