//! End-to-end submit tests against a mocked auth service.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test(flavor = "multi_thread")]
async fn test_login_success() {
    let home = tempdir().unwrap();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(serde_json::json!({
            "email": "test@example.com",
            "password": "testPassword123",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "message": "Login successful",
            "user": {"id": 1, "username": "testuser", "email": "test@example.com"},
        })))
        .mount(&server)
        .await;

    cargo_bin_cmd!("portico")
        .env("PORTICO_HOME", home.path())
        .env("PORTICO_BASE_URL", server.uri())
        .args([
            "login",
            "--email",
            "test@example.com",
            "--password",
            "testPassword123",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Login succeeded."));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_login_rejected_surfaces_server_message() {
    let home = tempdir().unwrap();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "success": false,
            "message": "Invalid credentials",
        })))
        .mount(&server)
        .await;

    cargo_bin_cmd!("portico")
        .env("PORTICO_HOME", home.path())
        .env("PORTICO_BASE_URL", server.uri())
        .args(["login", "--email", "test@example.com", "--password", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid credentials"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_signup_success() {
    let home = tempdir().unwrap();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/signup"))
        .and(body_json(serde_json::json!({
            "username": "testuser",
            "email": "test@example.com",
            "password": "testPassword123",
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"success": true})),
        )
        .mount(&server)
        .await;

    cargo_bin_cmd!("portico")
        .env("PORTICO_HOME", home.path())
        .env("PORTICO_BASE_URL", server.uri())
        .args([
            "signup",
            "--username",
            "testuser",
            "--email",
            "test@example.com",
            "--password",
            "testPassword123",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Signup succeeded."));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_signup_duplicate_email_rejected() {
    let home = tempdir().unwrap();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/signup"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "success": false,
            "message": "Email already exists",
        })))
        .mount(&server)
        .await;

    cargo_bin_cmd!("portico")
        .env("PORTICO_HOME", home.path())
        .env("PORTICO_BASE_URL", server.uri())
        .args([
            "signup",
            "--username",
            "testuser",
            "--email",
            "taken@example.com",
            "--password",
            "testPassword123",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Email already exists"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_env_base_url_beats_config() {
    // Config points at a dead port; the env var must win.
    let home = tempdir().unwrap();
    std::fs::write(
        home.path().join("config.toml"),
        "base_url = \"http://127.0.0.1:9\"\n",
    )
    .unwrap();

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"success": true})),
        )
        .mount(&server)
        .await;

    cargo_bin_cmd!("portico")
        .env("PORTICO_HOME", home.path())
        .env("PORTICO_BASE_URL", server.uri())
        .args(["login", "--email", "a@b.c", "--password", "pw"])
        .assert()
        .success();
}

#[tokio::test(flavor = "multi_thread")]
async fn test_unreachable_service_reports_request_failure() {
    let home = tempdir().unwrap();

    cargo_bin_cmd!("portico")
        .env("PORTICO_HOME", home.path())
        .env("PORTICO_BASE_URL", "http://127.0.0.1:9")
        .args(["login", "--email", "a@b.c", "--password", "pw"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Request to"));
}
