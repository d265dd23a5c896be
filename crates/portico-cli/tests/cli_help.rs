use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help_lists_subcommands() {
    cargo_bin_cmd!("portico")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("login"))
        .stdout(predicate::str::contains("signup"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_login_help_shows_required_args() {
    cargo_bin_cmd!("portico")
        .args(["login", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--email"))
        .stdout(predicate::str::contains("--password"));
}

#[test]
fn test_signup_requires_username() {
    cargo_bin_cmd!("portico")
        .args(["signup", "--email", "a@b.c", "--password", "pw"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--username"));
}
