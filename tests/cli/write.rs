//! Tests for `signpost write`.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_write_creates_key_properties() {
    let t = Test::new();
    t.write_keystore("app/release.jks", JKS_HEADER);

    let output = t.write("release.jks", "smart-diary", "sA", "kA");
    assert_success(&output);
    assert_stdout_contains(&output, "wrote");

    let contents = t.read("key.properties");
    assert!(contents.contains("storePassword=sA"));
    assert!(contents.contains("keyPassword=kA"));
    assert!(contents.contains("keyAlias=smart-diary"));
    assert!(contents.contains("storeFile=release.jks"));

    let value = t.resolve_json(&["--reveal"]);
    assert_eq!(value["identity"], "production");
    assert_eq!(value["storePassword"], "sA");
    assert_eq!(value["keyPassword"], "kA");
}

#[test]
fn test_write_refuses_overwrite() {
    let t = Test::with_release_key();

    let output = t.write("release.jks", "other", "sA", "kA");
    assert_failure(&output);
    assert_stderr_contains(&output, "already exists");
    assert!(t.read("key.properties").contains("keyAlias=smart-diary"));
}

#[test]
fn test_write_force_overwrites() {
    let t = Test::with_release_key();

    t.cmd()
        .args([
            "write",
            "--store-file",
            "release.jks",
            "--alias",
            "other",
            "--store-password",
            "sA",
            "--force",
        ])
        .assert()
        .success();

    assert!(t.read("key.properties").contains("keyAlias=other"));
}

#[test]
fn test_write_key_password_defaults_to_store_password() {
    let t = Test::new();
    t.write_keystore("app/release.jks", JKS_HEADER);

    t.cmd()
        .args([
            "write",
            "--store-file",
            "release.jks",
            "--alias",
            "a",
            "--store-password",
            "same",
        ])
        .assert()
        .success();

    let value = t.resolve_json(&["--reveal"]);
    assert_eq!(value["keyPassword"], "same");
}

#[test]
fn test_write_passwords_from_env() {
    let t = Test::new();
    t.write_keystore("app/release.jks", JKS_HEADER);

    t.cmd()
        .env("SIGNPOST_STORE_PASSWORD", "env-store")
        .env("SIGNPOST_KEY_PASSWORD", "env-key")
        .args(["write", "--store-file", "release.jks", "--alias", "a"])
        .assert()
        .success();

    let value = t.resolve_json(&["--reveal"]);
    assert_eq!(value["storePassword"], "env-store");
    assert_eq!(value["keyPassword"], "env-key");
}

#[test]
fn test_write_without_password_non_interactive_fails() {
    let t = Test::new();

    t.cmd()
        .args(["write", "--store-file", "release.jks", "--alias", "a"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("keystore password required"));

    assert!(!t.path("key.properties").exists());
}

#[test]
fn test_write_warns_about_missing_keystore() {
    let t = Test::new();

    let output = t.write("missing.jks", "a", "sA", "kA");
    assert_success(&output);
    assert_stdout_contains(&output, "keystore not found");
    assert!(t.path("key.properties").exists());
}

#[test]
fn test_write_escapes_special_characters() {
    let t = Test::new();
    t.write_keystore("app/release.jks", JKS_HEADER);

    let output = t.write("release.jks", "a", " p=w:d#1!", "k\\ey");
    assert_success(&output);

    let value = t.resolve_json(&["--reveal"]);
    assert_eq!(value["storePassword"], " p=w:d#1!");
    assert_eq!(value["keyPassword"], "k\\ey");
}

#[cfg(unix)]
#[test]
fn test_write_sets_secure_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let t = Test::new();
    let output = t.write("release.jks", "a", "sA", "kA");
    assert_success(&output);

    let mode = std::fs::metadata(t.path("key.properties"))
        .unwrap()
        .permissions()
        .mode()
        & 0o777;
    assert_eq!(mode, 0o600);
}

#[test]
fn test_write_into_missing_project_fails() {
    let t = Test::new();

    t.cmd()
        .args([
            "--project",
            "does-not-exist",
            "write",
            "--store-file",
            "release.jks",
            "--alias",
            "a",
            "--store-password",
            "sA",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("project directory not found"));
}
