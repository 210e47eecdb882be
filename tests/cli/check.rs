//! Tests for `signpost check`.

use crate::support::*;

#[test]
fn test_check_release_key() {
    let t = Test::with_release_key();

    let output = t.check();
    assert_success(&output);
    assert_stdout_contains(&output, "release signing with key smart-diary");
    assert_stdout_contains(&output, "JKS keystore");
}

#[test]
fn test_check_warns_when_not_gitignored() {
    let t = Test::with_release_key();

    let output = t.check();
    assert_success(&output);
    assert_stdout_contains(&output, "not listed in .gitignore");
}

#[test]
fn test_check_respects_gitignore() {
    let t = Test::with_release_key();
    std::fs::write(t.path(".gitignore"), "gradle-wrapper.jar\n/.gradle\nkey.properties\n").unwrap();

    let output = t.check();
    assert_success(&output);
    assert_stdout_excludes(&output, ".gitignore");
}

#[test]
fn test_check_respects_gitignore_glob() {
    let t = Test::with_release_key();
    std::fs::write(t.path(".gitignore"), "/.gradle\n**/*.properties\n").unwrap();

    let output = t.check();
    assert_success(&output);
    assert_stdout_excludes(&output, ".gitignore");
}

#[test]
fn test_check_accepts_cr_line_endings() {
    let t = Test::new();
    t.write_keystore("app/release.jks", JKS_HEADER);
    t.write_properties(&RELEASE_PROPERTIES.replace('\n', "\r"));

    let output = t.check();
    assert_success(&output);
    assert_stdout_contains(&output, "release signing with key smart-diary");
}

#[test]
fn test_check_without_properties_warns() {
    let t = Test::new();

    let output = t.check();
    assert_success(&output);
    assert_stdout_contains(&output, "release builds use debug signing");
}

#[test]
fn test_check_strict_without_properties_fails() {
    let t = Test::new();

    let output = t.check_strict();
    assert_failure(&output);
    assert_stderr_contains(&output, "no release keystore configured");
    assert_stderr_contains(&output, "signpost write");
}

#[test]
fn test_check_settings_require_production() {
    let t = Test::new();
    t.write_settings("require_production = true\n");

    let output = t.check();
    assert_failure(&output);
}

#[test]
fn test_check_missing_alias_fails_with_hint() {
    let t = Test::new();
    t.write_keystore("app/release.jks", JKS_HEADER);
    t.write_properties(MISSING_ALIAS_PROPERTIES);

    let output = t.check();
    assert_failure(&output);
    assert_stderr_contains(&output, "keyAlias");
    assert_stderr_contains(&output, "needs storeFile, storePassword, keyAlias and keyPassword");
}

#[test]
fn test_check_empty_value_fails() {
    let t = Test::new();
    t.write_keystore("app/release.jks", JKS_HEADER);
    t.write_properties("storeFile=release.jks\nstorePassword=\nkeyAlias=a\nkeyPassword=k\n");

    let output = t.check();
    assert_failure(&output);
    assert_stderr_contains(&output, "'storePassword' has an empty value");
}

#[test]
fn test_check_malformed_escape_fails() {
    let t = Test::new();
    t.write_properties("storeFile=release.jks\nstorePassword=\\u00\nkeyAlias=a\nkeyPassword=k\n");

    let output = t.check();
    assert_failure(&output);
    assert_stderr_contains(&output, "line 2");
}

#[test]
fn test_check_keystore_is_directory_fails() {
    let t = Test::new();
    std::fs::create_dir_all(t.path("app/release.jks")).unwrap();
    t.write_properties(RELEASE_PROPERTIES);

    let output = t.check();
    assert_failure(&output);
    assert_stderr_contains(&output, "not readable");
}

#[test]
fn test_check_invalid_settings_fails() {
    let t = Test::with_release_key();
    t.write_settings("unknown_field = 1\n");

    let output = t.check();
    assert_failure(&output);
    assert_stderr_contains(&output, "settings");
}
