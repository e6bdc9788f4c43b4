//! End-to-end tests for the `tplc` binary

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn tplc(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tplc").expect("binary built");
    cmd.current_dir(dir.path()).env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_list_shows_builtin_views() {
    let dir = TempDir::new().unwrap();
    tplc(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("faq_body"))
        .stdout(predicate::str::contains("viewtopic_print"))
        .stdout(predicate::str::contains("acp_forums"));
}

#[test]
fn test_render_with_yaml_context() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("ctx.yml"),
        "SITENAME: Example Board\nMESSAGE_TITLE: Information\nMESSAGE_TEXT: Your post was saved.\n",
    )
    .unwrap();

    tplc(&dir)
        .args(["render", "message_body", "-x", "ctx.yml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<h2 class=\"message-title\">Information</h2>"))
        .stdout(predicate::str::contains("<p>Your post was saved.</p>"))
        .stdout(predicate::str::contains("Example Board"));
}

#[test]
fn test_render_to_output_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("ctx.json"), r#"{"TOPIC_TITLE": "Printed", "postrow": [{"MESSAGE": "body"}]}"#).unwrap();

    tplc(&dir)
        .args(["render", "viewtopic_print", "--context", "ctx.json", "-o", "out.html"])
        .assert()
        .success();

    let html = fs::read_to_string(dir.path().join("out.html")).unwrap();
    assert!(html.contains("<h2>Printed</h2>"));
    assert!(html.contains("<div class=\"content\">body</div>"));
}

#[test]
fn test_render_unknown_view_fails() {
    let dir = TempDir::new().unwrap();
    tplc(&dir)
        .args(["render", "no_such_view"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("View not found: no_such_view"));
}

#[test]
fn test_render_missing_context_file_fails() {
    let dir = TempDir::new().unwrap();
    tplc(&dir)
        .args(["render", "faq_body", "-x", "absent.yml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("absent.yml"));
}

#[test]
fn test_lookup_reports_each_tier() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("ctx.yml"), "SITENAME: Example Board\n").unwrap();

    tplc(&dir)
        .args(["lookup", "SITENAME", "-x", "ctx.yml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("context"))
        .stdout(predicate::str::contains("Example Board"));

    tplc(&dir)
        .args(["lookup", "L_FAQ"])
        .assert()
        .success()
        .stdout(predicate::str::contains("lexicon"))
        .stdout(predicate::str::contains("FAQ"));

    tplc(&dir)
        .args(["lookup", "L_NOT_A_STRING"])
        .assert()
        .success()
        .stdout(predicate::str::contains("placeholder"))
        .stdout(predicate::str::contains("{ NOT_A_STRING }"));
}

#[test]
fn test_repo_language_file_overrides_embedded() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("lang")).unwrap();
    fs::write(dir.path().join("lang/en.yml"), "FAQ: Help\n").unwrap();

    tplc(&dir)
        .args(["lookup", "L_FAQ"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Help"));
}

#[test]
fn test_config_locale_and_unknown_language() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("tplcache.yml"), "locale: zz\n").unwrap();

    tplc(&dir)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Language not found: zz"));
}

#[test]
fn test_config_disables_partial_markers() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("tplcache.yml"),
        "render:\n  max_include_depth: 1\n  mark_missing_partials: false\n",
    )
    .unwrap();

    tplc(&dir)
        .args(["render", "faq_body"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<!--").not())
        .stdout(predicate::str::contains("<h2>Frequently Asked Questions</h2>"));
}

#[test]
fn test_invalid_config_file_is_reported() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("tplcache.yml"), "render: [not, a, map]\n").unwrap();

    tplc(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("faq_body"))
        .stderr(predicate::str::contains("Failed to load config from tplcache.yml"));
}

#[test]
fn test_lang_dir_keeps_user_override() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("tplcache.yml"), "lang_dir: mylang\n").unwrap();
    fs::create_dir_all(dir.path().join("mylang")).unwrap();
    fs::write(dir.path().join("mylang/en.yml"), "FAQ: Repo FAQ\nLOGIN: Repo Login\n").unwrap();
    fs::create_dir_all(dir.path().join(".tplcache/lang")).unwrap();
    fs::write(dir.path().join(".tplcache/lang/en.yml"), "FAQ: User FAQ\n").unwrap();

    tplc(&dir)
        .args(["lookup", "L_FAQ"])
        .assert()
        .success()
        .stdout(predicate::str::contains("User FAQ"));

    tplc(&dir)
        .args(["lookup", "L_LOGIN"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Repo Login"));
}

#[test]
fn test_failed_render_leaves_no_output_file() {
    let dir = TempDir::new().unwrap();
    tplc(&dir)
        .args(["render", "no_such_view", "-o", "out.html"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("View not found: no_such_view"));

    assert!(!dir.path().join("out.html").exists());
}
