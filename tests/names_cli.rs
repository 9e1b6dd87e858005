use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use tempfile::TempDir;

#[path = "common/mod.rs"]
mod common;

#[test]
fn help_lists_subcommands() {
    let td = TempDir::new().unwrap();
    common::wib(td.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("names").and(contains("validate")).and(contains("create")));
}

#[test]
fn names_use_default_templates() {
    let td = TempDir::new().unwrap();
    let items = common::write_items(td.path());

    common::wib(td.path())
        .args(["names", "--items", items.to_str().unwrap()])
        .assert()
        .success()
        .stdout(contains("feature/42-Fix_login_bug"))
        .stdout(contains("[Bug 42] Fix login bug"))
        .stdout(contains("feature/7-Crash_on_load"))
        .stdout(contains("[Task 7] Crash on load"));
}

#[test]
fn names_json_reports_prefix_and_body() {
    let td = TempDir::new().unwrap();
    let items = common::write_items(td.path());
    let settings = common::write_settings(
        td.path(),
        r#"{
          "defaultPullRequestNameTemplate": "[${System.WorkItemType} ${System.Id}]|${System.Title}",
          "branchNameTemplates": {
            "Task": { "isActive": true, "value": "${Custom.Team}/|${System.Id} ${System.Title}" }
          },
          "lowercaseBranchName": true
        }"#,
    );

    let out = common::wib(td.path())
        .args(["--settings", settings.to_str().unwrap()])
        .args(["names", "--json", "--items", items.to_str().unwrap()])
        .output()
        .unwrap();
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();

    assert_eq!(v[0]["id"], 42);
    assert_eq!(v[0]["branch"]["body"], "feature/42-fix_login_bug");
    assert_eq!(v[0]["pullRequest"]["prefix"], "[Bug 42]");
    assert_eq!(v[0]["pullRequest"]["body"], "Fix login bug");

    assert_eq!(v[1]["id"], 7);
    assert_eq!(v[1]["branch"]["prefix"], "Payments/");
    assert_eq!(v[1]["branch"]["body"], "7_crash_on_load");
}

#[test]
fn names_json_lists_missing_fields() {
    let td = TempDir::new().unwrap();
    let items = common::write_items(td.path());
    let settings = common::write_settings(
        td.path(),
        r#"{ "defaultBranchNameTemplate": "${Custom.Team}/${System.Id}" }"#,
    );

    let out = common::wib(td.path())
        .args(["--settings", settings.to_str().unwrap()])
        .args(["names", "--json", "--items", items.to_str().unwrap()])
        .output()
        .unwrap();
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v[0]["branch"]["body"], "/42");
    assert_eq!(v[0]["missingFields"][0], "Custom.Team");
    assert!(v[1].get("missingFields").is_none());
    assert!(String::from_utf8_lossy(&out.stderr).contains("missing fields"));
}

#[test]
fn names_show_target_state_when_enabled() {
    let td = TempDir::new().unwrap();
    let items = common::write_items(td.path());
    let settings = common::write_settings(
        td.path(),
        r#"{ "updateWorkItemState": true,
             "workItemState": { "Bug": { "isActive": true, "value": "Active" } } }"#,
    );

    common::wib(td.path())
        .args(["--settings", settings.to_str().unwrap()])
        .args(["names", "--items", items.to_str().unwrap()])
        .assert()
        .success()
        .stdout(contains("State:       Active"));
}

#[test]
fn edit_trims_prefix_for_pull_requests() {
    let td = TempDir::new().unwrap();
    common::wib(td.path())
        .args([
            "edit",
            "--kind",
            "pull-request",
            "--prefix",
            "[Bug 7]",
            "--value",
            "[Bug 7]Cra",
        ])
        .assert()
        .success()
        .stdout("Cra\n");
}

#[test]
fn edit_restricts_branch_bodies() {
    let td = TempDir::new().unwrap();
    let settings = common::write_settings(
        td.path(),
        r#"{ "lowercaseBranchName": true, "branchNameMaxLength": 6 }"#,
    );
    common::wib(td.path())
        .args(["--settings", settings.to_str().unwrap()])
        .args(["edit", "--prefix", "feature/", "--value", "feature/New Name"])
        .assert()
        .success()
        .stdout("new_na\n");
}

#[test]
fn settings_env_var_is_honoured() {
    let td = TempDir::new().unwrap();
    let items = common::write_items(td.path());
    let settings = common::write_settings(
        td.path(),
        r#"{ "defaultBranchNameTemplate": "wi/${System.Id}" }"#,
    );
    common::wib(td.path())
        .env("WIB_SETTINGS", &settings)
        .args(["names", "--items", items.to_str().unwrap()])
        .assert()
        .success()
        .stdout(contains("wi/42"));
}

#[test]
fn names_rejects_malformed_stored_template() {
    let td = TempDir::new().unwrap();
    let items = common::write_items(td.path());
    let settings = common::write_settings(
        td.path(),
        r#"{ "defaultBranchNameTemplate": "feature/${System.Id-${System.Title}}}" }"#,
    );

    common::wib(td.path())
        .args(["--settings", settings.to_str().unwrap()])
        .args(["names", "--json", "--items", items.to_str().unwrap()])
        .assert()
        .failure()
        .stdout("")
        .stderr(contains("defaultBranchNameTemplate: The template is invalid."));
}

#[test]
fn names_allow_unknown_fields_in_stored_templates() {
    let td = TempDir::new().unwrap();
    let items = common::write_items(td.path());
    let settings = common::write_settings(
        td.path(),
        r#"{ "defaultBranchNameTemplate": "${Custom.Nope}/${System.Id}" }"#,
    );

    common::wib(td.path())
        .args(["--settings", settings.to_str().unwrap()])
        .args(["names", "--items", items.to_str().unwrap()])
        .assert()
        .success()
        .stdout(contains("/42"));
}
