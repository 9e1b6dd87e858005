use predicates::str::contains;
use tempfile::TempDir;

#[path = "common/mod.rs"]
mod common;

#[test]
fn default_template_is_valid() {
    let td = TempDir::new().unwrap();
    common::wib(td.path())
        .args(["validate", "feature/${System.Id}-${System.Title}"])
        .assert()
        .success()
        .stdout(contains("Template is valid."));
}

#[test]
fn malformed_template_is_rejected() {
    let td = TempDir::new().unwrap();
    common::wib(td.path())
        .args(["validate", "feature/${System.Id"])
        .assert()
        .failure()
        .stderr(contains("The template is invalid."));

    common::wib(td.path())
        .args(["validate", "feature/${System.Id}}"])
        .assert()
        .failure()
        .stderr(contains("should be equal"));
}

#[test]
fn unknown_fields_are_all_listed() {
    let td = TempDir::new().unwrap();
    common::wib(td.path())
        .args([
            "validate",
            "${A}/${B}/${C}",
            "--field",
            "A",
        ])
        .assert()
        .failure()
        .stderr(contains("WorkItem field 'B' does not exists."))
        .stderr(contains("WorkItem field 'C' does not exists."));
}

#[test]
fn known_fields_can_come_from_items() {
    let td = TempDir::new().unwrap();
    let items = common::write_items(td.path());
    common::wib(td.path())
        .args([
            "validate",
            "${Custom.Team}/${System.Id}",
            "--items",
            items.to_str().unwrap(),
        ])
        .assert()
        .success();
}
