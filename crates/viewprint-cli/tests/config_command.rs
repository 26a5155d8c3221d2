mod common;

use assert_cmd::Command;
use common::TestFixture;
use predicates::prelude::*;
use serde_json::json;

#[test]
fn config_init_writes_defaults() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("created"));

    let content = std::fs::read_to_string(fixture.config_path()).unwrap();
    assert!(content.contains("[output]"));
    assert!(content.contains("[dump]"));
}

#[test]
fn config_init_refuses_to_overwrite_without_force() {
    let fixture = TestFixture::new();
    fixture.stdout(&["config", "init"]);

    fixture
        .command()
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    fixture.stdout(&["config", "init", "--force"]);
}

#[test]
fn config_init_force_repairs_broken_file() {
    let fixture = TestFixture::new();
    std::fs::write(fixture.config_path(), "this is = = not toml").unwrap();

    fixture
        .command()
        .args(["config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse config"));

    fixture.stdout(&["config", "init", "--force"]);
    fixture.stdout(&["config", "show"]);
}

#[test]
fn cli_options_override_config_file() {
    let fixture = TestFixture::new();
    std::fs::write(
        fixture.config_path(),
        "[output]\nformat = \"yaml\"\nlevel = \"debug\"\n",
    )
    .unwrap();

    let from_file: serde_json::Value =
        serde_yaml::from_str(&fixture.stdout(&["config", "show"])).unwrap();
    assert_eq!(from_file[2]["effective"]["output"]["format"], json!("yaml"));
    assert_eq!(from_file[2]["effective"]["output"]["level"], json!("debug"));

    let overridden = fixture.json(&["config", "show", "--level", "info"]);
    assert_eq!(overridden[1], json!({"exists": true}));
    assert_eq!(overridden[2]["effective"]["output"]["format"], json!("json"));
    assert_eq!(overridden[2]["effective"]["output"]["level"], json!("info"));
}

#[test]
fn config_show_respects_output_level() {
    let fixture = TestFixture::new();

    let quiet = fixture.json(&["config", "show", "--level", "warning"]);
    assert_eq!(quiet, json!([]));
}

#[test]
fn default_config_lives_under_home() {
    let fixture = TestFixture::new();

    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("viewprint").unwrap();
    cmd.env("HOME", fixture.root())
        .args(["config", "init"])
        .assert()
        .success();

    assert!(fixture.root().join(".viewprint").join("config.toml").exists());
}

#[test]
fn help_lists_commands() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("dump")
                .and(predicate::str::contains("json"))
                .and(predicate::str::contains("compare"))
                .and(predicate::str::contains("config")),
        );
}

#[test]
fn config_show_defaults_snapshot() {
    let fixture = TestFixture::new();

    let shown = fixture.json(&["config", "show"]);
    insta::assert_json_snapshot!(shown, { "[0].path" => "[path]" }, @r#"
    [
      {
        "path": "[path]"
      },
      {
        "exists": false
      },
      {
        "effective": {
          "dump": {
            "character": false,
            "hex": true,
            "signed": false,
            "unsigned": false,
            "width": 8
          },
          "output": {
            "bold_objects": true,
            "color": true,
            "format": "json",
            "key_color": "light blue",
            "level": "info",
            "log_level": "warning",
            "progress_width": 50
          }
        }
      }
    ]
    "#);
}
