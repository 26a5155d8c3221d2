mod common;

use common::TestFixture;
use predicates::prelude::*;
use serde_json::json;

#[test]
fn dump_defaults_to_hex_in_plain_text() {
    let fixture = TestFixture::new();
    let file = fixture.write("sample.bin", b"Hi\n");

    let out = fixture.stdout(&["dump", file.to_str().unwrap()]);
    insta::assert_snapshot!(out, @r"
    - sample.bin:
      size: 3
      offset: 0
      length: 3
      bytes:
        0: 48
        1: 69
        2: 0A
    ");
}

#[test]
fn dump_as_json() {
    let fixture = TestFixture::new();
    let file = fixture.write("sample.bin", b"Hi\n");

    let parsed = fixture.json(&["dump", file.to_str().unwrap(), "--unsigned", "--hex"]);
    assert_eq!(
        parsed,
        json!([{"sample.bin": {
            "size": 3,
            "offset": 0,
            "length": 3,
            "bytes": {"0": "48 72", "1": "69 105", "2": "0A 10"}
        }}])
    );
}

#[test]
fn dump_swapped_half_words_as_yaml() {
    let fixture = TestFixture::new();
    let file = fixture.write("words.bin", [0x12u8, 0x34, 0xAB, 0xCD, 0xFF]);

    let parsed = fixture.yaml(&[
        "dump",
        file.to_str().unwrap(),
        "--width",
        "16",
        "--unsigned",
        "--swap",
        "half-word",
    ]);
    assert_eq!(
        parsed,
        json!([{"words.bin": {
            "size": 5,
            "offset": 0,
            "length": 5,
            "bytes": {"0": "4660", "1": "43981"}
        }}])
    );
}

#[test]
fn dump_warns_about_partial_words() {
    let fixture = TestFixture::new();
    let file = fixture.write("odd.bin", [1u8, 2, 3]);

    fixture
        .command()
        .args(["dump", file.to_str().unwrap(), "--width", "16"])
        .assert()
        .success()
        .stderr(predicate::str::contains("warning: ignoring 1 trailing byte(s)"));
}

#[test]
fn dump_window_with_char_column() {
    let fixture = TestFixture::new();
    let file = fixture.write("sample.bin", b"Hi\n");

    let out = fixture.stdout(&[
        "dump",
        file.to_str().unwrap(),
        "--offset",
        "1",
        "--length",
        "2",
        "--char",
    ]);
    assert!(out.contains("  length: 2\n"), "{out}");
    assert!(out.contains("    0: i\n"), "{out}");
    assert!(out.contains("    1: \\n\n"), "{out}");
}

#[test]
fn dump_rejects_window_outside_file() {
    let fixture = TestFixture::new();
    let file = fixture.write("sample.bin", b"Hi\n");

    fixture
        .command()
        .args(["dump", file.to_str().unwrap(), "--offset", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("requested window does not fit the file"));
}

#[test]
fn dump_respects_output_level() {
    let fixture = TestFixture::new();
    let file = fixture.write("sample.bin", b"Hi\n");

    fixture
        .command()
        .args(["dump", file.to_str().unwrap(), "--level", "warning"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn dump_uses_configured_columns() {
    let fixture = TestFixture::new();
    std::fs::write(
        fixture.config_path(),
        "[dump]\nhex = false\nsigned = true\n",
    )
    .unwrap();
    let file = fixture.write("neg.bin", [0xFFu8]);

    let parsed = fixture.json(&["dump", file.to_str().unwrap()]);
    assert_eq!(parsed[0]["neg.bin"]["bytes"]["0"], json!("-1"));
}
