//! CLI integration tests for ascbin
//!
//! Tests the binary as a user would interact with it.

use assert_cmd::Command;
use predicates::prelude::*;

fn ascbin() -> Command {
    let mut cmd = Command::cargo_bin("ascbin").unwrap();
    cmd.env("NO_COLOR", "1");
    cmd
}

// ============================================================================
// Basic Commands
// ============================================================================

#[test]
fn test_help() {
    ascbin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("printable ASCII"));
}

#[test]
fn test_version() {
    ascbin()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("ascbin"));
}

#[test]
fn test_missing_subcommand() {
    ascbin().assert().failure();
}

// ============================================================================
// Encoding
// ============================================================================

#[test]
fn test_encode_plain_text_unchanged() {
    ascbin()
        .arg("encode")
        .write_stdin("Hello")
        .assert()
        .success()
        .stdout("Hello\n");
}

#[test]
fn test_encode_marker_in_text() {
    ascbin()
        .arg("encode")
        .write_stdin("a`b")
        .assert()
        .success()
        .stdout("a``&#`b\n");
}

#[test]
fn test_encode_units() {
    ascbin()
        .args(["encode", "--units"])
        .write_stdin("8192")
        .assert()
        .success()
        .stdout("``#~\n");
}

#[test]
fn test_encode_units_alternating() {
    ascbin()
        .args(["encode", "-u"])
        .write_stdin("1 100\n1 100\n")
        .assert()
        .success()
        .stdout("!``+!! +!\n");
}

#[test]
fn test_encode_units_digits_charset() {
    ascbin()
        .args(["encode", "-u", "-c", "digits"])
        .write_stdin("0 9 10 99 100 5")
        .assert()
        .success()
        .stdout("09##0199###001#5\n");
}

#[test]
fn test_encode_invalid_unit() {
    ascbin()
        .args(["encode", "--units"])
        .write_stdin("12 abc")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid unit 'abc'"));
}

#[test]
fn test_encode_unit_overflow() {
    ascbin()
        .args(["encode", "--units", "-c", "hex"])
        .write_stdin("1152921504606846976")
        .assert()
        .failure()
        .stderr(predicate::str::contains("1152921504606846976"));
}

#[test]
fn test_encode_to_file() {
    let dir = std::env::temp_dir().join(format!("ascbin-cli-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let output = dir.join("encoded.txt");

    ascbin()
        .args(["encode", "-u", "-o"])
        .arg(&output)
        .write_stdin("8192")
        .assert()
        .success()
        .stdout("");

    assert_eq!(std::fs::read(&output).unwrap(), b"``#~");
    std::fs::remove_dir_all(&dir).unwrap();
}

// ============================================================================
// Decoding
// ============================================================================

#[test]
fn test_decode_text() {
    ascbin()
        .arg("decode")
        .write_stdin("na``[$`ve caf``U$\n")
        .assert()
        .success()
        .stdout("naïve café");
}

#[test]
fn test_decode_units() {
    ascbin()
        .args(["decode", "--units"])
        .write_stdin("``+!! ! +!")
        .assert()
        .success()
        .stdout("100 1 1 100\n");
}

#[test]
fn test_decode_non_canonical_notice() {
    ascbin()
        .args(["decode", "--units"])
        .write_stdin("``  ")
        .assert()
        .success()
        .stdout("0\n")
        .stderr(predicate::str::contains("not in canonical form"));
}

#[test]
fn test_decode_quiet_suppresses_notice() {
    ascbin()
        .args(["--quiet", "decode", "--units"])
        .write_stdin("``  ")
        .assert()
        .success()
        .stdout("0\n")
        .stderr("");
}

#[test]
fn test_decode_canonical_has_no_notice() {
    ascbin()
        .args(["decode", "--units"])
        .write_stdin("``!!`!")
        .assert()
        .success()
        .stdout("92 1\n")
        .stderr("");
}

#[test]
fn test_decode_text_that_cannot_reencode() {
    let dir = std::env::temp_dir().join(format!("ascbin-reencode-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("small.toml");
    std::fs::write(
        &path,
        "[charsets.small]\nchars = \"abc\"\nmarker = \"#\"\nmax_code_length = 10\n",
    )
    .unwrap();

    // 55299 = 0xD800 + 3, a surrogate once shifted back: decodes to U+FFFD,
    // which is too large to re-encode with this charset
    let encoded = ascbin()
        .arg("--charsets")
        .arg(&path)
        .args(["encode", "-u", "-c", "small"])
        .write_stdin("55299")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    ascbin()
        .arg("--charsets")
        .arg(&path)
        .args(["decode", "-c", "small"])
        .write_stdin(encoded)
        .assert()
        .success()
        .stdout("\u{FFFD}")
        .stderr(predicate::str::contains("not in canonical form"));

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_roundtrip_text() {
    let text = "héllo 日本語 🎉";
    let encoded = ascbin()
        .arg("encode")
        .write_stdin(text)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert_eq!(encoded, "h``U$`llo ```^0$84${<%   <K1\n".as_bytes());

    ascbin()
        .arg("decode")
        .write_stdin(encoded)
        .assert()
        .success()
        .stdout(text);
}

#[test]
fn test_roundtrip_units_every_charset() {
    for charset in ["default", "filename", "url", "digits", "hex"] {
        let units = "0 1 255 65535 4294967295 7 7 7";
        let encoded = ascbin()
            .args(["encode", "-u", "-c", charset])
            .write_stdin(units)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        ascbin()
            .args(["decode", "-u", "-c", charset])
            .write_stdin(encoded)
            .assert()
            .success()
            .stdout(format!("{}\n", units));
    }
}

// ============================================================================
// Charsets
// ============================================================================

#[test]
fn test_config_list() {
    ascbin()
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("default"))
        .stdout(predicate::str::contains("filename"))
        .stdout(predicate::str::contains("base-91"));
}

#[test]
fn test_config_list_json() {
    let output = ascbin()
        .args(["config", "list", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let charsets = json["charsets"].as_array().unwrap();
    let default = charsets
        .iter()
        .find(|charset| charset["name"] == "default")
        .unwrap();
    assert_eq!(default["radix"], 91);
    assert_eq!(default["marker"], "`");
    assert_eq!(default["max_code_length"], 9);
}

#[test]
fn test_config_show() {
    ascbin()
        .args(["config", "show", "hex"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Radix: 16"))
        .stdout(predicate::str::contains("Marker: x"))
        .stdout(predicate::str::contains("Max unit: 1152921504606846975"));
}

#[test]
fn test_unknown_charset_suggestion() {
    ascbin()
        .args(["encode", "-c", "digts"])
        .write_stdin("1")
        .assert()
        .failure()
        .stderr(predicate::str::contains("charset 'digts' not found"))
        .stderr(predicate::str::contains("did you mean 'digits'?"));
}

#[test]
fn test_custom_charsets_file() {
    let dir = std::env::temp_dir().join(format!("ascbin-charsets-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("extra.toml");
    std::fs::write(
        &path,
        "[charsets.ab]\nchars = \"ab\"\nmarker = \"#\"\nmax_code_length = 8\n",
    )
    .unwrap();

    ascbin()
        .arg("--charsets")
        .arg(&path)
        .args(["encode", "-u", "-c", "ab"])
        .write_stdin("3")
        .assert()
        .success()
        .stdout("##bb\n");

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_invalid_custom_charset() {
    let dir = std::env::temp_dir().join(format!("ascbin-invalid-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("bad.toml");
    std::fs::write(&path, "[charsets.bad]\nchars = \"abc\"\nmarker = \"a\"\n").unwrap();

    ascbin()
        .arg("--charsets")
        .arg(&path)
        .args(["encode", "-c", "bad"])
        .write_stdin("x")
        .assert()
        .failure()
        .stderr(predicate::str::contains("marker"));

    std::fs::remove_dir_all(&dir).unwrap();
}

// ============================================================================
// Demo
// ============================================================================

#[test]
fn test_demo() {
    ascbin()
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("8192:    ```# !"))
        .stdout(predicate::str::contains("gshake+4fsize-4jexsize+2+4"));
}
