//! Integration tests for the `config` command.

mod common;

use common::TestFixture;
use predicates::prelude::*;

// =============================================================================
// Config Validate Tests
// =============================================================================

#[test]
fn config_validate_valid_config() {
    let fixture = TestFixture::new();
    fixture.create_config("[chart]\ntitle = \"Sorting\"\ndpi = 150\n");

    bench_chart!()
        .current_dir(fixture.path())
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));
}

#[test]
fn config_validate_custom_path() {
    let fixture = TestFixture::new();
    fixture.create_file("custom.toml", "[output]\npath = \"chart.svg\"\n");

    bench_chart!()
        .current_dir(fixture.path())
        .args(["config", "validate", "custom.toml"])
        .assert()
        .success();
}

#[test]
fn config_validate_missing_file() {
    let fixture = TestFixture::new();

    bench_chart!()
        .current_dir(fixture.path())
        .args(["config", "validate", "--color", "never"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn config_validate_invalid_toml_syntax() {
    let fixture = TestFixture::new();
    fixture.create_config("[chart\ntitle = ");

    bench_chart!()
        .current_dir(fixture.path())
        .args(["config", "validate", "--color", "never"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("TOML"));
}

#[test]
fn config_validate_unknown_color() {
    let fixture = TestFixture::new();
    fixture.create_config("[chart]\npalette = [\"blurple\"]\n");

    bench_chart!()
        .current_dir(fixture.path())
        .args(["config", "validate", "--color", "never"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("blurple"));
}

// =============================================================================
// Config Show Tests
// =============================================================================

#[test]
fn config_show_defaults_with_no_config() {
    let fixture = TestFixture::new();

    bench_chart!()
        .current_dir(fixture.path())
        .args(["config", "show", "--no-config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Effective Configuration ==="))
        .stdout(predicate::str::contains("built-in defaults"))
        .stdout(predicate::str::contains("dpi = 200"));
}

#[test]
fn config_show_discovers_local_file() {
    let fixture = TestFixture::new();
    fixture.create_config("[chart]\ndpi = 300\n");

    bench_chart!()
        .current_dir(fixture.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dpi = 300"))
        .stdout(predicate::str::contains(".bench-chart.toml"));
}

#[test]
fn config_show_json() {
    let fixture = TestFixture::new();
    fixture.create_file("custom.toml", "[chart]\ngrid = false\n");

    let output = bench_chart!()
        .current_dir(fixture.path())
        .args(["config", "show", "--config", "custom.toml", "--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["chart"]["grid"], false);
    assert_eq!(json["chart"]["palette"][0], "blue");
}
