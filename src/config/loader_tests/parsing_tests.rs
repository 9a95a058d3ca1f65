//! Tests for parsing and validating config content during load.

use std::path::Path;

use crate::config::{ConfigLoader, FileConfigLoader, parse_config};
use crate::error::ErrorKind;

use super::mock_fs::MockFileSystem;

#[test]
fn parses_full_document() {
    let config = parse_config(
        r##"
        [input]
        path = "data/results.tsv"
        delimiter = "\t"

        [chart]
        title = "APSP"
        y_label = "Latency (ms)"
        figure_size = [8.0, 5.0]
        dpi = 100
        palette = ["tab:blue", "#ff7f0e"]
        grid = false

        [output]
        path = "latency.svg"
        show = true
        "##,
    )
    .unwrap();

    assert_eq!(config.input.delimiter, '\t');
    assert_eq!(config.chart.pixel_size(), (800, 500));
    assert!(!config.chart.grid);
    assert!(config.output.show);
}

#[test]
fn syntax_error_is_toml_error() {
    let err = parse_config("[chart\ndpi = 100").unwrap_err();

    assert_eq!(err.error_type(), "TOML");
    assert_eq!(err.kind(), ErrorKind::Config);
}

#[test]
fn unknown_key_is_toml_error() {
    let err = parse_config("[output]\nformat = \"png\"\n").unwrap_err();
    assert_eq!(err.error_type(), "TOML");
}

#[test]
fn semantic_error_is_config_error() {
    let err = parse_config("[chart]\ndpi = 5000\n").unwrap_err();

    assert_eq!(err.error_type(), "Config");
    assert!(err.to_string().contains("chart.dpi"));
}

#[test]
fn invalid_local_config_fails_load() {
    let fs = MockFileSystem::new().with_file("/project/.bench-chart.toml", "[chart]\npalette = []\n");

    let err = FileConfigLoader::with_fs(fs).load().unwrap_err();

    assert!(err.to_string().contains("chart.palette"));
}

#[test]
fn unsupported_output_extension_fails_load() {
    let fs = MockFileSystem::new().with_file("/cfg.toml", "[output]\npath = \"chart.gif\"\n");

    let err = FileConfigLoader::with_fs(fs)
        .load_from_path(Path::new("/cfg.toml"))
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Config);
}
