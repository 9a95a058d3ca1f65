use tempfile::TempDir;

use super::{generate_config_template, run_init, run_init_impl};
use crate::cli::{Cli, InitArgs};
use crate::config::{Config, parse_config};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS};
use clap::Parser;

fn init_args(output: std::path::PathBuf, force: bool) -> InitArgs {
    InitArgs { output, force }
}

fn quiet_cli() -> Cli {
    Cli::parse_from(["bench-chart", "--quiet", "--color", "never"])
}

#[test]
fn template_contains_all_sections() {
    let template = generate_config_template();
    assert!(template.contains("[input]"));
    assert!(template.contains("[chart]"));
    assert!(template.contains("[output]"));
    assert!(template.contains(r#"palette = ["blue", "green", "orange"]"#));
}

#[test]
fn template_parses_to_default_config() {
    let config = parse_config(generate_config_template()).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn run_init_creates_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join(".bench-chart.toml");

    run_init_impl(&init_args(config_path.clone(), false)).unwrap();

    let content = std::fs::read_to_string(&config_path).unwrap();
    assert_eq!(content, generate_config_template());
}

#[test]
fn run_init_fails_if_file_exists_without_force() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join(".bench-chart.toml");
    std::fs::write(&config_path, "existing content").unwrap();

    let err = run_init_impl(&init_args(config_path.clone(), false)).unwrap_err();

    assert!(err.to_string().contains("already exists"));
    assert_eq!(std::fs::read_to_string(&config_path).unwrap(), "existing content");
}

#[test]
fn run_init_overwrites_with_force() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join(".bench-chart.toml");
    std::fs::write(&config_path, "old").unwrap();

    run_init_impl(&init_args(config_path.clone(), true)).unwrap();

    let content = std::fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("[chart]"));
}

#[test]
fn run_init_missing_directory_is_write_error() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("missing").join("config.toml");

    let err = run_init_impl(&init_args(config_path, false)).unwrap_err();

    assert!(matches!(err, crate::ChartError::FileWrite { .. }));
}

#[test]
fn run_init_exit_codes() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    let cli = quiet_cli();

    assert_eq!(run_init(&init_args(config_path.clone(), false), &cli), EXIT_SUCCESS);
    assert_eq!(run_init(&init_args(config_path, false), &cli), EXIT_CONFIG_ERROR);
}
