use std::fmt::Write;
use std::path::Path;

use crate::cli::{Cli, ConfigAction, ConfigArgs};
use crate::config::{Config, FileConfigLoader, LoadResult, parse_config};
use crate::error::ChartError;
use crate::output::{ErrorOutput, OutputFormat};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

use super::load_config;

#[must_use]
pub fn run_config(args: &ConfigArgs, cli: &Cli) -> i32 {
    let reporter = ErrorOutput::new(cli.color.into());

    let result = match &args.action {
        ConfigAction::Validate { path } => run_config_validate_impl(path)
            .map(|()| format!("Configuration is valid: {}\n", path.display())),
        ConfigAction::Show { config, format } => {
            run_config_show_impl(config.as_deref(), *format, cli.no_config)
        }
    };

    match result {
        Ok(output) => {
            print!("{output}");
            EXIT_SUCCESS
        }
        Err(e) => {
            reporter.report(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Validates a configuration file.
///
/// # Errors
/// Returns an error if the file doesn't exist, contains invalid TOML, or has invalid values.
pub fn run_config_validate_impl(config_path: &Path) -> Result<()> {
    if !config_path.exists() {
        return Err(ChartError::Config(format!(
            "Configuration file not found: {}",
            config_path.display()
        )));
    }

    let content =
        std::fs::read_to_string(config_path).map_err(|source| ChartError::FileRead {
            path: config_path.to_path_buf(),
            source,
        })?;
    parse_config(&content)?;

    Ok(())
}

/// Shows the effective configuration.
///
/// # Errors
/// Returns an error if the configuration file cannot be loaded or serialization fails.
pub fn run_config_show_impl(
    config_path: Option<&Path>,
    format: OutputFormat,
    no_config: bool,
) -> Result<String> {
    let loaded = load_config(&FileConfigLoader::new(), config_path, no_config)?;

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&loaded.config)?;
            Ok(format!("{json}\n"))
        }
        OutputFormat::Text => Ok(format_config_text(&loaded)),
    }
}

#[must_use]
pub fn format_config_text(loaded: &LoadResult) -> String {
    let config: &Config = &loaded.config;
    let mut output = String::new();

    output.push_str("=== Effective Configuration ===\n");
    match &loaded.source {
        Some(path) => {
            let _ = writeln!(output, "# source: {}", path.display());
        }
        None => output.push_str("# source: built-in defaults\n"),
    }

    output.push_str("\n[input]\n");
    let _ = writeln!(output, "  path = {:?}", config.input.path.display().to_string());
    let _ = writeln!(output, "  delimiter = {:?}", config.input.delimiter.to_string());

    output.push_str("\n[chart]\n");
    let _ = writeln!(output, "  title = {:?}", config.chart.title);
    let _ = writeln!(output, "  y_label = {:?}", config.chart.y_label);
    let [width, height] = config.chart.figure_size;
    let _ = writeln!(output, "  figure_size = [{width:?}, {height:?}]");
    let _ = writeln!(output, "  dpi = {}", config.chart.dpi);
    let palette: Vec<String> = config
        .chart
        .palette
        .iter()
        .map(ToString::to_string)
        .collect();
    let _ = writeln!(output, "  palette = {palette:?}");
    let _ = writeln!(output, "  grid = {}", config.chart.grid);
    let (px_width, px_height) = config.chart.pixel_size();
    let _ = writeln!(output, "  # image size: {px_width}x{px_height} px");

    output.push_str("\n[output]\n");
    let _ = writeln!(output, "  path = {:?}", config.output.path.display().to_string());
    let _ = writeln!(output, "  show = {}", config.output.show);

    output
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
