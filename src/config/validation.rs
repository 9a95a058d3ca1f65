//! Configuration semantic validation.
//!
//! Checks value ranges and cross-field constraints that the TOML schema
//! cannot express, so a bad config fails before any file is touched.

use crate::chart::ImageFormat;
use crate::config::{ChartConfig, Config, InputConfig, OutputConfig};
use crate::{ChartError, Result};

/// Largest accepted dpi.
pub const MAX_DPI: u32 = 1200;

/// Largest accepted image side in pixels.
pub const MAX_PIXELS_PER_SIDE: u32 = 16_384;

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns `ChartError::Config` naming the offending key.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_input_section(&config.input)?;
    validate_chart_section(&config.chart)?;
    validate_output_section(&config.output)?;
    Ok(())
}

fn validate_input_section(input: &InputConfig) -> Result<()> {
    let delimiter = input.delimiter;
    let printable = delimiter.is_ascii_graphic() || delimiter == ' ' || delimiter == '\t';
    if !printable || delimiter == '"' {
        return Err(ChartError::Config(format!(
            "input.delimiter must be a single printable ASCII character or tab, got {:?}",
            input.delimiter
        )));
    }
    Ok(())
}

/// Validates the `[chart]` section on its own.
///
/// # Errors
/// Returns `ChartError::Config` for an out-of-range dpi, figure size or palette.
pub fn validate_chart_section(chart: &ChartConfig) -> Result<()> {
    if !(1..=MAX_DPI).contains(&chart.dpi) {
        return Err(ChartError::Config(format!(
            "chart.dpi must be between 1 and {MAX_DPI}, got {}",
            chart.dpi
        )));
    }

    for (axis, side) in ["width", "height"].iter().zip(chart.figure_size) {
        if !side.is_finite() || side <= 0.0 {
            return Err(ChartError::Config(format!(
                "chart.figure_size {axis} must be a positive number of inches, got {side}"
            )));
        }
        if side * f64::from(chart.dpi) > f64::from(MAX_PIXELS_PER_SIDE) {
            return Err(ChartError::Config(format!(
                "chart.figure_size {axis} of {side} in at {} dpi exceeds {MAX_PIXELS_PER_SIDE} pixels",
                chart.dpi
            )));
        }
    }

    if chart.palette.is_empty() {
        return Err(ChartError::Config(
            "chart.palette must contain at least one color".to_string(),
        ));
    }
    Ok(())
}

fn validate_output_section(output: &OutputConfig) -> Result<()> {
    ImageFormat::from_path(&output.path).map(|_| ())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
