use std::fs;

use crate::cli::{Cli, InitArgs};
use crate::error::ChartError;
use crate::output::ErrorOutput;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

#[must_use]
pub fn run_init(args: &InitArgs, cli: &Cli) -> i32 {
    match run_init_impl(args) {
        Ok(()) => {
            if !cli.quiet {
                println!("Created configuration file: {}", args.output.display());
            }
            EXIT_SUCCESS
        }
        Err(e) => {
            ErrorOutput::new(cli.color.into()).report(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Writes the commented configuration template.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(ChartError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template()).map_err(|source| {
        ChartError::FileWrite {
            path: output_path.clone(),
            source,
        }
    })
}

#[must_use]
pub const fn generate_config_template() -> &'static str {
    r##"# bench-chart configuration file
# Every key is optional; the values below are the built-in defaults.
# Command-line flags (--input, --output, --title, --dpi, --show) override them.

[input]
# CSV file with a header row containing 'method' and 'ms' columns
path = "results.csv"

# Field delimiter, a single ASCII character (use "\t" for TSV)
delimiter = ","

[chart]
title = "Dijkstra Pathfinding Benchmark"
y_label = "Time (ms)"

# Width and height in inches; pixel size is figure_size * dpi
figure_size = [6.0, 4.0]
dpi = 200

# Bar colors, cycled when there are more bars than colors.
# Accepts color names ("tab:blue", "orange") or hex ("#1f77b4").
palette = ["blue", "green", "orange"]

# Horizontal gridlines at the value ticks
grid = true

[output]
# The extension selects the format: .png or .svg
path = "speedup.png"

# Open the image in the system viewer after writing it
show = false
"##
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
