use std::path::Path;

use crate::cli::{Cli, RenderArgs};
use crate::config::{Config, FileConfigLoader, validate_config};
use crate::output::{ErrorOutput, RenderSummary, StageProgress};
use crate::results::load_results_with;
use crate::{EXIT_SUCCESS, Result, exit_code_for, render_with_config};

use super::load_config;

#[must_use]
pub fn run_render(args: &RenderArgs, cli: &Cli) -> i32 {
    let reporter = ErrorOutput::new(cli.color.into());

    match run_render_impl(args, cli, &reporter) {
        Ok(output) => {
            print!("{output}");
            EXIT_SUCCESS
        }
        Err(e) => {
            reporter.report(&e);
            exit_code_for(e.kind())
        }
    }
}

/// Load the results, draw the chart and build the summary text.
///
/// Returns the summary to print on stdout, empty under `--quiet`.
///
/// # Errors
/// Returns the first failure from config loading, result loading or
/// rendering. A viewer failure after the image is written is only reported
/// as a warning.
pub fn run_render_impl(args: &RenderArgs, cli: &Cli, reporter: &ErrorOutput) -> Result<String> {
    let loaded = load_config(&FileConfigLoader::new(), args.config.as_deref(), cli.no_config)?;
    if cli.verbose > 0 {
        match &loaded.source {
            Some(path) => reporter.print_note(&format!("using config {}", path.display())),
            None => reporter.print_note("using built-in defaults"),
        }
    }

    let mut config = loaded.config;
    apply_cli_overrides(&mut config, args);
    validate_config(&config)?;

    let progress = StageProgress::new(cli.quiet);

    progress.set_stage(&format!("Reading {}", config.input.path.display()));
    let rows =
        load_results_with(&config.input.path, &config.input).inspect_err(|_| progress.finish())?;
    if cli.verbose > 0 {
        reporter.print_note(&format!(
            "read {} rows from {}",
            rows.len(),
            config.input.path.display()
        ));
    }

    progress.set_stage(&format!("Rendering {}", config.output.path.display()));
    let rendered = render_with_config(&rows, &config.output.path, &config.chart);
    progress.finish();
    let rendered = rendered?;

    let output = if cli.quiet {
        String::new()
    } else {
        RenderSummary::from_rendered(&rendered)?.format(args.format, cli.verbose)?
    };

    if config.output.show {
        show_image(&rendered.path, reporter);
    }

    Ok(output)
}

/// Apply command-line flags on top of the loaded configuration.
pub fn apply_cli_overrides(config: &mut Config, args: &RenderArgs) {
    if let Some(input) = &args.input {
        config.input.path.clone_from(input);
    }
    if let Some(output) = &args.output {
        config.output.path.clone_from(output);
    }
    if let Some(title) = &args.title {
        config.chart.title.clone_from(title);
    }
    if let Some(dpi) = args.dpi {
        config.chart.dpi = dpi;
    }
    if args.show {
        config.output.show = true;
    }
}

#[cfg(feature = "viewer")]
fn show_image(path: &Path, reporter: &ErrorOutput) {
    if let Err(e) = crate::viewer::show(path) {
        reporter.print_warning(&format!("could not open viewer: {e}"));
    }
}

#[cfg(not(feature = "viewer"))]
fn show_image(path: &Path, reporter: &ErrorOutput) {
    reporter.print_warning(&format!(
        "viewer support is not compiled in; {} was written but not opened",
        path.display()
    ));
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
