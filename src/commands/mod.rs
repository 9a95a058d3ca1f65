pub mod config;
pub mod init;
pub mod render;

pub use config::{format_config_text, run_config, run_config_show_impl, run_config_validate_impl};
pub use init::{generate_config_template, run_init, run_init_impl};
pub use render::{apply_cli_overrides, run_render, run_render_impl};

use std::path::Path;

use crate::Result;
use crate::config::{Config, ConfigLoader, LoadResult};

/// Resolve the configuration for a command.
///
/// `--no-config` wins over everything; an explicit path is loaded as given;
/// otherwise the loader's discovery order applies.
///
/// # Errors
/// Returns an error if the selected file cannot be read, parsed or validated.
pub fn load_config<L: ConfigLoader>(
    loader: &L,
    config_path: Option<&Path>,
    no_config: bool,
) -> Result<LoadResult> {
    if no_config {
        return Ok(LoadResult {
            config: Config::default(),
            source: None,
        });
    }

    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
