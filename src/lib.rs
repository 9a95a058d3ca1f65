pub mod chart;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod results;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use chart::{RenderedChart, render, render_with_config};
pub use error::{ChartError, ErrorKind, Result};
pub use results::{ResultRow, load_results};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_DATA_ERROR: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

/// Process exit code for a failure of the given kind.
///
/// Problems with the benchmark data exit with [`EXIT_DATA_ERROR`]; everything
/// else (config, IO, drawing) exits with [`EXIT_CONFIG_ERROR`].
#[must_use]
pub const fn exit_code_for(kind: ErrorKind) -> i32 {
    if kind.is_data_error() {
        EXIT_DATA_ERROR
    } else {
        EXIT_CONFIG_ERROR
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
