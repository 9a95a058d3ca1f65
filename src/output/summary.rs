//! Post-render summary in text or JSON.

use std::fmt::Write as _;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use serde::Serialize;
use sha2::{Digest, Sha256};

use super::OutputFormat;
use crate::chart::{ImageFormat, RenderedChart, format_value};
use crate::error::{ChartError, Result};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryBar {
    pub method: String,
    pub ms: f64,
}

/// What was rendered and where, with a content hash so two runs can be
/// compared byte for byte.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderSummary {
    pub path: PathBuf,
    pub format: ImageFormat,
    pub width: u32,
    pub height: u32,
    pub bars: Vec<SummaryBar>,
    pub sha256: String,
}

impl RenderSummary {
    /// Summarize `rendered`, hashing the written file.
    ///
    /// # Errors
    /// Returns `FileRead` if the image cannot be read back.
    pub fn from_rendered(rendered: &RenderedChart) -> Result<Self> {
        let sha256 = sha256_file(&rendered.path).map_err(|source| ChartError::FileRead {
            path: rendered.path.clone(),
            source,
        })?;

        Ok(Self {
            path: rendered.path.clone(),
            format: rendered.format,
            width: rendered.width,
            height: rendered.height,
            bars: rendered
                .chart
                .bars
                .iter()
                .map(|bar| SummaryBar {
                    method: bar.label.clone(),
                    ms: bar.value,
                })
                .collect(),
            sha256,
        })
    }

    /// Render the summary in `format`, newline-terminated.
    ///
    /// # Errors
    /// Returns `JsonSerialize` if JSON encoding fails.
    pub fn format(&self, format: OutputFormat, verbose: u8) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(self)?)),
            OutputFormat::Text => Ok(self.format_text(verbose)),
        }
    }

    fn format_text(&self, verbose: u8) -> String {
        let mut output = format!(
            "Rendered {} {} to {} ({}x{} px, {})\n",
            self.bars.len(),
            if self.bars.len() == 1 { "bar" } else { "bars" },
            self.path.display(),
            self.width,
            self.height,
            self.format
        );

        if verbose > 0 {
            let label_width = self
                .bars
                .iter()
                .map(|bar| bar.method.chars().count())
                .max()
                .unwrap_or(0);
            for bar in &self.bars {
                let _ = writeln!(
                    output,
                    "  {:<label_width$}  {} ms",
                    bar.method,
                    format_value(bar.ms)
                );
            }
            let _ = writeln!(output, "  sha256: {}", self.sha256);
        }

        output
    }
}

/// Hex SHA-256 of a file's contents.
///
/// # Errors
/// Returns any IO error from reading the file.
pub fn sha256_file(path: &Path) -> io::Result<String> {
    let mut file = File::open(path)?;
    let mut hasher = Sha256::new();
    let mut buffer = [0u8; 8192];
    loop {
        let read = file.read(&mut buffer)?;
        if read == 0 {
            break;
        }
        hasher.update(&buffer[..read]);
    }
    Ok(format!("{:x}", hasher.finalize()))
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
