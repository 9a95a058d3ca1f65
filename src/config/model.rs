use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::chart::ChartColor;

/// Default source file read when no input path is given.
pub const DEFAULT_INPUT_PATH: &str = "results.csv";

/// Default image written when no output path is given.
pub const DEFAULT_OUTPUT_PATH: &str = "speedup.png";

pub const DEFAULT_TITLE: &str = "Dijkstra Pathfinding Benchmark";
pub const DEFAULT_Y_LABEL: &str = "Time (ms)";

/// Figure size in inches, width then height.
pub const DEFAULT_FIGURE_SIZE: [f64; 2] = [6.0, 4.0];
pub const DEFAULT_DPI: u32 = 200;

/// Bar colors assigned in order, wrapping when there are more bars.
pub const DEFAULT_PALETTE: &[&str] = &["blue", "green", "orange"];

/// Typographic points per inch; font sizes are given in points.
pub const POINTS_PER_INCH: f64 = 72.0;

/// Top-level configuration, one section per pipeline stage.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,

    #[serde(default)]
    pub chart: ChartConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Where and how to read benchmark results `[input]`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct InputConfig {
    /// Results file (default: `results.csv`).
    #[serde(default = "default_input_path")]
    pub path: PathBuf,

    /// Field delimiter, a single ASCII character (default: `,`).
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: default_input_path(),
            delimiter: default_delimiter(),
        }
    }
}

impl InputConfig {
    /// Delimiter as a byte for the CSV reader.
    ///
    /// Non-ASCII delimiters are rejected by validation; they fall back to `,`.
    #[must_use]
    pub fn delimiter_byte(&self) -> u8 {
        if self.delimiter.is_ascii() {
            u8::try_from(self.delimiter).unwrap_or(b',')
        } else {
            b','
        }
    }
}

/// Appearance of the rendered chart `[chart]`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ChartConfig {
    #[serde(default = "default_title")]
    pub title: String,

    /// Value axis description.
    #[serde(default = "default_y_label")]
    pub y_label: String,

    /// Width and height in inches.
    #[serde(default = "default_figure_size")]
    pub figure_size: [f64; 2],

    /// Pixels per inch.
    #[serde(default = "default_dpi")]
    pub dpi: u32,

    #[serde(default = "default_palette")]
    pub palette: Vec<ChartColor>,

    /// Draw horizontal gridlines at the value ticks.
    #[serde(default = "default_true")]
    pub grid: bool,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            y_label: default_y_label(),
            figure_size: default_figure_size(),
            dpi: default_dpi(),
            palette: default_palette(),
            grid: true,
        }
    }
}

impl ChartConfig {
    /// Image size in pixels: figure size times dpi, rounded.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn pixel_size(&self) -> (u32, u32) {
        let dpi = f64::from(self.dpi);
        let [width, height] = self.figure_size;
        (
            (width * dpi).round().max(1.0) as u32,
            (height * dpi).round().max(1.0) as u32,
        )
    }

    /// Convert a size in points to pixels at this config's dpi.
    #[must_use]
    pub fn pt_to_px(&self, points: f64) -> f64 {
        points * f64::from(self.dpi) / POINTS_PER_INCH
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub const fn with_dpi(mut self, dpi: u32) -> Self {
        self.dpi = dpi;
        self
    }

    #[must_use]
    pub fn with_palette(mut self, palette: Vec<ChartColor>) -> Self {
        self.palette = palette;
        self
    }
}

/// Where the image goes and what happens after `[output]`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Image file; the extension selects PNG or SVG (default: `speedup.png`).
    #[serde(default = "default_output_path")]
    pub path: PathBuf,

    /// Open the image in the system viewer after writing it.
    #[serde(default)]
    pub show: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            show: false,
        }
    }
}

fn default_input_path() -> PathBuf {
    PathBuf::from(DEFAULT_INPUT_PATH)
}

const fn default_delimiter() -> char {
    ','
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

fn default_y_label() -> String {
    DEFAULT_Y_LABEL.to_string()
}

const fn default_figure_size() -> [f64; 2] {
    DEFAULT_FIGURE_SIZE
}

const fn default_dpi() -> u32 {
    DEFAULT_DPI
}

fn default_palette() -> Vec<ChartColor> {
    DEFAULT_PALETTE
        .iter()
        .map(|name| ChartColor::Named((*name).to_string()))
        .collect()
}

const fn default_true() -> bool {
    true
}

fn default_output_path() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_PATH)
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
