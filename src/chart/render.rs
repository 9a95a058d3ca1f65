use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use serde::Serialize;
use tempfile::NamedTempFile;

use super::axis::{BarAxis, ValueAxis};
use super::fonts::{CHART_FONT, ensure_registered};
use super::layout::Layout;
use super::model::BarChart;
use crate::config::{ChartConfig, validate_chart_section};
use crate::error::{ChartError, Result};
use crate::results::ResultRow;

/// Gridline color, a light gray that stays visible over the bars.
const GRID_COLOR: RGBColor = RGBColor(0xb0, 0xb0, 0xb0);

/// Image encoding, chosen from the output file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Png,
    Svg,
}

impl ImageFormat {
    /// Pick the format from `path`'s extension (case-insensitive).
    ///
    /// # Errors
    /// Returns `Config` for a missing or unsupported extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("png") => Ok(Self::Png),
            Some("svg") => Ok(Self::Svg),
            Some(other) => Err(ChartError::Config(format!(
                "unsupported output extension '.{other}' for {}; use .png or .svg",
                path.display()
            ))),
            None => Err(ChartError::Config(format!(
                "output path {} has no extension; use .png or .svg",
                path.display()
            ))),
        }
    }

    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Svg => "svg",
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Png => write!(f, "PNG"),
            Self::Svg => write!(f, "SVG"),
        }
    }
}

/// What a successful render wrote.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedChart {
    pub path: PathBuf,
    pub format: ImageFormat,
    pub width: u32,
    pub height: u32,
    /// The chart as drawn, one bar per input row.
    pub chart: BarChart,
}

/// Render `rows` as a bar chart at `output_path` with the default styling.
///
/// # Errors
/// See [`render_with_config`].
pub fn render(rows: &[ResultRow], output_path: &Path) -> Result<RenderedChart> {
    render_with_config(rows, output_path, &ChartConfig::default())
}

/// Render `rows` as a bar chart at `output_path`.
///
/// The image is drawn into a temporary file beside the destination and
/// moved into place only once complete; on failure nothing is left at
/// `output_path`.
///
/// # Errors
/// Returns `Config` for an unsupported extension or invalid chart settings,
/// `EmptyInput` or `InvalidValue` for unusable rows, `FileWrite` when the
/// destination cannot be written, and `Render` if drawing fails.
pub fn render_with_config(
    rows: &[ResultRow],
    output_path: &Path,
    config: &ChartConfig,
) -> Result<RenderedChart> {
    let format = ImageFormat::from_path(output_path)?;
    validate_chart_section(config)?;
    let chart = BarChart::from_rows(rows, config)?;
    ensure_registered()?;

    let (width, height) = config.pixel_size();
    let staging = staging_file(output_path, format)?;

    match format {
        ImageFormat::Png => {
            let root = BitMapBackend::new(staging.path(), (width, height)).into_drawing_area();
            draw_chart(&root, &chart, config)?;
            root.present()
                .map_err(|err| write_error(output_path, &err))?;
        }
        ImageFormat::Svg => {
            let root = SVGBackend::new(staging.path(), (width, height)).into_drawing_area();
            draw_chart(&root, &chart, config)?;
            root.present()
                .map_err(|err| write_error(output_path, &err))?;
        }
    }

    staging
        .persist(output_path)
        .map_err(|err| ChartError::FileWrite {
            path: output_path.to_path_buf(),
            source: err.error,
        })?;

    Ok(RenderedChart {
        path: output_path.to_path_buf(),
        format,
        width,
        height,
        chart,
    })
}

fn staging_file(output_path: &Path, format: ImageFormat) -> Result<NamedTempFile> {
    let dir = match output_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let suffix = format!(".{}", format.extension());
    let mut builder = tempfile::Builder::new();
    builder.prefix(".bench-chart-").suffix(&suffix);
    // Same mode as a plain write; the umask still applies.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }

    builder
        .tempfile_in(dir)
        .map_err(|source| ChartError::FileWrite {
            path: output_path.to_path_buf(),
            source,
        })
}

fn render_error<E: std::error::Error + Send + Sync>(err: DrawingAreaErrorKind<E>) -> ChartError {
    ChartError::Render(err.to_string())
}

fn write_error<E: std::error::Error + Send + Sync>(
    output_path: &Path,
    err: &DrawingAreaErrorKind<E>,
) -> ChartError {
    ChartError::FileWrite {
        path: output_path.to_path_buf(),
        source: io::Error::other(err.to_string()),
    }
}

/// Draw `chart` onto `root`: title, bars, value gridlines, axes and frame.
fn draw_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    chart: &BarChart,
    config: &ChartConfig,
) -> Result<()> {
    root.fill(&WHITE).map_err(render_error)?;

    let layout = Layout::compute(chart, config, |text, font_px| {
        root.estimate_text_size(text, &TextStyle::from((CHART_FONT, font_px)))
            .map_err(render_error)
    })?;

    let x_axis = BarAxis::new(chart);
    let y_axis = ValueAxis::new(chart);
    let (x_range, y_range) = (x_axis.range(), y_axis.range());

    let mut ctx = ChartBuilder::on(root)
        .margin_top(layout.margin_top)
        .margin_right(layout.margin_right)
        .margin_bottom(layout.margin_bottom)
        .margin_left(layout.margin_left)
        .caption(&chart.title, (CHART_FONT, layout.title_font_px))
        .x_label_area_size(layout.x_label_area)
        .y_label_area_size(layout.y_label_area)
        .build_cartesian_2d(x_axis, y_axis)
        .map_err(render_error)?;

    ctx.draw_series(chart.bars.iter().map(|bar| {
        let (r, g, b) = bar.color.rgb();
        Rectangle::new(
            [(bar.left(), 0.0), (bar.right(), bar.value)],
            RGBColor(r, g, b).filled(),
        )
    }))
    .map_err(render_error)?;

    // Gridlines sit above the bars.
    let mut mesh = ctx.configure_mesh();
    mesh.disable_x_mesh()
        .x_labels(chart.len())
        .y_labels(chart.y_ticks.len())
        .y_desc(chart.y_label.as_str())
        .label_style((CHART_FONT, layout.label_font_px))
        .axis_desc_style((CHART_FONT, layout.label_font_px))
        .bold_line_style(GRID_COLOR.stroke_width(layout.line_px))
        .axis_style(BLACK.stroke_width(layout.line_px))
        .set_all_tick_mark_size(layout.tick_px);
    if !chart.grid {
        mesh.disable_y_mesh();
    }
    mesh.draw().map_err(render_error)?;

    ctx.plotting_area()
        .draw(&Rectangle::new(
            [(x_range.start, y_range.start), (x_range.end, y_range.end)],
            BLACK.stroke_width(layout.line_px),
        ))
        .map_err(render_error)?;

    Ok(())
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
