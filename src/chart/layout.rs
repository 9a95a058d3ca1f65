//! Plot-area placement from measured text.
//!
//! Margins and label areas are sized from the actual extents of the title,
//! tick labels and axis description at the configured dpi, so the frame
//! takes all the room the text does not need.

use super::model::BarChart;
use crate::config::ChartConfig;
use crate::error::Result;

/// Title size in points.
pub const TITLE_FONT_PT: f64 = 12.0;

/// Tick label and axis description size in points.
pub const LABEL_FONT_PT: f64 = 10.0;

/// Tick mark length in points.
pub const TICK_LENGTH_PT: f64 = 3.5;

/// Gap between a tick and its label, and between labels and the description.
pub const LABEL_PAD_PT: f64 = 4.0;

/// Blank border around the whole figure in points.
pub const BORDER_PT: f64 = 8.0;

/// Frame, tick and gridline width in points.
pub const LINE_WIDTH_PT: f64 = 0.8;

/// Pixel geometry for one render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub title_font_px: f64,
    pub label_font_px: f64,
    pub margin_top: u32,
    pub margin_right: u32,
    pub margin_bottom: u32,
    pub margin_left: u32,
    /// Height reserved below the frame for bar labels.
    pub x_label_area: u32,
    /// Width reserved left of the frame for tick labels and the description.
    pub y_label_area: u32,
    pub tick_px: u32,
    pub line_px: u32,
}

impl Layout {
    /// Compute the layout, measuring text with `measure(text, font_px)`,
    /// which returns the rendered `(width, height)` in pixels.
    ///
    /// # Errors
    /// Propagates any error from `measure`.
    pub fn compute<M>(chart: &BarChart, config: &ChartConfig, mut measure: M) -> Result<Self>
    where
        M: FnMut(&str, f64) -> Result<(u32, u32)>,
    {
        let title_font_px = config.pt_to_px(TITLE_FONT_PT);
        let label_font_px = config.pt_to_px(LABEL_FONT_PT);
        let pad = config.pt_to_px(LABEL_PAD_PT);
        let tick = config.pt_to_px(TICK_LENGTH_PT);
        let border = config.pt_to_px(BORDER_PT);

        let mut bar_label_height = 0;
        let mut last_bar_label_width = 0;
        for bar in &chart.bars {
            let (width, height) = measure(&bar.label, label_font_px)?;
            bar_label_height = bar_label_height.max(height);
            last_bar_label_width = width;
        }

        let mut tick_label_width = 0;
        let mut tick_label_height = 0;
        for label in chart.tick_labels() {
            let (width, height) = measure(&label, label_font_px)?;
            tick_label_width = tick_label_width.max(width);
            tick_label_height = tick_label_height.max(height);
        }

        // The description is drawn rotated, so its height is horizontal extent.
        let y_desc_height = if chart.y_label.is_empty() {
            0.0
        } else {
            f64::from(measure(&chart.y_label, label_font_px)?.1) + pad
        };

        let x_label_area = tick + pad + f64::from(bar_label_height) + pad;
        let y_label_area = tick + pad + f64::from(tick_label_width) + pad + y_desc_height;
        // Top tick label is centered on the frame edge and half of it sticks out.
        let margin_top = border + f64::from(tick_label_height) / 2.0;
        let margin_right = border.max(f64::from(last_bar_label_width) / 2.0);

        Ok(Self {
            title_font_px,
            label_font_px,
            margin_top: to_px(margin_top),
            margin_right: to_px(margin_right),
            margin_bottom: to_px(border),
            margin_left: to_px(border),
            x_label_area: to_px(x_label_area),
            y_label_area: to_px(y_label_area),
            tick_px: to_px(tick),
            line_px: to_px(config.pt_to_px(LINE_WIDTH_PT)).max(1),
        })
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_px(value: f64) -> u32 {
    value.max(0.0).ceil() as u32
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
