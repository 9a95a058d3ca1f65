//! Coordinate ranges for the two chart axes.
//!
//! Both axes hand plotters an explicit set of key points instead of letting
//! it pick its own: one per bar on the category axis, and the precomputed
//! ticks on the value axis. Light (minor) key points are never produced, so
//! the only gridlines are at the major ticks.

use std::ops::Range;

use plotters::coord::ranged1d::{KeyPointHint, NoDefaultFormatting, Ranged, ValueFormatter};

use super::format::format_tick;
use super::model::{BAR_WIDTH, BarChart};

/// Gap between the outer bars and the frame, in category slots.
const CATEGORY_PADDING: f64 = 0.15;

fn map_linear(value: f64, range: &Range<f64>, limit: (i32, i32)) -> i32 {
    let span = range.end - range.start;
    if span <= 0.0 {
        return limit.0;
    }
    let fraction = (value - range.start) / span;
    #[allow(clippy::cast_possible_truncation)]
    let offset = (f64::from(limit.1 - limit.0) * fraction).round() as i32;
    limit.0 + offset
}

/// Category axis: bar `i` is centered at `i`, labeled with its method name.
#[derive(Debug, Clone)]
pub struct BarAxis {
    labels: Vec<String>,
    range: Range<f64>,
}

impl BarAxis {
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn new(chart: &BarChart) -> Self {
        let last = chart.len().saturating_sub(1) as f64;
        Self {
            labels: chart.bars.iter().map(|bar| bar.label.clone()).collect(),
            range: (-BAR_WIDTH / 2.0 - CATEGORY_PADDING)
                ..(last + BAR_WIDTH / 2.0 + CATEGORY_PADDING),
        }
    }

    /// Label for the slot nearest `value`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn label_at(&self, value: f64) -> &str {
        let rounded = value.round();
        if rounded < 0.0 {
            return "";
        }
        self.labels
            .get(rounded as usize)
            .map_or("", String::as_str)
    }
}

impl Ranged for BarAxis {
    type FormatOption = NoDefaultFormatting;
    type ValueType = f64;

    fn map(&self, value: &f64, limit: (i32, i32)) -> i32 {
        map_linear(*value, &self.range, limit)
    }

    #[allow(clippy::cast_precision_loss)]
    fn key_points<Hint: KeyPointHint>(&self, hint: Hint) -> Vec<f64> {
        if hint.weight().allow_light_points() {
            return Vec::new();
        }
        (0..self.labels.len()).map(|i| i as f64).collect()
    }

    fn range(&self) -> Range<f64> {
        self.range.clone()
    }
}

impl ValueFormatter<f64> for BarAxis {
    fn format_ext(&self, value: &f64) -> String {
        self.label_at(*value).to_string()
    }
}

/// Value axis from zero to the chart's `y_max`, ticked at `y_ticks`.
#[derive(Debug, Clone)]
pub struct ValueAxis {
    ticks: Vec<f64>,
    step: f64,
    range: Range<f64>,
}

impl ValueAxis {
    #[must_use]
    pub fn new(chart: &BarChart) -> Self {
        Self {
            ticks: chart.y_ticks.clone(),
            step: chart.tick_step,
            range: 0.0..chart.y_max,
        }
    }
}

impl Ranged for ValueAxis {
    type FormatOption = NoDefaultFormatting;
    type ValueType = f64;

    fn map(&self, value: &f64, limit: (i32, i32)) -> i32 {
        map_linear(*value, &self.range, limit)
    }

    fn key_points<Hint: KeyPointHint>(&self, hint: Hint) -> Vec<f64> {
        if hint.weight().allow_light_points() {
            return Vec::new();
        }
        self.ticks.clone()
    }

    fn range(&self) -> Range<f64> {
        self.range.clone()
    }
}

impl ValueFormatter<f64> for ValueAxis {
    fn format_ext(&self, value: &f64) -> String {
        format_tick(*value, self.step)
    }
}

#[cfg(test)]
#[path = "axis_tests.rs"]
mod tests;
