use serde::Serialize;

use super::format::format_tick;
use super::style::{ChartColor, Palette};
use crate::config::ChartConfig;
use crate::error::{ChartError, Result};
use crate::results::ResultRow;

/// Fraction of a category slot covered by its bar.
pub const BAR_WIDTH: f64 = 0.8;

/// Headroom above the tallest bar, as a fraction of its value.
pub const HEADROOM: f64 = 0.05;

/// Upper bound on the number of value-axis ticks, zero included.
pub const MAX_TICKS: usize = 9;

const NICE_STEPS: [f64; 5] = [1.0, 2.0, 2.5, 5.0, 10.0];

/// One bar: a category slot on the x axis and its height.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    /// Slot position, `0..n` in input order.
    pub index: usize,
    pub label: String,
    pub value: f64,
    pub color: ChartColor,
}

impl Bar {
    /// Slot center in axis units.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub const fn center(&self) -> f64 {
        self.index as f64
    }

    #[must_use]
    pub const fn left(&self) -> f64 {
        self.center() - BAR_WIDTH / 2.0
    }

    #[must_use]
    pub const fn right(&self) -> f64 {
        self.center() + BAR_WIDTH / 2.0
    }
}

/// The chart to draw, derived from result rows.
///
/// Holds exactly one bar per row, in row order, so the structure of the
/// picture can be checked without decoding pixels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChart {
    pub title: String,
    pub y_label: String,
    pub bars: Vec<Bar>,
    /// Top of the value axis; the bottom is always zero.
    pub y_max: f64,
    /// Distance between value-axis ticks.
    pub tick_step: f64,
    /// Value-axis tick positions, ascending from zero.
    pub y_ticks: Vec<f64>,
    pub grid: bool,
}

impl BarChart {
    /// Build the chart for `rows` using the styling in `config`.
    ///
    /// # Errors
    /// Returns `EmptyInput` when there are no rows, and `InvalidValue` for a
    /// blank method name or a timing that is negative, infinite or NaN.
    pub fn from_rows(rows: &[ResultRow], config: &ChartConfig) -> Result<Self> {
        if rows.is_empty() {
            return Err(ChartError::EmptyInput);
        }
        for (i, row) in rows.iter().enumerate() {
            validate_row(i + 1, row)?;
        }

        let palette = Palette::new(&config.palette);
        let bars: Vec<Bar> = rows
            .iter()
            .enumerate()
            .map(|(index, row)| Bar {
                index,
                label: row.method.trim().to_string(),
                value: row.ms,
                color: palette.color_at(index),
            })
            .collect();

        let max_value = bars.iter().map(|bar| bar.value).fold(0.0, f64::max);
        let y_max = value_axis_max(max_value);
        let tick_step = nice_step(y_max);

        Ok(Self {
            title: config.title.clone(),
            y_label: config.y_label.clone(),
            bars,
            y_max,
            tick_step,
            y_ticks: ticks(y_max, tick_step),
            grid: config.grid,
        })
    }

    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        self.bars.iter().map(|bar| bar.label.as_str()).collect()
    }

    #[must_use]
    pub fn values(&self) -> Vec<f64> {
        self.bars.iter().map(|bar| bar.value).collect()
    }

    /// Bar heights as fractions of the tallest bar.
    #[must_use]
    pub fn relative_heights(&self) -> Vec<f64> {
        let max_value = self.bars.iter().map(|bar| bar.value).fold(0.0, f64::max);
        self.bars
            .iter()
            .map(|bar| {
                if max_value > 0.0 {
                    bar.value / max_value
                } else {
                    0.0
                }
            })
            .collect()
    }

    /// Tick labels for the value axis, formatted to the tick step's precision.
    #[must_use]
    pub fn tick_labels(&self) -> Vec<String> {
        self.y_ticks
            .iter()
            .map(|tick| format_tick(*tick, self.tick_step))
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }
}

fn validate_row(row: usize, result: &ResultRow) -> Result<()> {
    let reason = if result.method.trim().is_empty() {
        Some("method name is empty".to_string())
    } else if result.ms.is_nan() {
        Some("ms value is NaN".to_string())
    } else if result.ms.is_infinite() {
        Some(format!("ms value {} is not finite", result.ms))
    } else if result.ms < 0.0 {
        Some(format!("ms value {} is negative", result.ms))
    } else {
        None
    };

    reason.map_or(Ok(()), |reason| {
        Err(ChartError::InvalidValue { row, reason })
    })
}

/// Value-axis upper bound for the tallest bar.
///
/// All-zero data still gets a unit axis so the frame has a height.
#[must_use]
pub fn value_axis_max(max_value: f64) -> f64 {
    if max_value > 0.0 {
        let padded = max_value * (1.0 + HEADROOM);
        if padded.is_finite() {
            padded
        } else {
            f64::MAX
        }
    } else {
        1.0
    }
}

/// Smallest step from 1, 2, 2.5, 5 times a power of ten that covers
/// `0..=y_max` in at most [`MAX_TICKS`] ticks.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn nice_step(y_max: f64) -> f64 {
    if !(y_max.is_finite() && y_max > 0.0) {
        return 1.0;
    }

    #[allow(clippy::cast_precision_loss)]
    let intervals = (MAX_TICKS - 1) as f64;
    let exponent = (y_max / intervals).log10().floor() as i32;
    let scale = 10f64.powi(exponent);
    // Subnormal maxima underflow the power of ten.
    if !(scale.is_finite() && scale > 0.0) {
        return y_max / intervals;
    }

    NICE_STEPS
        .iter()
        .map(|mantissa| mantissa * scale)
        .find(|step| tick_count(y_max, *step) <= MAX_TICKS)
        .unwrap_or(10.0 * scale)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn tick_count(y_max: f64, step: f64) -> usize {
    let intervals = (y_max / step + 1e-9).floor();
    if !(intervals.is_finite() && intervals >= 0.0) {
        return usize::MAX;
    }
    (intervals as usize).saturating_add(1)
}

/// Tick positions `0, step, 2*step, ...` not exceeding `y_max`, at most
/// [`MAX_TICKS`] of them.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn ticks(y_max: f64, step: f64) -> Vec<f64> {
    (0..tick_count(y_max, step).min(MAX_TICKS))
        .map(|i| i as f64 * step)
        .collect()
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
