//! Number formatting for axis ticks and summaries.

/// Most decimals a tick label will carry.
const MAX_DECIMALS: usize = 6;

/// Steps outside `SCIENTIFIC_BELOW..SCIENTIFIC_FROM` get scientific labels.
const SCIENTIFIC_BELOW: f64 = 1e-6;
const SCIENTIFIC_FROM: f64 = 1e15;

/// Number of decimals needed to write `step` exactly.
#[must_use]
#[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
pub fn decimals_for_step(step: f64) -> usize {
    (0..=MAX_DECIMALS)
        .find(|&decimals| {
            let scaled = step * 10f64.powi(decimals as i32);
            (scaled - scaled.round()).abs() < 1e-6 * scaled.abs().max(1.0)
        })
        .unwrap_or(MAX_DECIMALS)
}

/// Format a tick value with the precision of its step, so `0, 2.5, 5, 7.5`
/// render as `0.0, 2.5, 5.0, 7.5` and `0, 5, 10` as `0, 5, 10`.
#[must_use]
pub fn format_tick(value: f64, step: f64) -> String {
    let magnitude = step.abs();
    if magnitude > 0.0 && !(SCIENTIFIC_BELOW..SCIENTIFIC_FROM).contains(&magnitude) {
        return format!("{value:.2e}");
    }

    let decimals = decimals_for_step(step);
    let text = format!("{value:.decimals$}");
    // Avoid "-0" from rounding tiny negative noise.
    if text.starts_with('-') && text[1..].chars().all(|c| c == '0' || c == '.') {
        text[1..].to_string()
    } else {
        text
    }
}

/// Format a measured value compactly for text output.
///
/// Whole numbers drop the fraction; others keep up to three decimals with
/// trailing zeros trimmed.
#[must_use]
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        return format!("{value:.0}");
    }
    let text = format!("{value:.3}");
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
