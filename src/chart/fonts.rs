//! Bundled font registration.
//!
//! Text is always drawn with the bundled DejaVu Sans so the output does not
//! depend on which fonts the host has installed.

use std::sync::OnceLock;

use plotters::style::{FontFamily, FontStyle, register_font};

use crate::error::{ChartError, Result};

static DEJAVU_SANS: &[u8] = include_bytes!("../../assets/DejaVuSans.ttf");

static REGISTERED: OnceLock<std::result::Result<(), String>> = OnceLock::new();

/// Family every chart text element is drawn with.
pub const CHART_FONT: FontFamily<'static> = FontFamily::SansSerif;

/// Register the bundled font under the sans-serif family, once per process.
///
/// # Errors
/// Returns `Render` if the embedded font data cannot be parsed.
pub fn ensure_registered() -> Result<()> {
    REGISTERED
        .get_or_init(|| {
            register_font(CHART_FONT.as_str(), FontStyle::Normal, DEJAVU_SANS)
                .map_err(|_| "bundled font could not be loaded".to_string())
        })
        .clone()
        .map_err(ChartError::Render)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_is_idempotent() {
        assert!(ensure_registered().is_ok());
        assert!(ensure_registered().is_ok());
    }

    #[test]
    fn bundled_font_is_truetype() {
        assert_eq!(&DEJAVU_SANS[..4], &[0x00, 0x01, 0x00, 0x00]);
    }
}
