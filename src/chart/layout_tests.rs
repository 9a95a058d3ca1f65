use super::*;
use crate::error::ChartError;
use crate::results::ResultRow;

/// Monospace stand-in: every glyph is 0.6 em wide and 1 em tall.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn fake_measure(text: &str, px: f64) -> Result<(u32, u32)> {
    Ok(((text.chars().count() as f64 * px * 0.6) as u32, px as u32))
}

fn sample_chart(config: &ChartConfig) -> BarChart {
    let rows = vec![
        ResultRow::new("Dijkstra", 12.5),
        ResultRow::new("A*", 8.1),
        ResultRow::new("BFS", 15.0),
    ];
    BarChart::from_rows(&rows, config).unwrap()
}

#[test]
fn font_sizes_scale_with_dpi() {
    let config = ChartConfig::default();
    let layout = Layout::compute(&sample_chart(&config), &config, fake_measure).unwrap();

    assert!((layout.title_font_px - 12.0 * 200.0 / 72.0).abs() < 1e-9);
    assert!((layout.label_font_px - 10.0 * 200.0 / 72.0).abs() < 1e-9);
}

#[test]
fn label_areas_fit_measured_text() {
    let config = ChartConfig::default();
    let chart = sample_chart(&config);
    let layout = Layout::compute(&chart, &config, fake_measure).unwrap();
    let label_px = config.pt_to_px(LABEL_FONT_PT);

    assert!(f64::from(layout.x_label_area) >= label_px);
    // Widest tick label is two characters ("10", "12", "14").
    assert!(f64::from(layout.y_label_area) >= 2.0 * 0.6 * label_px + label_px);
}

#[test]
fn wider_tick_labels_widen_y_area() {
    let config = ChartConfig::default();
    let narrow = sample_chart(&config);
    let wide = BarChart::from_rows(&[ResultRow::new("slow", 123_456.0)], &config).unwrap();

    let narrow_layout = Layout::compute(&narrow, &config, fake_measure).unwrap();
    let wide_layout = Layout::compute(&wide, &config, fake_measure).unwrap();

    assert!(wide_layout.y_label_area > narrow_layout.y_label_area);
}

#[test]
fn empty_y_label_needs_less_room() {
    let config = ChartConfig::default();
    let mut chart = sample_chart(&config);
    let with_desc = Layout::compute(&chart, &config, fake_measure).unwrap();
    chart.y_label.clear();
    let without_desc = Layout::compute(&chart, &config, fake_measure).unwrap();

    assert!(without_desc.y_label_area < with_desc.y_label_area);
}

#[test]
fn long_last_label_widens_right_margin() {
    let config = ChartConfig::default();
    let rows = vec![
        ResultRow::new("a", 1.0),
        ResultRow::new("a very long method name indeed", 2.0),
    ];
    let chart = BarChart::from_rows(&rows, &config).unwrap();
    let layout = Layout::compute(&chart, &config, fake_measure).unwrap();

    assert!(layout.margin_right > layout.margin_left);
}

#[test]
fn lines_are_at_least_one_pixel() {
    let config = ChartConfig::default().with_dpi(10);
    let chart = sample_chart(&config);
    let layout = Layout::compute(&chart, &config, fake_measure).unwrap();

    assert_eq!(layout.line_px, 1);
}

#[test]
fn measurement_errors_propagate() {
    let config = ChartConfig::default();
    let chart = sample_chart(&config);

    let err = Layout::compute(&chart, &config, |_, _| {
        Err(ChartError::Render("no font".to_string()))
    })
    .unwrap_err();

    assert_eq!(err.to_string(), "Rendering failed: no font");
}
