//! Horizontal bar rendering for dashboard chart series.

use pocket_core::ChartSeries;

const BAR_GLYPH: char = '█';
pub const DEFAULT_BAR_WIDTH: usize = 30;

/// One text line per point: padded label, a bar scaled against the largest
/// value, then the caller-formatted amount. Non-zero values always get at
/// least one glyph.
pub fn render_bars(
    series: &ChartSeries,
    width: usize,
    format_value: impl Fn(f64) -> String,
) -> Vec<String> {
    let max = series.max_value();
    let label_width = series
        .labels
        .iter()
        .map(|label| label.chars().count())
        .max()
        .unwrap_or(0);

    series
        .points()
        .map(|(label, value)| {
            let bar = BAR_GLYPH.to_string().repeat(bar_length(value, max, width));
            format!(
                "  {:<label_width$}  {:<width$}  {}",
                label,
                bar,
                format_value(value),
                label_width = label_width,
                width = width
            )
        })
        .collect()
}

fn bar_length(value: f64, max: f64, width: usize) -> usize {
    if value <= 0.0 || max <= 0.0 {
        return 0;
    }
    let scaled = (value / max * width as f64).round() as usize;
    scaled.clamp(1, width)
}
