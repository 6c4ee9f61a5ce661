//! Grouped baseline-vs-scenario bar charts for revenue and cost components.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Bar, BarChart, BarGroup},
};

use crate::util::format::format_compact_currency;
use crate::util::styles::{BASELINE_COLOR, SCENARIO_COLOR, titled_block};

/// Render side-by-side baseline and scenario bars, one group per component.
///
/// `components` pairs each label with its (baseline, scenario) values.
pub fn render_grouped_bars(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    components: &[(&'static str, f64, f64)],
) {
    let groups: Vec<BarGroup> = components
        .iter()
        .map(|(label, baseline, scenario)| {
            let bars = vec![
                Bar::default()
                    .value(scale(*baseline))
                    .text_value(format_compact_currency(*baseline))
                    .style(Style::default().fg(BASELINE_COLOR)),
                Bar::default()
                    .value(scale(*scenario))
                    .text_value(format_compact_currency(*scenario))
                    .style(Style::default().fg(SCENARIO_COLOR)),
            ];
            BarGroup::default().label(Line::from(*label)).bars(&bars)
        })
        .collect();

    let mut chart = BarChart::default()
        .block(titled_block(title))
        .bar_width(9)
        .bar_gap(1)
        .group_gap(3);
    for group in groups {
        chart = chart.data(group);
    }

    frame.render_widget(chart, area);
}

/// Bar values are u64; plot in thousands so typical magnitudes stay within
/// a sensible range. Components are non-negative by construction.
fn scale(value: f64) -> u64 {
    (value / 1_000.0).max(0.0).round() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_in_thousands() {
        assert_eq!(scale(72_800_000.0), 72_800);
        assert_eq!(scale(0.0), 0);
        assert_eq!(scale(-50.0), 0);
    }
}
