//! Horizontal waterfall chart for the net-position decomposition.
//!
//! Each factor row draws a bar segment between the previous and new running
//! total, so the eye can follow the bridge from the baseline anchor down to
//! the scenario anchor.

use gmesim_core::WaterfallStep;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::util::format::format_signed_compact;
use crate::util::styles::{
    BASELINE_COLOR, HELP_COLOR, NEGATIVE_COLOR, POSITIVE_COLOR, SCENARIO_COLOR, titled_block,
};

const LABEL_WIDTH: usize = 22;
const VALUE_WIDTH: usize = 10;

/// Value range the bar track maps onto. Padded so the extremes do not sit
/// flush against the panel edges.
fn chart_bounds(baseline_net: f64, steps: &[WaterfallStep]) -> (f64, f64) {
    let mut min = baseline_net;
    let mut max = baseline_net;
    for step in steps {
        min = min.min(step.running_total);
        max = max.max(step.running_total);
    }
    let padding = (max - min).abs().max(1.0) * 0.05;
    (min - padding, max + padding)
}

fn cell_for(value: f64, min: f64, max: f64, track_width: usize) -> usize {
    let span = max - min;
    let frac = if span > 0.0 { (value - min) / span } else { 0.0 };
    ((frac * (track_width - 1) as f64).round() as usize).min(track_width - 1)
}

/// A row where the bar fills cells [from, to] in the given color.
fn bar_row(
    label: &str,
    from: usize,
    to: usize,
    track_width: usize,
    color: Color,
    value_text: String,
    bold: bool,
) -> Line<'static> {
    let (lo, hi) = if from <= to { (from, to) } else { (to, from) };

    let mut bar = String::new();
    for i in 0..track_width {
        bar.push(if i >= lo && i <= hi { '█' } else { ' ' });
    }

    let label_style = if bold {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    Line::from(vec![
        Span::styled(format!("{:<width$}", label, width = LABEL_WIDTH), label_style),
        Span::styled(bar, Style::default().fg(color)),
        Span::styled(
            format!(" {:>width$}", value_text, width = VALUE_WIDTH),
            Style::default().fg(color),
        ),
    ])
}

/// Render the waterfall: baseline anchor, one bar per step, scenario anchor.
pub fn render_waterfall(
    frame: &mut Frame,
    area: Rect,
    baseline_net: f64,
    scenario_net: f64,
    steps: &[WaterfallStep],
) {
    let block = titled_block("Net Position Bridge");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let track_width = (inner.width as usize).saturating_sub(LABEL_WIDTH + VALUE_WIDTH + 1);
    if track_width < 4 || inner.height < 3 {
        let paragraph = Paragraph::new("Window too small for chart");
        frame.render_widget(paragraph, inner);
        return;
    }

    let (min, max) = chart_bounds(baseline_net, steps);
    let mut lines = Vec::with_capacity(steps.len() + 2);

    let baseline_cell = cell_for(baseline_net, min, max, track_width);
    lines.push(bar_row(
        "Baseline",
        0,
        baseline_cell,
        track_width,
        BASELINE_COLOR,
        crate::util::format::format_compact_currency(baseline_net),
        true,
    ));

    let mut running = baseline_net;
    for step in steps {
        let from = cell_for(running, min, max, track_width);
        let to = cell_for(step.running_total, min, max, track_width);
        let color = if step.delta.abs() < 0.005 {
            HELP_COLOR
        } else if step.delta > 0.0 {
            POSITIVE_COLOR
        } else {
            NEGATIVE_COLOR
        };
        lines.push(bar_row(
            step.label,
            from,
            to,
            track_width,
            color,
            format_signed_compact(step.delta),
            false,
        ));
        running = step.running_total;
    }

    let scenario_cell = cell_for(scenario_net, min, max, track_width);
    lines.push(bar_row(
        "Scenario",
        0,
        scenario_cell,
        track_width,
        SCENARIO_COLOR,
        crate::util::format::format_compact_currency(scenario_net),
        true,
    ));

    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_mapping_spans_track() {
        assert_eq!(cell_for(0.0, 0.0, 100.0, 50), 0);
        assert_eq!(cell_for(100.0, 0.0, 100.0, 50), 49);
        assert_eq!(cell_for(50.0, 0.0, 100.0, 50), 25);
    }

    #[test]
    fn test_cell_mapping_degenerate_range() {
        // All running totals equal: everything maps to the left edge.
        assert_eq!(cell_for(5.0, 5.0, 5.0, 40), 0);
    }

    #[test]
    fn test_bounds_cover_all_running_totals() {
        let steps = vec![
            WaterfallStep {
                label: "A",
                delta: 10.0,
                running_total: 110.0,
            },
            WaterfallStep {
                label: "B",
                delta: -40.0,
                running_total: 70.0,
            },
        ];
        let (min, max) = chart_bounds(100.0, &steps);
        assert!(min < 70.0);
        assert!(max > 110.0);
    }
}
