//! Line chart for the IME rate sensitivity sweep.

use gmesim_core::SensitivityPoint;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style, Stylize},
    symbols,
    text::Span,
    widgets::{Axis, Chart, Dataset, GraphType},
};

use crate::util::format::format_compact_currency;
use crate::util::styles::{FOCUS_COLOR, HELP_COLOR, titled_block};

/// Render the net-position curve across the IME adjustment sweep, with a
/// marker at the scenario's current adjustment.
pub fn render_sensitivity_chart(
    frame: &mut Frame,
    area: Rect,
    points: &[SensitivityPoint],
    current_adjustment: f64,
    current_net: f64,
) {
    if points.is_empty() {
        return;
    }

    let data: Vec<(f64, f64)> = points
        .iter()
        .map(|p| (p.adjustment * 100.0, p.net_position))
        .collect();
    let current = [(current_adjustment * 100.0, current_net)];

    let x_min = data.first().map(|(x, _)| *x).unwrap_or(-30.0);
    let x_max = data.last().map(|(x, _)| *x).unwrap_or(30.0);

    let mut y_min = data.iter().map(|(_, y)| *y).fold(f64::INFINITY, f64::min);
    let mut y_max = data
        .iter()
        .map(|(_, y)| *y)
        .fold(f64::NEG_INFINITY, f64::max);
    y_min = y_min.min(current_net).min(0.0);
    y_max = y_max.max(current_net).max(0.0);
    let y_padding = (y_max - y_min).abs().max(1.0) * 0.1;
    let (y_min, y_max) = (y_min - y_padding, y_max + y_padding);

    // Flat reference line at breakeven.
    let zero_line = [(x_min, 0.0), (x_max, 0.0)];

    let datasets = vec![
        Dataset::default()
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(HELP_COLOR))
            .data(&zero_line),
        Dataset::default()
            .name("Net position")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Green))
            .data(&data),
        Dataset::default()
            .name("Current")
            .marker(symbols::Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(FOCUS_COLOR))
            .data(&current),
    ];

    let x_labels = vec![
        Span::raw(format!("{:+.0}%", x_min)),
        Span::raw("0%".to_string()),
        Span::raw(format!("{:+.0}%", x_max)),
    ];
    let y_labels = vec![
        Span::raw(format_compact_currency(y_min)),
        Span::raw(format_compact_currency((y_min + y_max) / 2.0)),
        Span::raw(format_compact_currency(y_max)),
    ];

    let x_axis = Axis::default()
        .title("IME adjustment".dark_gray())
        .bounds([x_min, x_max])
        .labels(x_labels);
    let y_axis = Axis::default()
        .title("Net position".dark_gray())
        .bounds([y_min, y_max])
        .labels(y_labels);

    let chart = Chart::new(datasets)
        .block(titled_block("IME Rate Sensitivity"))
        .x_axis(x_axis)
        .y_axis(y_axis);

    frame.render_widget(chart, area);
}
