use crate::components::{Component, EventResult};
use crate::state::AppState;
use crate::util::format::{format_count, format_currency, format_signed_compact};
use crate::util::styles::{
    BASELINE_COLOR, HEADER_COLOR, SCENARIO_COLOR, delta_color, inverted_delta_color, titled_block,
};
use crossterm::event::KeyEvent;
use gmesim_core::FinancialOutcome;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::Screen;

const LABEL_WIDTH: usize = 26;
const COL_WIDTH: usize = 16;

/// Whether a growing delta is good, bad, or neither for this metric.
enum Polarity {
    Favorable,
    Unfavorable,
    Neutral,
}

struct MetricRow {
    label: &'static str,
    baseline: String,
    scenario: String,
    delta: f64,
    polarity: Polarity,
    bold: bool,
}

pub struct ComparisonScreen;

impl ComparisonScreen {
    pub fn new() -> Self {
        Self
    }

    fn rows(base: &FinancialOutcome, scen: &FinancialOutcome) -> Vec<MetricRow> {
        let currency = |label: &'static str,
                        base_v: f64,
                        scen_v: f64,
                        polarity: Polarity,
                        bold: bool| MetricRow {
            label,
            baseline: format_currency(base_v),
            scenario: format_currency(scen_v),
            delta: scen_v - base_v,
            polarity,
            bold,
        };

        let mut rows = vec![MetricRow {
            label: "Total Trainees",
            baseline: format_count(base.total_trainees),
            scenario: format_count(scen.total_trainees),
            delta: scen.total_trainees as f64 - base.total_trainees as f64,
            polarity: Polarity::Neutral,
            bold: false,
        }];

        for ((label, base_v), (_, scen_v)) in base
            .revenue_components()
            .iter()
            .zip(scen.revenue_components().iter())
        {
            rows.push(currency(label, *base_v, *scen_v, Polarity::Favorable, false));
        }
        rows.push(currency(
            "Total Revenue",
            base.total_revenue,
            scen.total_revenue,
            Polarity::Favorable,
            true,
        ));

        for ((label, base_v), (_, scen_v)) in base
            .cost_components()
            .iter()
            .zip(scen.cost_components().iter())
        {
            rows.push(currency(
                label,
                *base_v,
                *scen_v,
                Polarity::Unfavorable,
                false,
            ));
        }
        rows.push(currency(
            "Total Cost",
            base.total_cost,
            scen.total_cost,
            Polarity::Unfavorable,
            true,
        ));

        rows.push(currency(
            "Net Position",
            base.net_position,
            scen.net_position,
            Polarity::Favorable,
            true,
        ));
        rows.push(currency(
            "Revenue per Trainee",
            base.revenue_per_trainee,
            scen.revenue_per_trainee,
            Polarity::Favorable,
            false,
        ));
        rows.push(currency(
            "Cost per Trainee",
            base.cost_per_trainee,
            scen.cost_per_trainee,
            Polarity::Unfavorable,
            false,
        ));

        rows
    }

    fn row_line(row: &MetricRow) -> Line<'static> {
        let delta_style = match row.polarity {
            Polarity::Favorable => Style::default().fg(delta_color(row.delta)),
            Polarity::Unfavorable => Style::default().fg(inverted_delta_color(row.delta)),
            Polarity::Neutral => Style::default().fg(Color::Gray),
        };
        let label_style = if row.bold {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        Line::from(vec![
            Span::styled(
                format!("{:<width$}", row.label, width = LABEL_WIDTH),
                label_style,
            ),
            Span::styled(
                format!("{:>width$}", row.baseline, width = COL_WIDTH),
                label_style.fg(BASELINE_COLOR),
            ),
            Span::styled(
                format!("{:>width$}", row.scenario, width = COL_WIDTH),
                label_style.fg(SCENARIO_COLOR),
            ),
            Span::styled(
                format!(
                    "{:>width$}",
                    format_signed_compact(row.delta),
                    width = COL_WIDTH
                ),
                if row.bold {
                    delta_style.add_modifier(Modifier::BOLD)
                } else {
                    delta_style
                },
            ),
        ])
    }
}

impl Component for ComparisonScreen {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let header = Line::from(vec![
            Span::styled(
                format!("{:<width$}", "Metric", width = LABEL_WIDTH),
                Style::default()
                    .fg(HEADER_COLOR)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("{:>width$}", "Baseline", width = COL_WIDTH),
                Style::default()
                    .fg(HEADER_COLOR)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("{:>width$}", "Scenario", width = COL_WIDTH),
                Style::default()
                    .fg(HEADER_COLOR)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("{:>width$}", "Change", width = COL_WIDTH),
                Style::default()
                    .fg(HEADER_COLOR)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);

        let mut lines = vec![header, Line::from("")];
        for row in Self::rows(&state.comparison.baseline, &state.comparison.scenario) {
            lines.push(Self::row_line(&row));
        }

        let paragraph = Paragraph::new(lines).block(titled_block("Baseline vs. Scenario"));
        frame.render_widget(paragraph, area);
    }
}

impl Screen for ComparisonScreen {
    fn title(&self) -> &str {
        "Comparison"
    }
}
