//! Top-line KPI cards: trainees, revenue, cost, net position, case volume,
//! each with its delta against the baseline.

use crate::state::Comparison;
use crate::util::format::{
    format_compact_currency, format_count, format_signed_compact, format_signed_count,
};
use crate::util::styles::{HELP_COLOR, delta_color, inverted_delta_color, titled_block};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

struct Card {
    label: &'static str,
    value: String,
    delta: String,
    delta_color: Color,
}

fn cards(comparison: &Comparison) -> Vec<Card> {
    let base = &comparison.baseline;
    let scen = &comparison.scenario;

    let trainee_delta = scen.total_trainees as i64 - base.total_trainees as i64;
    let revenue_delta = scen.total_revenue - base.total_revenue;
    let cost_delta = scen.total_cost - base.total_cost;
    let net_delta = comparison.summary.net_change;
    let case_delta = (scen.annual_cases - base.annual_cases).round() as i64;

    vec![
        Card {
            label: "Total Trainees",
            value: format_count(scen.total_trainees),
            delta: format!("{} vs. baseline", format_signed_count(trainee_delta)),
            delta_color: delta_color(trainee_delta as f64),
        },
        Card {
            label: "Total Revenue",
            value: format_compact_currency(scen.total_revenue),
            delta: format!("{} vs. baseline", format_signed_compact(revenue_delta)),
            delta_color: delta_color(revenue_delta),
        },
        Card {
            label: "Total Cost",
            value: format_compact_currency(scen.total_cost),
            delta: format!("{} vs. baseline", format_signed_compact(cost_delta)),
            delta_color: inverted_delta_color(cost_delta),
        },
        Card {
            label: "Net Position",
            value: format_compact_currency(scen.net_position),
            delta: format!("{} vs. baseline", format_signed_compact(net_delta)),
            delta_color: delta_color(net_delta),
        },
        Card {
            label: "Annual Cases",
            value: format_count(scen.annual_cases.round() as u32),
            delta: format!("{} vs. baseline", format_signed_count(case_delta)),
            delta_color: delta_color(case_delta as f64),
        },
    ]
}

/// Render the KPI card row across the given area.
pub fn render_kpis(frame: &mut Frame, area: Rect, comparison: &Comparison) {
    let cards = cards(comparison);
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![
            Constraint::Ratio(1, cards.len() as u32);
            cards.len()
        ])
        .split(area);

    for (card, chunk) in cards.iter().zip(chunks.iter()) {
        let lines = vec![
            Line::from(Span::styled(
                card.value.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                card.delta.clone(),
                Style::default().fg(card.delta_color),
            )),
        ];

        let paragraph = Paragraph::new(lines).block(
            titled_block(card.label).title_style(Style::default().fg(HELP_COLOR)),
        );
        frame.render_widget(paragraph, *chunk);
    }
}
