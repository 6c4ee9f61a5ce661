use crate::components::kpi::render_kpis;
use crate::components::{Component, EventResult};
use crate::state::AppState;
use crate::util::format::{format_compact_currency, format_count, format_percentage};
use crate::util::styles::{HEADER_COLOR, delta_color, titled_block};
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::Screen;

pub struct OverviewScreen;

impl OverviewScreen {
    pub fn new() -> Self {
        Self
    }

    fn render_narrative(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let summary = &state.comparison.summary;

        let direction = if summary.net_change >= 0.0 {
            "improves"
        } else {
            "worsens"
        };

        let mut lines = vec![
            Line::from(vec![
                Span::raw("This scenario "),
                Span::styled(direction, Style::default().fg(delta_color(summary.net_change))),
                Span::raw(" the net position by "),
                Span::styled(
                    format_compact_currency(summary.net_change.abs()),
                    Style::default()
                        .fg(delta_color(summary.net_change))
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" per year."),
            ]),
            Line::from(""),
        ];

        lines.push(Line::from(format!(
            "Largest revenue driver: {} ({})",
            summary.revenue_driver.label,
            crate::util::format::format_signed_compact(summary.revenue_driver.delta)
        )));
        lines.push(Line::from(format!(
            "Largest cost driver: {} ({})",
            summary.cost_driver.label,
            crate::util::format::format_signed_compact(summary.cost_driver.delta)
        )));

        lines.push(Line::from(""));
        if summary.sustainable {
            lines.push(Line::from(Span::styled(
                "The program remains self-sustaining under these assumptions.",
                Style::default().fg(crate::util::styles::POSITIVE_COLOR),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                "The program runs at a deficit under these assumptions.",
                Style::default().fg(crate::util::styles::NEGATIVE_COLOR),
            )));
        }

        let paragraph = Paragraph::new(lines)
            .block(titled_block("Scenario Summary"))
            .wrap(ratatui::widgets::Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }

    fn render_program_profile(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let scenario = &state.comparison.scenario;
        let adjustments = &state.adjustments;

        let row = |label: &str, value: String| {
            Line::from(vec![
                Span::styled(
                    format!("{:<26}", label),
                    Style::default().fg(HEADER_COLOR),
                ),
                Span::raw(value),
            ])
        };

        let lines = vec![
            row("Residents", format_count(adjustments.residents)),
            row("Fellows", format_count(adjustments.fellows)),
            row(
                "At primary site",
                format!(
                    "{} ({})",
                    format_count(scenario.trainees_primary),
                    format_percentage(adjustments.pct_primary)
                ),
            ),
            row(
                "At affiliated sites",
                format_count(scenario.trainees_affiliated),
            ),
            row("Training sites", format_count(adjustments.sites)),
            Line::from(""),
            row(
                "Revenue per trainee",
                format_compact_currency(scenario.revenue_per_trainee),
            ),
            row(
                "Cost per trainee",
                format_compact_currency(scenario.cost_per_trainee),
            ),
        ];

        let paragraph = Paragraph::new(lines).block(titled_block("Program Profile"));
        frame.render_widget(paragraph, area);
    }
}

impl Component for OverviewScreen {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // KPI cards
                Constraint::Min(0),    // Narrative and profile
            ])
            .split(area);

        render_kpis(frame, chunks[0], &state.comparison);

        let bottom = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(chunks[1]);

        self.render_narrative(frame, bottom[0], state);
        self.render_program_profile(frame, bottom[1], state);
    }
}

impl Screen for OverviewScreen {
    fn title(&self) -> &str {
        "Overview"
    }
}
